//! Error types for directory import/export.

use thiserror::Error;

/// Errors from [`SyncCodec`](super::SyncCodec).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SyncError {
    /// The incoming document failed structural validation; nothing was changed.
    #[error("Malformed sync document: {reason}")]
    MalformedDocument { reason: String },

    /// The caller declined the import; nothing was changed.
    #[error("Import not confirmed")]
    NotConfirmed,

    /// Encoding the export failed.
    #[error("Failed to serialize sync document")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl SyncError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SyncError::MalformedDocument {
            reason: reason.into(),
        }
    }

    /// Check if the document was rejected by validation.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SyncError::MalformedDocument { .. })
    }

    pub fn is_not_confirmed(&self) -> bool {
        matches!(self, SyncError::NotConfirmed)
    }
}

impl From<SyncError> for crate::Error {
    fn from(err: SyncError) -> Self {
        crate::Error::Sync(err)
    }
}
