//! Backend error types for portalgate.
//!
//! This module defines structured error types for slot storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing a persisted slot.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// File I/O error while accessing a slot.
    #[error("File I/O error on slot '{key}'")]
    FileIo {
        /// The slot being accessed
        key: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Slot name is not usable by this backend.
    #[error("Invalid slot name: {key:?}")]
    InvalidKey {
        /// The rejected slot name
        key: String,
    },
}

impl BackendError {
    /// Check if this error is related to I/O operations.
    pub fn is_io_error(&self) -> bool {
        matches!(self, BackendError::FileIo { .. })
    }

    /// Get the slot name this error is about.
    pub fn key(&self) -> &str {
        match self {
            BackendError::FileIo { key, .. } | BackendError::InvalidKey { key } => key,
        }
    }
}

// Conversion from BackendError to the main Error type
impl From<BackendError> for crate::Error {
    fn from(err: BackendError) -> Self {
        crate::Error::Backend(err)
    }
}
