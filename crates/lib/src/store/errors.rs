//! Error types for slot-backed stores.

use thiserror::Error;

/// Errors raised while encoding or decoding a persisted slot.
///
/// `Decode` is the persistence decode failure of the directory and session
/// slots. Store readers log it and fall back (seed admin, or no session)
/// instead of returning it.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Encoding a value for a slot failed
    #[error("Serialization failed for slot '{slot}': {source}")]
    Serialize {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A slot holds data that does not decode to the expected type
    #[error("Persisted slot '{slot}' could not be decoded: {source}")]
    Decode {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
