//! Authentication error types.

use thiserror::Error;

/// Errors from [`AuthGate`](super::AuthGate).
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No record matches the given username and password.
    ///
    /// Deliberately does not say which of the two was wrong.
    #[error("Invalid credentials")]
    AuthFailure,
}

impl From<AuthError> for crate::Error {
    fn from(err: AuthError) -> Self {
        crate::Error::Auth(err)
    }
}
