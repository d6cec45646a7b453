//! Portal error types.

use thiserror::Error;

/// Errors raised by [`Portal`](super::Portal) itself.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// The session's user may not manage the directory.
    #[error("Operation requires admin role; '{username}' is not an admin")]
    InsufficientPermissions { username: String },
}

impl PortalError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, PortalError::InsufficientPermissions { .. })
    }
}

impl From<PortalError> for crate::Error {
    fn from(err: PortalError) -> Self {
        crate::Error::Portal(err)
    }
}
