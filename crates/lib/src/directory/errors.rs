//! Error types for directory operations
use thiserror::Error;

/// Rule violations reported by [`DirectoryService`](super::DirectoryService).
///
/// Every variant is a precondition failure the caller has to correct; none of
/// them leave the directory partially modified.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Username already exists: {username}")]
    DuplicateUsername { username: String },

    #[error("User not found: {id}")]
    NotFound { id: String },

    #[error("User {id} is the protected seed admin and cannot be deleted")]
    ProtectedRecord { id: String },

    #[error("User {id} is the signed-in account and cannot delete itself")]
    SelfDeletion { id: String },

    #[error("Field must not be empty: {field}")]
    EmptyField { field: &'static str },

    #[error("Operation not confirmed: {operation}")]
    NotConfirmed { operation: &'static str },
}

impl DirectoryError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        matches!(self, DirectoryError::DuplicateUsername { .. })
    }

    /// Check if the operation is forbidden for the target record.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            DirectoryError::ProtectedRecord { .. } | DirectoryError::SelfDeletion { .. }
        )
    }

    /// Check if this error is about the caller's input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DirectoryError::EmptyField { .. } | DirectoryError::DuplicateUsername { .. }
        )
    }

    pub fn is_not_confirmed(&self) -> bool {
        matches!(self, DirectoryError::NotConfirmed { .. })
    }
}

impl From<DirectoryError> for crate::Error {
    fn from(err: DirectoryError) -> Self {
        crate::Error::Directory(err)
    }
}
