//!
//! portalgate: the local user directory behind a captive-portal login gate.
//! This library provides the core components for storing network-access credentials
//! on the client device, authenticating against them, and moving them between devices.
//!
//! ## Core Concepts
//!
//! * **Backends (`backend::KeyValueStore`)**: A pluggable string slot store. The core only ever
//!   talks to this capability, so tests can run against [`backend::InMemory`] and the CLI against
//!   [`backend::FileStore`].
//! * **Stores (`store::RecordStore`, `store::SessionStore`)**: Narrow, named views over the
//!   `"users"` and `"session"` slots with whole-value load/save semantics.
//! * **Directory (`directory::DirectoryService`)**: The CRUD façade enforcing username
//!   uniqueness, the protected seed admin, and the self-deletion guard.
//! * **Sync (`sync::SyncCodec`)**: Export of the full directory to a dated JSON document and
//!   validated, all-or-nothing import of such a document.
//! * **Auth (`auth::AuthGate`)**: Plaintext credential check against the current directory.
//! * **Portal (`portal::Portal`)**: The top-level handle tying the above together and driving
//!   the login/logout transitions.

pub mod auth;
pub mod backend;
pub mod clock;
pub mod constants;
pub mod directory;
pub mod portal;
pub mod store;
pub mod sync;
pub mod user;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use directory::{Confirmation, DirectoryService};
pub use portal::Portal;

/// Result type used throughout the portalgate library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the portalgate library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured backend errors from the backend module
    #[error(transparent)]
    Backend(backend::BackendError),

    /// Structured persistence errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured directory rule violations from the directory module
    #[error(transparent)]
    Directory(directory::DirectoryError),

    /// Structured import/export errors from the sync module
    #[error(transparent)]
    Sync(sync::SyncError),

    /// Structured authentication errors from the auth module
    #[error(transparent)]
    Auth(auth::AuthError),

    /// Structured portal errors from the portal module
    #[error(transparent)]
    Portal(portal::PortalError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Backend(_) => "backend",
            Error::Store(_) => "store",
            Error::Directory(_) => "directory",
            Error::Sync(_) => "sync",
            Error::Auth(_) => "auth",
            Error::Portal(_) => "portal",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Directory(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Directory(err) => err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error indicates permission was denied.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::Directory(err) => err.is_permission_denied(),
            Error::Portal(err) => err.is_permission_denied(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this error is a caller input problem rather than a storage fault.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Directory(err) => err.is_validation_error(),
            Error::Sync(err) => err.is_malformed(),
            _ => false,
        }
    }

    /// Check if the operation was rejected for lack of caller confirmation.
    pub fn is_not_confirmed(&self) -> bool {
        match self {
            Error::Directory(err) => err.is_not_confirmed(),
            Error::Sync(err) => err.is_not_confirmed(),
            _ => false,
        }
    }

    /// Check if this error is storage-related.
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Backend(_) | Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Backend(err) => err.is_io_error(),
            _ => false,
        }
    }
}
