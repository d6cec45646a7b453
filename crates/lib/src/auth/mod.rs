//! Credential checks against the directory.
//!
//! Passwords are compared in plaintext. There is no rate limiting or lockout.

use crate::{Result, store::RecordStore, user::UserRecord};

mod errors;
pub use errors::AuthError;

/// Checks a username/password pair against the current persisted directory.
#[derive(Clone)]
pub struct AuthGate {
    records: RecordStore,
}

impl AuthGate {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    /// Find the record matching both `username` and `password` exactly.
    ///
    /// The directory is re-read on every call. If several records match, the
    /// first one in directory order wins.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<UserRecord> {
        let found = self
            .records
            .load_all()
            .into_iter()
            .find(|r| r.username == username && r.password == password);
        match found {
            Some(record) => {
                tracing::debug!("Authenticated '{}' ({})", record.username, record.id);
                Ok(record)
            }
            None => {
                tracing::info!("Rejected login for '{username}'");
                Err(AuthError::AuthFailure.into())
            }
        }
    }
}
