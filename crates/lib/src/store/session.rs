//! Persisted session slot.

use std::sync::Arc;

use super::StoreError;
use crate::{Result, backend::KeyValueStore, constants::SESSION, user::Session};

/// Owns the `"session"` slot, holding at most one [`Session`].
///
/// Sessions never expire; one stays in place until [`clear`](Self::clear).
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// The persisted session, if any.
    ///
    /// An unreadable or corrupt slot is logged and reads as no session.
    pub fn get(&self) -> Option<Session> {
        let json = match self.backend.get(SESSION) {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read session slot: {e}");
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(source) => {
                let err = StoreError::Decode {
                    slot: SESSION,
                    source,
                };
                tracing::warn!("Ignoring persisted session: {err}");
                None
            }
        }
    }

    /// Replace the persisted session.
    pub fn set(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session).map_err(|source| StoreError::Serialize {
            slot: SESSION,
            source,
        })?;
        self.backend.set(SESSION, &json)
    }

    /// Remove the persisted session.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(SESSION)
    }
}
