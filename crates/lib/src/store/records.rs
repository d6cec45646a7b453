//! Persisted mirror of the directory.

use std::sync::Arc;

use super::StoreError;
use crate::{Result, backend::KeyValueStore, constants::USERS, user::UserRecord};

/// Owns the `"users"` slot.
///
/// The slot always holds the whole directory as a JSON array; there is no
/// incremental write path. Reads fail soft: a missing, unreadable or corrupt
/// slot reads as the seed admin alone.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read and decode the slot, surfacing failures.
    fn read(&self) -> Result<Option<Vec<UserRecord>>> {
        let Some(json) = self.backend.get(USERS)? else {
            return Ok(None);
        };
        let records = serde_json::from_str(&json)
            .map_err(|source| StoreError::Decode { slot: USERS, source })?;
        Ok(Some(records))
    }

    /// Load the full directory.
    ///
    /// Never fails: if the slot is missing, or cannot be read or decoded, this
    /// returns a single seed admin record. Decode failures are logged.
    pub fn load_all(&self) -> Vec<UserRecord> {
        match self.read() {
            Ok(Some(records)) => {
                tracing::debug!("Loaded {} directory records", records.len());
                records
            }
            Ok(None) => {
                tracing::debug!("No persisted directory; using seed admin");
                vec![UserRecord::seed_admin()]
            }
            Err(e) => {
                tracing::warn!("Failed to load directory, falling back to seed admin: {e}");
                vec![UserRecord::seed_admin()]
            }
        }
    }

    /// Overwrite the persisted directory with `records`.
    pub fn save_all(&self, records: &[UserRecord]) -> Result<()> {
        let json = serde_json::to_string(records)
            .map_err(|source| StoreError::Serialize { slot: USERS, source })?;
        self.backend.set(USERS, &json)?;
        tracing::debug!("Saved {} directory records", records.len());
        Ok(())
    }

    /// Whether no live record is persisted.
    ///
    /// True for a missing slot, an unreadable or corrupt slot, and an empty array.
    pub fn is_empty(&self) -> bool {
        !matches!(self.read(), Ok(Some(records)) if !records.is_empty())
    }

    /// Persist the seed admin as the whole directory if [`is_empty`](Self::is_empty).
    ///
    /// # Returns
    /// `true` if the slot was (re)seeded.
    pub fn seed_if_empty(&self) -> Result<bool> {
        if !self.is_empty() {
            return Ok(false);
        }
        self.save_all(&[UserRecord::seed_admin()])?;
        tracing::info!("Seeded directory with the default admin");
        Ok(true)
    }
}
