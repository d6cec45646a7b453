//! Manual directory synchronization between devices
//!
//! The directory moves between devices as a sync document: a pretty-printed
//! JSON array of [`UserRecord`] objects, in directory order. Export writes one,
//! import replaces the whole local directory with the contents of one.
//!
//! Import is validate-then-swap. The document is fully decoded and checked
//! before anything is touched, the replacement is persisted through the
//! [`RecordStore`](crate::store::RecordStore), and only then adopted in memory.
//! Imported records are not checked against each other for duplicate
//! usernames; such a document is accepted as-is.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    Clock, Result,
    constants::EXPORT_FILE_PREFIX,
    directory::{Confirmation, DirectoryService},
    user::{Role, UserRecord},
};

mod errors;
pub use errors::SyncError;

/// A serialized directory ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncDocument {
    /// Suggested file name, carrying the export date
    pub file_name: String,
    /// JSON contents
    pub contents: String,
    /// Number of records in the document
    pub count: usize,
}

/// One element of an incoming document.
///
/// `username` and `password` are required. A missing id is replaced by a
/// fresh one and a missing role means [`Role::User`].
#[derive(Deserialize)]
struct IncomingRecord {
    #[serde(default)]
    id: Option<String>,
    username: String,
    password: String,
    #[serde(default)]
    role: Role,
}

impl IncomingRecord {
    fn into_record(self) -> UserRecord {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        UserRecord {
            id,
            username: self.username,
            password: self.password,
            role: self.role,
        }
    }
}

/// Serializes the directory for export and validates incoming documents.
#[derive(Clone, Debug)]
pub struct SyncCodec {
    clock: Arc<dyn Clock>,
}

impl SyncCodec {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// File name for an export made now, e.g. `portalgate-users-2024-01-31.json`.
    pub fn export_file_name(&self) -> String {
        format!(
            "{EXPORT_FILE_PREFIX}-{}.json",
            self.clock.today().format("%Y-%m-%d")
        )
    }

    /// Serialize the full directory, preserving order and every field.
    pub fn export(&self, directory: &DirectoryService) -> Result<SyncDocument> {
        let records = directory.list();
        let contents = serde_json::to_string_pretty(records)
            .map_err(|source| SyncError::Serialize { source })?;
        tracing::info!("Exported {} directory records", records.len());
        Ok(SyncDocument {
            file_name: self.export_file_name(),
            contents,
            count: records.len(),
        })
    }

    /// Validate `document` and decode it into records without touching any state.
    ///
    /// The document must be a non-empty JSON array whose elements are objects
    /// with non-empty string `username` and `password` fields. Any other field
    /// that is present must have the right type, and `role` must be `"admin"`
    /// or `"user"`.
    pub fn decode(document: &str) -> Result<Vec<UserRecord>> {
        let value: Value = serde_json::from_str(document)
            .map_err(|e| SyncError::malformed(format!("not valid JSON: {e}")))?;
        let Value::Array(elements) = value else {
            return Err(SyncError::malformed("top level is not an array").into());
        };
        if elements.is_empty() {
            return Err(SyncError::malformed("document contains no records").into());
        }

        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            if !element.is_object() {
                let reason = format!("record {index} is not an object");
                return Err(SyncError::malformed(reason).into());
            }
            let incoming: IncomingRecord = serde_json::from_value(element)
                .map_err(|e| SyncError::malformed(format!("record {index}: {e}")))?;
            for (field, value) in [
                ("username", &incoming.username),
                ("password", &incoming.password),
            ] {
                if value.is_empty() {
                    let reason = format!("record {index} has an empty {field}");
                    return Err(SyncError::malformed(reason).into());
                }
            }
            records.push(incoming.into_record());
        }
        Ok(records)
    }

    /// Replace the whole directory with the records in `document`.
    ///
    /// # Returns
    /// The number of imported records. On any error the directory, both in
    /// memory and persisted, is exactly as before.
    pub fn import(
        &self,
        directory: &mut DirectoryService,
        document: &str,
        confirmation: Confirmation,
    ) -> Result<usize> {
        let records = Self::decode(document)?;
        if confirmation == Confirmation::Declined {
            return Err(SyncError::NotConfirmed.into());
        }
        let count = records.len();
        directory.replace_all(records)?;
        tracing::info!("Imported {count} directory records");
        Ok(count)
    }
}
