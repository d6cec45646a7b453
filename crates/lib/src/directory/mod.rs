//! Directory management
//!
//! [`DirectoryService`] is the CRUD façade over the user directory. It holds
//! the authoritative in-memory copy for the lifetime of an admin session and
//! mirrors every change to the [`RecordStore`] before adopting it.
//!
//! Rules enforced here:
//! - usernames are unique across the live directory (exact, case-sensitive)
//! - usernames and passwords are non-empty
//! - the seed admin can never be deleted
//! - the signed-in actor cannot delete its own record

use uuid::Uuid;

use crate::{
    Result,
    constants::SEED_ADMIN_ID,
    store::RecordStore,
    user::{UserDraft, UserRecord},
};

mod errors;
pub use errors::DirectoryError;


/// Caller-supplied answer for operations that discard data.
///
/// The core never prompts; a front end asks the user (or takes a flag) and
/// passes the answer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

/// CRUD access to the directory on behalf of one authenticated actor.
pub struct DirectoryService {
    store: RecordStore,
    records: Vec<UserRecord>,
    actor_id: String,
}

impl DirectoryService {
    /// Load the directory from `store` for the actor with id `actor_id`.
    ///
    /// This is the only point where the service reads the store; afterwards it
    /// works from its own copy.
    pub fn open(store: RecordStore, actor_id: impl Into<String>) -> Self {
        let records = store.load_all();
        Self {
            store,
            records,
            actor_id: actor_id.into(),
        }
    }

    /// Id of the actor this service operates for.
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// The full directory in order.
    pub fn list(&self) -> &[UserRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DirectoryError::NotFound { id: id.to_string() }.into())
    }

    fn validate(draft: &UserDraft) -> Result<()> {
        if draft.username.is_empty() {
            return Err(DirectoryError::EmptyField { field: "username" }.into());
        }
        if draft.password.is_empty() {
            return Err(DirectoryError::EmptyField { field: "password" }.into());
        }
        Ok(())
    }

    /// Fail if any record other than `except_id` already uses `username`.
    fn ensure_unique(&self, username: &str, except_id: Option<&str>) -> Result<()> {
        let taken = self
            .records
            .iter()
            .any(|r| r.username == username && Some(r.id.as_str()) != except_id);
        if taken {
            return Err(DirectoryError::DuplicateUsername {
                username: username.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Persist `next` and adopt it as the current directory.
    ///
    /// The in-memory copy only changes once the write has succeeded.
    fn commit(&mut self, next: Vec<UserRecord>) -> Result<()> {
        self.store.save_all(&next)?;
        self.records = next;
        Ok(())
    }

    /// Add a new record with a freshly generated id.
    pub fn create(&mut self, draft: UserDraft) -> Result<UserRecord> {
        Self::validate(&draft)?;
        self.ensure_unique(&draft.username, None)?;

        let record = draft.into_record(Uuid::new_v4().to_string());
        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next)?;

        tracing::info!("Created user '{}' ({})", record.username, record.id);
        Ok(record)
    }

    /// Replace the username, password and role of the record with `id`.
    pub fn update(&mut self, id: &str, draft: UserDraft) -> Result<UserRecord> {
        let index = self.position(id)?;
        Self::validate(&draft)?;
        self.ensure_unique(&draft.username, Some(id))?;

        let record = draft.into_record(id.to_string());
        let mut next = self.records.clone();
        next[index] = record.clone();
        self.commit(next)?;

        tracing::info!("Updated user '{}' ({})", record.username, record.id);
        Ok(record)
    }

    /// Remove the record with `id`, returning it.
    ///
    /// Checked in order: the seed admin is protected, unknown ids are not
    /// found, the actor cannot remove itself, and the caller must confirm.
    pub fn delete(&mut self, id: &str, confirmation: Confirmation) -> Result<UserRecord> {
        if id == SEED_ADMIN_ID {
            return Err(DirectoryError::ProtectedRecord { id: id.to_string() }.into());
        }
        let index = self.position(id)?;
        if self.records[index].is_protected() {
            return Err(DirectoryError::ProtectedRecord { id: id.to_string() }.into());
        }
        if id == self.actor_id {
            return Err(DirectoryError::SelfDeletion { id: id.to_string() }.into());
        }
        if confirmation == Confirmation::Declined {
            return Err(DirectoryError::NotConfirmed { operation: "delete" }.into());
        }

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        tracing::info!("Deleted user '{}' ({})", removed.username, removed.id);
        Ok(removed)
    }

    /// Replace the whole directory, as-is, with `records`.
    ///
    /// No uniqueness validation happens here; callers validate structure first.
    pub(crate) fn replace_all(&mut self, records: Vec<UserRecord>) -> Result<()> {
        self.commit(records)
    }
}
