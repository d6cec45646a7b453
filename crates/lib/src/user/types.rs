//! Core data types for the user directory

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SEED_ADMIN_ID, SEED_ADMIN_PASSWORD, SEED_ADMIN_USERNAME};

/// Access role of a directory record.
///
/// Serialized as the lowercase strings `"admin"` and `"user"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May manage the directory.
    Admin,
    /// Network access only.
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One credential entry in the directory.
///
/// The `id` is opaque and never changes once assigned. The `username` is the
/// login identifier and is unique across the live directory (case-sensitive).
/// Passwords are stored in plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque, immutable identifier
    pub id: String,

    /// Unique login name
    pub username: String,

    /// Plaintext password
    pub password: String,

    /// Access role
    pub role: Role,
}

impl UserRecord {
    /// The bootstrap administrator written to an empty directory.
    pub fn seed_admin() -> Self {
        Self {
            id: SEED_ADMIN_ID.to_string(),
            username: SEED_ADMIN_USERNAME.to_string(),
            password: SEED_ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
        }
    }

    /// Whether this record falls under the seed admin deletion protection.
    ///
    /// Protection follows the seed id, not the username, so a renamed seed
    /// admin stays protected and a later record reusing its old username does not.
    pub fn is_protected(&self) -> bool {
        self.id == SEED_ADMIN_ID
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Candidate fields for creating a record, or replacement fields for updating one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl UserDraft {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Start a draft from an existing record, for partial edits.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            password: record.password.clone(),
            role: record.role,
        }
    }

    pub(crate) fn into_record(self, id: String) -> UserRecord {
        UserRecord {
            id,
            username: self.username,
            password: self.password,
            role: self.role,
        }
    }
}
