//! Constants used throughout the portalgate library.
//!
//! This module provides central definitions for persisted slot names and the
//! bootstrap administrator record.

/// Persisted slot holding the serialized directory.
pub const USERS: &str = "users";

/// Persisted slot holding the active session, if any.
pub const SESSION: &str = "session";

/// Stable id of the seed admin record.
pub const SEED_ADMIN_ID: &str = "root-admin";

/// Username of the seed admin record.
pub const SEED_ADMIN_USERNAME: &str = "joshy";

/// Password the seed admin record is created with.
pub const SEED_ADMIN_PASSWORD: &str = "dani5161";

/// Prefix of exported sync document file names.
pub const EXPORT_FILE_PREFIX: &str = "portalgate-users";
