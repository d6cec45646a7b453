//! Shared helpers for benchmark tests

use std::sync::Arc;

use portalgate::{
    DirectoryService, Portal,
    backend::{FileStore, InMemory, KeyValueStore},
    constants::{SEED_ADMIN_PASSWORD, SEED_ADMIN_USERNAME},
    user::{Role, UserDraft},
};

/// Creates a test backend based on TEST_BACKEND env var.
///
/// Supported values:
/// - "inmemory" or unset: InMemory backend (default)
/// - "file": FileStore in a fresh temporary directory
///
/// The returned TempDir, if any, must outlive the backend.
pub fn test_backend() -> (Option<tempfile::TempDir>, Arc<dyn KeyValueStore>) {
    match std::env::var("TEST_BACKEND").as_deref() {
        Ok("file") => {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let store = FileStore::open(dir.path()).expect("Failed to open file store");
            (Some(dir), Arc::new(store))
        }
        Ok("inmemory") | Ok("") | Err(_) => (None, Arc::new(InMemory::new())),
        Ok(other) => {
            panic!("Unknown TEST_BACKEND value: {other}. Supported: inmemory, file")
        }
    }
}

/// Portal plus an admin directory already holding `size` plain users.
pub fn setup_directory(size: usize) -> (Option<tempfile::TempDir>, Portal, DirectoryService) {
    let (dir, backend) = test_backend();
    let portal = Portal::open(backend).expect("Failed to open portal");
    let session = portal
        .login(SEED_ADMIN_USERNAME, SEED_ADMIN_PASSWORD)
        .expect("Failed to log in");
    let mut directory = portal
        .directory(&session)
        .expect("Failed to open directory");
    for i in 0..size {
        directory
            .create(UserDraft::new(format!("user{i}"), format!("pw{i}"), Role::User))
            .expect("Failed to create user");
    }
    (dir, portal, directory)
}
