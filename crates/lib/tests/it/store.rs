//! Seeding and persistence seen through fresh loads.

use std::sync::Arc;

use portalgate::{
    backend::{InMemory, KeyValueStore},
    constants::{SEED_ADMIN_USERNAME, SESSION, USERS},
    store::{RecordStore, SessionStore},
    user::{Session, UserRecord},
};

use crate::helpers::*;

#[test]
fn corrupt_directory_is_reseeded_on_open() {
    let backend = Arc::new(InMemory::new());
    backend.set(USERS, "{not json").unwrap();

    let portal = reopen_portal(&backend);
    assert_eq!(portal.records().load_all(), vec![UserRecord::seed_admin()]);
    let raw = backend.get(USERS).unwrap().unwrap();
    let persisted: Vec<UserRecord> = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, vec![UserRecord::seed_admin()]);
}

#[test]
fn empty_array_is_reseeded_on_open() {
    let backend = Arc::new(InMemory::new());
    backend.set(USERS, "[]").unwrap();

    let portal = reopen_portal(&backend);
    assert_eq!(portal.records().load_all(), vec![UserRecord::seed_admin()]);
}

#[test]
fn directory_changes_are_visible_to_a_fresh_store() {
    let (backend, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    add_users(&mut directory, &["ana", "ben"]);

    let fresh = RecordStore::new(backend.clone());
    assert_eq!(fresh.load_all(), directory.list());
    assert_eq!(usernames(&fresh.load_all()), vec![SEED_ADMIN_USERNAME, "ana", "ben"]);
}

#[test]
fn session_round_trips_through_a_fresh_store() {
    let (backend, clock, portal) = setup_portal();
    let session = login_admin(&portal);
    assert_eq!(session.login_time, clock.get());

    let fresh = SessionStore::new(backend.clone());
    assert_eq!(fresh.get(), Some(session));

    fresh.clear().unwrap();
    assert_eq!(portal.sessions().get(), None);
}

#[test]
fn session_slot_uses_camel_case_login_time() {
    let (backend, _, portal) = setup_portal();
    login_admin(&portal);

    let raw = backend.get(SESSION).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["loginTime"], serde_json::json!(T0));
    assert_eq!(value["user"]["username"], SEED_ADMIN_USERNAME);
    assert_eq!(value["user"]["role"], "admin");
}

#[test]
fn corrupt_session_reads_as_logged_out() {
    let (backend, _, portal) = setup_portal();
    backend.set(SESSION, "garbage").unwrap();
    assert_eq!(portal.current_session(), None);

    let session: Option<Session> = SessionStore::new(backend.clone()).get();
    assert!(session.is_none());
}
