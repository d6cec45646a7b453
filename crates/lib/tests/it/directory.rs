//! Directory rules exercised through a Portal.

use portalgate::{
    Confirmation, Error,
    constants::{SEED_ADMIN_ID, SEED_ADMIN_USERNAME},
    directory::DirectoryError,
    user::{Role, UserDraft},
};

use crate::helpers::*;

#[test]
fn usernames_stay_unique_across_a_create_sequence() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);

    let names = ["ana", "ben", "ana", "cy", "ben", SEED_ADMIN_USERNAME, "dee"];
    let mut rejected = 0;
    for name in names {
        match directory.create(user_draft(name)) {
            Ok(_) => {}
            Err(err) => {
                assert!(err.is_conflict(), "unexpected error: {err}");
                rejected += 1;
            }
        }
    }
    assert_eq!(rejected, 3);

    let mut seen = usernames(directory.list());
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
    assert_eq!(total, 5);
}

#[test]
fn second_seed_username_is_rejected() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    let err = directory
        .create(UserDraft::new(SEED_ADMIN_USERNAME, "other", Role::Admin))
        .unwrap_err();
    match &err {
        Error::Directory(DirectoryError::DuplicateUsername { username }) => {
            assert_eq!(username, SEED_ADMIN_USERNAME)
        }
        other => panic!("expected duplicate username, got {other}"),
    }
    assert_eq!(directory.list().len(), 1);
}

#[test]
fn seed_admin_survives_every_delete_attempt() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    add_users(&mut directory, &["ana"]);

    for confirmation in [Confirmation::Confirmed, Confirmation::Declined] {
        let err = directory.delete(SEED_ADMIN_ID, confirmation).unwrap_err();
        assert!(err.is_permission_denied());
    }
    assert!(directory.get(SEED_ADMIN_ID).is_some());
    assert!(
        portal
            .records()
            .load_all()
            .iter()
            .any(|r| r.id == SEED_ADMIN_ID)
    );
}

#[test]
fn second_admin_cannot_delete_itself_but_can_delete_others() {
    let (_, _, portal) = setup_portal();
    let mut root = admin_directory(&portal);
    root.create(UserDraft::new("ops", "ops-pw", Role::Admin))
        .unwrap();
    let ana = root.create(user_draft("ana")).unwrap();

    let ops = portal.login("ops", "ops-pw").unwrap();
    let mut directory = portal.directory(&ops).unwrap();

    let err = directory
        .delete(ops.user_id(), Confirmation::Confirmed)
        .unwrap_err();
    assert!(matches!(err, Error::Directory(DirectoryError::SelfDeletion { .. })));

    let removed = directory.delete(&ana.id, Confirmation::Confirmed).unwrap();
    assert_eq!(removed.username, "ana");
    assert_eq!(
        usernames(&portal.records().load_all()),
        vec![SEED_ADMIN_USERNAME, "ops"]
    );
}

#[test]
fn declined_delete_changes_nothing() {
    let (backend, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    let ana = add_users(&mut directory, &["ana"]).remove(0);
    let before = reopen_portal(&backend).records().load_all();

    let err = directory.delete(&ana.id, Confirmation::Declined).unwrap_err();
    assert!(err.is_not_confirmed());
    assert_eq!(portal.records().load_all(), before);
    assert!(directory.get(&ana.id).is_some());
}

#[test]
fn edited_password_is_used_for_next_login() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    let ana = add_users(&mut directory, &["ana"]).remove(0);

    directory
        .update(&ana.id, UserDraft::new("ana", "fresh", Role::User))
        .unwrap();
    assert!(portal.login("ana", "ana-pw").is_err());
    let session = portal.login("ana", "fresh").unwrap();
    assert_eq!(session.user.id, ana.id);
}
