//! End-to-end flows through the Portal.

use portalgate::{
    Confirmation, Error,
    constants::{SEED_ADMIN_PASSWORD, SEED_ADMIN_USERNAME},
    portal::PortalError,
    user::{Role, UserDraft, format_elapsed},
};

use crate::helpers::*;

#[test]
fn first_run_admin_manages_directory_then_logs_out() {
    let (_dir, portal) = setup_file_portal();
    assert!(portal.current_session().is_none());

    let session = login_admin(&portal);
    assert!(session.is_admin());
    let mut directory = portal.directory(&session).unwrap();
    let guest = directory.create(user_draft("guest")).unwrap();
    directory
        .update(&guest.id, UserDraft::new("visitor", "v-pw", Role::User))
        .unwrap();
    directory.delete(&guest.id, Confirmation::Confirmed).unwrap();

    portal.logout().unwrap();
    assert!(portal.current_session().is_none());
}

#[test]
fn session_and_directory_survive_restart() {
    let (dir, portal) = setup_file_portal();
    let mut directory = admin_directory(&portal);
    add_users(&mut directory, &["ana"]);
    let session = portal.login("ana", "ana-pw").unwrap();
    drop(portal);

    let restarted = reopen_file_portal(&dir);
    assert_eq!(restarted.current_session(), Some(session));
    assert_eq!(
        usernames(&restarted.records().load_all()),
        vec![SEED_ADMIN_USERNAME, "ana"]
    );
}

#[test]
fn plain_user_is_refused_the_directory() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    add_users(&mut directory, &["ana"]);

    let session = portal.login("ana", "ana-pw").unwrap();
    assert!(!session.is_admin());
    let err = portal.directory(&session).err().unwrap();
    assert!(matches!(
        err,
        Error::Portal(PortalError::InsufficientPermissions { .. })
    ));
}

#[test]
fn relogin_replaces_session() {
    let (_, clock, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    add_users(&mut directory, &["ana"]);

    clock.advance(5_000);
    let second = portal.login("ana", "ana-pw").unwrap();
    assert_eq!(portal.current_session(), Some(second.clone()));
    assert_eq!(second.login_time, T0 + 5_000);
}

#[test]
fn elapsed_time_tracks_the_clock() {
    let (_, clock, portal) = setup_portal();
    let session = portal
        .login(SEED_ADMIN_USERNAME, SEED_ADMIN_PASSWORD)
        .unwrap();
    clock.advance(125_000);
    let elapsed = session.elapsed_secs(clock.as_ref());
    assert_eq!(elapsed, 125);
    assert_eq!(format_elapsed(elapsed), "02:05");
}

#[test]
fn deleted_user_can_no_longer_log_in() {
    let (_, _, portal) = setup_portal();
    let mut directory = admin_directory(&portal);
    let ana = add_users(&mut directory, &["ana"]).remove(0);
    directory.delete(&ana.id, Confirmation::Confirmed).unwrap();

    let err = portal.login("ana", "ana-pw").unwrap_err();
    assert!(err.is_authentication_error());
}
