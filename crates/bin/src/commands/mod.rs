//! Subcommand implementations.

use portalgate::{DirectoryService, Portal, user::Session};

pub mod session;
pub mod sync;
pub mod users;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// The persisted session, or an error telling the user to log in.
fn require_session(portal: &Portal) -> Result<Session, Box<dyn std::error::Error>> {
    portal
        .current_session()
        .ok_or_else(|| "Not logged in; run `portalgate login` first".into())
}

/// Open the directory for the current session, which must be an admin.
fn admin_directory(portal: &Portal) -> Result<DirectoryService, Box<dyn std::error::Error>> {
    let session = require_session(portal)?;
    Ok(portal.directory(&session)?)
}
