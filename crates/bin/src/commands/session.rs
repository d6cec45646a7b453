//! Login, logout and session status.

use portalgate::{Portal, user::format_elapsed};

use super::CommandResult;
use crate::cli::LoginArgs;
use crate::output::{OutputFormat, print_json};

/// Run the login command
pub fn login(portal: &Portal, args: &LoginArgs, format: OutputFormat) -> CommandResult {
    let session = portal.login(&args.username, &args.password)?;

    match format {
        OutputFormat::Human => {
            println!(
                "Logged in as {} ({})",
                session.user.username, session.user.role
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "id": session.user.id,
                "username": session.user.username,
                "role": session.user.role,
                "loginTime": session.login_time,
            });
            print_json(&value)?;
        }
    }
    Ok(())
}

/// Run the logout command
pub fn logout(portal: &Portal, format: OutputFormat) -> CommandResult {
    let had_session = portal.current_session().is_some();
    portal.logout()?;

    match format {
        OutputFormat::Human if had_session => println!("Logged out"),
        OutputFormat::Human => println!("No active session"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "logged_out": had_session });
            print_json(&value)?;
        }
    }
    Ok(())
}

/// Run the status command - shows who is logged in and for how long.
pub fn status(portal: &Portal, format: OutputFormat) -> CommandResult {
    let Some(session) = portal.current_session() else {
        match format {
            OutputFormat::Human => println!("Not logged in"),
            OutputFormat::Json => {
                let value = serde_json::json!({ "logged_in": false });
                print_json(&value)?;
            }
        }
        return Ok(());
    };

    let elapsed = session.elapsed_secs(portal.clock().as_ref());
    match format {
        OutputFormat::Human => {
            println!("User:      {}", session.user.username);
            println!("Role:      {}", session.user.role);
            println!("Connected: {}", format_elapsed(elapsed));
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "logged_in": true,
                "id": session.user.id,
                "username": session.user.username,
                "role": session.user.role,
                "elapsed_secs": elapsed,
            });
            print_json(&value)?;
        }
    }
    Ok(())
}
