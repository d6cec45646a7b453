//! Directory management commands.

use portalgate::{
    Confirmation, Portal,
    user::{UserDraft, UserRecord},
};

use super::{CommandResult, admin_directory};
use crate::cli::{AddUserArgs, EditUserArgs, RemoveUserArgs};
use crate::output::{OutputFormat, print_json, print_table};

/// Passwords are left out of listings.
fn record_json(record: &UserRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "username": record.username,
        "role": record.role,
        "protected": record.is_protected(),
    })
}

fn print_record(verb: &str, record: &UserRecord, format: OutputFormat) -> CommandResult {
    match format {
        OutputFormat::Human => {
            println!("{verb} {} ({}, {})", record.username, record.role, record.id);
        }
        OutputFormat::Json => print_json(&record_json(record))?,
    }
    Ok(())
}

/// Run the `users list` command
pub fn list(portal: &Portal, format: OutputFormat) -> CommandResult {
    let directory = admin_directory(portal)?;
    let records = directory.list();

    match format {
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|r| {
                    let mut role = r.role.to_string();
                    if r.is_protected() {
                        role.push_str(" (protected)");
                    }
                    if r.id == directory.actor_id() {
                        role.push_str(" (you)");
                    }
                    vec![r.id.clone(), r.username.clone(), role]
                })
                .collect();
            print_table(&["ID", "USERNAME", "ROLE"], &rows);
        }
        OutputFormat::Json => {
            let entries: Vec<_> = records.iter().map(record_json).collect();
            print_json(&serde_json::Value::Array(entries))?;
        }
    }
    Ok(())
}

/// Run the `users add` command
pub fn add(portal: &Portal, args: &AddUserArgs, format: OutputFormat) -> CommandResult {
    let mut directory = admin_directory(portal)?;
    let record = directory.create(UserDraft::new(
        args.username.clone(),
        args.password.clone(),
        args.role.into(),
    ))?;
    print_record("Added", &record, format)
}

/// Run the `users edit` command
pub fn edit(portal: &Portal, args: &EditUserArgs, format: OutputFormat) -> CommandResult {
    let mut directory = admin_directory(portal)?;
    let current = directory
        .get(&args.id)
        .ok_or_else(|| format!("User not found: {}", args.id))?;

    let mut draft = UserDraft::from_record(current);
    if let Some(username) = &args.username {
        draft.username = username.clone();
    }
    if let Some(password) = &args.password {
        draft.password = password.clone();
    }
    if let Some(role) = args.role {
        draft.role = role.into();
    }

    let record = directory.update(&args.id, draft)?;
    print_record("Updated", &record, format)
}

/// Run the `users remove` command
pub fn remove(portal: &Portal, args: &RemoveUserArgs, format: OutputFormat) -> CommandResult {
    let mut directory = admin_directory(portal)?;
    let removed = match directory.delete(&args.id, Confirmation::from(args.yes)) {
        Err(e) if e.is_not_confirmed() => {
            return Err(format!("Refusing to remove {} without --yes", args.id).into());
        }
        other => other?,
    };
    print_record("Removed", &removed, format)
}
