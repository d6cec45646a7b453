//! Export and import of the whole directory.

use portalgate::{Confirmation, Portal, sync::SyncCodec};

use super::{CommandResult, admin_directory};
use crate::cli::{ExportArgs, ImportArgs};
use crate::output::{OutputFormat, print_json, print_table};

/// Run the export command
pub fn export(portal: &Portal, args: &ExportArgs, format: OutputFormat) -> CommandResult {
    let directory = admin_directory(portal)?;
    let document = portal.sync_codec().export(&directory)?;

    std::fs::create_dir_all(&args.output)?;
    let path = args.output.join(&document.file_name);
    std::fs::write(&path, &document.contents)?;
    tracing::info!("Wrote export to {}", path.display());

    match format {
        OutputFormat::Human => {
            println!("Exported {} users to {}", document.count, path.display());
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "path": path.display().to_string(),
                "count": document.count,
            });
            print_json(&value)?;
        }
    }
    Ok(())
}

/// Run the import command
///
/// The file is always validated first. `--dry-run` stops there; without
/// `--yes` the import is refused.
pub fn import(portal: &Portal, args: &ImportArgs, format: OutputFormat) -> CommandResult {
    let mut directory = admin_directory(portal)?;
    let contents = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("Failed to read {}: {e}", args.file.display()))?;
    let incoming = SyncCodec::decode(&contents)?;

    if args.dry_run {
        match format {
            OutputFormat::Human => {
                println!(
                    "{} would replace {} users with {}:",
                    args.file.display(),
                    directory.list().len(),
                    incoming.len()
                );
                let rows: Vec<Vec<String>> = incoming
                    .iter()
                    .map(|r| vec![r.id.clone(), r.username.clone(), r.role.to_string()])
                    .collect();
                print_table(&["ID", "USERNAME", "ROLE"], &rows);
            }
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "dry_run": true,
                    "current": directory.list().len(),
                    "incoming": incoming.len(),
                });
                print_json(&value)?;
            }
        }
        return Ok(());
    }

    let count = match portal.sync_codec().import(
        &mut directory,
        &contents,
        Confirmation::from(args.yes),
    ) {
        Err(e) if e.is_not_confirmed() => {
            return Err(format!(
                "Import would replace all {} users with {}; re-run with --yes to confirm",
                directory.list().len(),
                incoming.len()
            )
            .into());
        }
        other => other?,
    };

    match format {
        OutputFormat::Human => println!("Imported {count} users"),
        OutputFormat::Json => {
            let value = serde_json::json!({ "imported": count });
            print_json(&value)?;
        }
    }
    Ok(())
}
