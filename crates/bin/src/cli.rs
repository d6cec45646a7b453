//! CLI argument definitions for the portalgate binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use portalgate::user::Role;

/// Directory role
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// May manage the directory
    Admin,
    /// May only log in
    User,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

/// portalgate captive-portal login gate
#[derive(Parser, Debug)]
#[command(name = "portalgate")]
#[command(about = "portalgate: local credential directory and login gate for a captive portal")]
#[command(version)]
pub struct Cli {
    /// Data directory holding the users and session slots
    #[arg(
        short = 'D',
        long,
        global = true,
        default_value = ".",
        env = "PORTALGATE_DATA_DIR"
    )]
    pub data_dir: PathBuf,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, replacing any current session
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the current session
    Status,
    /// Manage directory users (admin only)
    #[command(subcommand)]
    Users(UsersCommand),
    /// Write the directory to a dated JSON file (admin only)
    Export(ExportArgs),
    /// Replace the directory with the contents of a JSON file (admin only)
    Import(ImportArgs),
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    pub username: String,

    #[arg(short, long, env = "PORTALGATE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List all users
    List,
    /// Add a user
    Add(AddUserArgs),
    /// Change a user's username, password or role
    Edit(EditUserArgs),
    /// Remove a user
    Remove(RemoveUserArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddUserArgs {
    pub username: String,

    #[arg(short, long)]
    pub password: String,

    #[arg(short, long, value_enum, default_value_t = RoleArg::User)]
    pub role: RoleArg,
}

/// Unset fields keep their current value
#[derive(clap::Args, Debug)]
pub struct EditUserArgs {
    /// Id of the user to edit
    pub id: String,

    #[arg(short, long)]
    pub username: Option<String>,

    #[arg(short, long)]
    pub password: Option<String>,

    #[arg(short, long, value_enum)]
    pub role: Option<RoleArg>,
}

#[derive(clap::Args, Debug)]
pub struct RemoveUserArgs {
    /// Id of the user to remove
    pub id: String,

    /// Confirm the removal
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the export command
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Directory to write the export file into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Arguments for the import command
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// JSON file produced by `export`
    pub file: PathBuf,

    /// Confirm replacing the whole directory
    #[arg(short, long)]
    pub yes: bool,

    /// Validate the file and show what would be imported without changing anything
    #[arg(long, conflicts_with = "yes")]
    pub dry_run: bool,
}
