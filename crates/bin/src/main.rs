use std::sync::Arc;

use clap::Parser;
use portalgate::{Portal, backend::FileStore};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands, UsersCommand};
use output::OutputFormat;

fn main() {
    // Logs go to stderr so stdout stays parseable with --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("portalgate=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let store = FileStore::open(&cli.data_dir)?;
    tracing::debug!("Using data directory {}", store.dir().display());
    let portal = Portal::open(Arc::new(store))?;

    match cli.command {
        Commands::Login(args) => commands::session::login(&portal, &args, format),
        Commands::Logout => commands::session::logout(&portal, format),
        Commands::Status => commands::session::status(&portal, format),
        Commands::Users(UsersCommand::List) => commands::users::list(&portal, format),
        Commands::Users(UsersCommand::Add(args)) => commands::users::add(&portal, &args, format),
        Commands::Users(UsersCommand::Edit(args)) => commands::users::edit(&portal, &args, format),
        Commands::Users(UsersCommand::Remove(args)) => {
            commands::users::remove(&portal, &args, format)
        }
        Commands::Export(args) => commands::sync::export(&portal, &args, format),
        Commands::Import(args) => commands::sync::import(&portal, &args, format),
    }
}
