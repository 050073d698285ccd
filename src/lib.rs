//! Office attendance tracker library root.
//! Exposes the event store, backup manager, export engine, HTTP facade and CLI.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg).await,
        Commands::Backups | Commands::Restore { .. } => {
            cli::commands::backup::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(matches!(cli.command, Commands::Serve { .. }));

    // config is loaded once, then command-line overrides are applied
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_dir) = &cli.backup_dir {
        cfg.backup_dir = custom_dir.clone();
    }

    dispatch(&cli, &cfg).await
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(server: bool) {
    let default = if server {
        "officetracker=info,tower_http=info"
    } else {
        "officetracker=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
