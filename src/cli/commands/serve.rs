use crate::api::{AppState, serve};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `serve` command: migrate once, then run the HTTP server.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let addr = bind.clone().unwrap_or_else(|| cfg.bind.clone());
        let state = AppState::initialize(cfg.clone())?;

        tracing::info!(db = %cfg.database, backups = %cfg.backup_dir, "store ready");
        serve(state, &addr).await?;
    }

    Ok(())
}
