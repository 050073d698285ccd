use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupManager;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle `backups` (list) and `restore <filename>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let manager = BackupManager::from_config(cfg);

    match cmd {
        Commands::Backups => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                warning(format!("No backups found in {}", cfg.backup_dir));
                return Ok(());
            }

            info(format!("Backups in {}", cfg.backup_dir));
            for b in backups {
                println!("  {:<40} {}  {:>10} bytes", b.filename, b.timestamp, b.size);
            }
        }
        Commands::Restore { filename } => {
            manager.restore(filename)?;
            success(format!("Backup restored: {filename}"));
        }
        _ => {}
    }

    Ok(())
}
