use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;
use crate::utils::date::today;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        year,
        month,
        dir,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database_path())?;
        init_db(&pool.conn)?;

        let path = ExportLogic::export_month_to_dir(
            &mut pool,
            &cfg.export_prefix,
            *year,
            *month,
            today(),
            Path::new(dir),
            *force,
        )?;
        success(format!("XLSX export completed: {}", path.display()));
    }

    Ok(())
}
