use clap::{Parser, Subcommand};

/// Command-line interface of the office attendance tracker
#[derive(Parser)]
#[command(
    name = "officetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Office attendance tracker: web backend with SQLite storage, rotating backups and XLSX export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backup directory
    #[arg(global = true, long = "backup-dir")]
    pub backup_dir: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init,

    /// Run the HTTP server
    Serve {
        /// Address to listen on (default from config: 127.0.0.1:5000)
        #[arg(long = "bind")]
        bind: Option<String>,
    },

    /// List backup snapshots, newest first
    Backups,

    /// Restore the database from a backup snapshot
    Restore {
        /// Snapshot file name as shown by `backups`
        filename: String,
    },

    /// Export one month of events to an XLSX workbook
    Export {
        /// Year (e.g. 2024)
        year: i32,

        /// Month number (1-12)
        month: u32,

        /// Output directory (default: current directory)
        #[arg(long = "dir", default_value = ".")]
        dir: String,

        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}
