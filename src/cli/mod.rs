pub mod import;
pub mod init;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bankfeed", about = "Import bank transaction CSV exports into a local SQLite ledger.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up bankfeed: choose a data directory and initialize the database.
    Init {
        /// Path for bankfeed data (default: ~/Documents/bankfeed)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Do not enforce uniqueness of ref_number
        #[arg(long = "allow-duplicate-refs")]
        allow_duplicate_refs: bool,
    },
    /// Import a CSV file of transactions.
    Import {
        /// Path to CSV file to import
        file: String,
        /// Database path (default: <data_dir>/bankfeed.db)
        #[arg(long)]
        db: Option<String>,
        /// Do not enforce uniqueness of ref_number
        #[arg(long = "allow-duplicate-refs")]
        allow_duplicate_refs: bool,
    },
    /// Show database location and row counts.
    Status {
        /// Database path (default: <data_dir>/bankfeed.db)
        #[arg(long)]
        db: Option<String>,
    },
}
