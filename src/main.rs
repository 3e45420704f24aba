mod cli;
mod db;
mod error;
mod importer;
mod models;
mod reader;
mod settings;
mod validator;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            data_dir,
            allow_duplicate_refs,
        } => cli::init::run(data_dir, allow_duplicate_refs),
        Commands::Import {
            file,
            db,
            allow_duplicate_refs,
        } => cli::import::run(&file, db.as_deref(), allow_duplicate_refs),
        Commands::Status { db } => cli::status::run(db.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
