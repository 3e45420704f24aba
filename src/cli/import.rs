use std::path::PathBuf;

use colored::Colorize;

use crate::error::Result;
use crate::importer::import_file;
use crate::settings::{get_db_path, shellexpand_path};

pub fn run(file: &str, db: Option<&str>, allow_duplicate_refs: bool) -> Result<()> {
    let file_path = PathBuf::from(file);
    let db_path = db
        .map(|p| PathBuf::from(shellexpand_path(p)))
        .unwrap_or_else(get_db_path);

    let result = import_file(&file_path, &db_path, !allow_duplicate_refs)?;

    if result.duplicate_file {
        println!("This file has already been imported (matching checksum).");
        return Ok(());
    }

    for r in &result.rejections {
        println!(
            "{} line {}: {} ({})",
            "rejected".red(),
            r.record.line,
            r.record.describe(),
            r.reason
        );
    }

    println!("Imported {} into {}", file_path.display(), db_path.display());
    println!("{} inserted, {} rejected", result.inserted, result.rejections.len());
    println!("Total transactions in store: {}", result.total_rows);
    Ok(())
}
