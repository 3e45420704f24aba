use std::path::PathBuf;

use crate::db::{count_transactions, get_connection};
use crate::error::Result;
use crate::settings::{get_db_path, shellexpand_path};

pub fn run(db: Option<&str>) -> Result<()> {
    let db_path = db
        .map(|p| PathBuf::from(shellexpand_path(p)))
        .unwrap_or_else(get_db_path);

    println!("Database:   {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `bankfeed init` to set up.");
        return Ok(());
    }

    let conn = get_connection(&db_path)?;
    let transactions = count_transactions(&conn)?;
    let imports: i64 = conn.query_row("SELECT count(*) FROM imports", [], |r| r.get(0))?;
    let last_import: Option<String> =
        conn.query_row("SELECT max(import_date) FROM imports", [], |r| r.get(0))?;

    println!();
    println!("Transactions:  {transactions}");
    println!("Import runs:   {imports}");
    println!("Last import:   {}", last_import.as_deref().unwrap_or("(never)"));
    Ok(())
}
