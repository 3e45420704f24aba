use std::path::Path;

use rusqlite::{Connection, Transaction};

use crate::error::{Rejection, Result};
use crate::models::ValidRow;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    ref_number TEXT,
    bank_name TEXT NOT NULL,
    date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS imports (
    id INTEGER PRIMARY KEY,
    filename TEXT NOT NULL,
    import_date TEXT DEFAULT (datetime('now')),
    inserted_count INTEGER,
    rejected_count INTEGER,
    checksum TEXT
);
";

const UNIQUE_REF_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_transactions_ref_number ON transactions (ref_number);";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

/// Create the schema if absent. Safe to call against an existing store;
/// `unique_refs` adds the uniqueness constraint on `ref_number` (an index
/// created by an earlier run persists either way).
pub fn init_db(conn: &Connection, unique_refs: bool) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    if unique_refs {
        conn.execute_batch(UNIQUE_REF_INDEX)?;
    }
    Ok(())
}

pub fn count_transactions(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM transactions", [], |row| row.get(0))?)
}

pub fn already_imported(conn: &Connection, checksum: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM imports WHERE checksum = ?1")?;
    Ok(stmt.exists([checksum])?)
}

/// Outcome of one insert attempt inside the run's transaction.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted,
    Rejected(Rejection),
}

/// The run's single write transaction. Dropping it without `commit` rolls
/// everything back, including on early fatal returns.
pub struct ImportTxn<'conn> {
    tx: Transaction<'conn>,
}

impl<'conn> ImportTxn<'conn> {
    pub fn begin(conn: &'conn mut Connection) -> Result<Self> {
        Ok(Self {
            tx: conn.transaction()?,
        })
    }

    /// Insert one validated row. Constraint-class failures reject the row;
    /// any other storage failure is fatal.
    pub fn insert(&self, row: &ValidRow) -> Result<InsertOutcome> {
        let result = self.tx.execute(
            "INSERT INTO transactions (ref_number, bank_name, date) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.ref_number, row.bank_name, row.date],
        );
        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) => classify_insert_error(err).map(InsertOutcome::Rejected),
        }
    }

    /// Record the run in the audit table.
    pub fn record_import(
        &self,
        filename: &str,
        inserted: usize,
        rejected: usize,
        checksum: &str,
    ) -> Result<()> {
        self.tx.execute(
            "INSERT INTO imports (filename, inserted_count, rejected_count, checksum) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![filename, inserted as i64, rejected as i64, checksum],
        )?;
        Ok(())
    }

    pub fn commit(self) -> Result<()> {
        Ok(self.tx.commit()?)
    }
}

fn classify_insert_error(err: rusqlite::Error) -> Result<Rejection> {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            match e.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Ok(Rejection::DuplicateRef),
                _ => Ok(Rejection::Constraint(err.to_string())),
            }
        }
        _ => Err(err.into()),
    }
}
