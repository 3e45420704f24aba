use std::path::Path;

use sha2::{Digest, Sha256};

use crate::db::{
    already_imported, count_transactions, get_connection, init_db, ImportTxn, InsertOutcome,
};
use crate::error::{Rejection, Result};
use crate::models::SourceRecord;
use crate::reader::SourceReader;
use crate::validator::validate;

/// One rejected record, kept for end-of-run reporting.
#[derive(Debug)]
pub struct RejectedRecord {
    pub record: SourceRecord,
    pub reason: Rejection,
}

#[derive(Debug)]
pub struct ImportResult {
    pub inserted: usize,
    pub rejections: Vec<RejectedRecord>,
    pub total_rows: i64,
    pub duplicate_file: bool,
}

fn compute_checksum(file_path: &Path) -> Result<String> {
    let data = std::fs::read(file_path)?;
    let mut hasher = Sha256::new();
    hasher.update(&data);
    Ok(hex::encode(hasher.finalize()))
}

/// Run one import: read, validate, and insert every record inside a single
/// transaction, then commit and count. Every record read is classified as
/// inserted or rejected; per-row failures never abort the run.
pub fn import_file(file_path: &Path, db_path: &Path, unique_refs: bool) -> Result<ImportResult> {
    // Open the source before touching the store: a missing file or a bad
    // header must leave the database untouched, possibly never created.
    let mut reader = SourceReader::open(file_path)?;
    let checksum = compute_checksum(file_path)?;

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut conn = get_connection(db_path)?;
    init_db(&conn, unique_refs)?;

    if already_imported(&conn, &checksum)? {
        let total_rows = count_transactions(&conn)?;
        return Ok(ImportResult {
            inserted: 0,
            rejections: Vec::new(),
            total_rows,
            duplicate_file: true,
        });
    }

    let txn = ImportTxn::begin(&mut conn)?;
    let mut inserted = 0usize;
    let mut rejections = Vec::new();

    while let Some(record) = reader.next_record()? {
        match validate(&record) {
            Ok(row) => match txn.insert(&row)? {
                InsertOutcome::Inserted => inserted += 1,
                InsertOutcome::Rejected(reason) => rejections.push(RejectedRecord { record, reason }),
            },
            Err(reason) => rejections.push(RejectedRecord { record, reason }),
        }
    }

    let filename = file_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    txn.record_import(filename, inserted, rejections.len(), &checksum)?;
    txn.commit()?;

    let total_rows = count_transactions(&conn)?;
    Ok(ImportResult {
        inserted,
        rejections,
        total_rows,
        duplicate_file: false,
    })
}
