use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{ImportError, Result};
use crate::models::SourceRecord;

pub const REQUIRED_COLUMNS: [&str; 3] = ["ref_number", "bank_name", "date"];

#[derive(Debug)]
struct ColumnIndex {
    ref_number: usize,
    bank_name: usize,
    date: usize,
}

/// Reads the source CSV one record at a time, in file order. The required
/// column set is verified in `open`, before any row is yielded.
#[derive(Debug)]
pub struct SourceReader {
    rdr: csv::Reader<BufReader<File>>,
    idx: ColumnIndex,
    line: u64,
}

impl SourceReader {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ImportError::SourceNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));
        let headers = rdr.headers()?.clone();

        let mut positions = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();
        for (i, name) in REQUIRED_COLUMNS.iter().enumerate() {
            match headers.iter().position(|h| h == *name) {
                Some(pos) => positions[i] = pos,
                None => missing.push((*name).to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }

        Ok(Self {
            rdr,
            idx: ColumnIndex {
                ref_number: positions[0],
                bank_name: positions[1],
                date: positions[2],
            },
            line: 1,
        })
    }

    /// Next record, or `None` at end of input. Structural CSV failures
    /// (invalid encoding) abort the read with a fatal error; short rows do
    /// not — their missing fields read as absent.
    pub fn next_record(&mut self) -> Result<Option<SourceRecord>> {
        let mut record = csv::StringRecord::new();
        if !self.rdr.read_record(&mut record)? {
            return Ok(None);
        }
        self.line = record.position().map_or(self.line + 1, |p| p.line());
        let field = |i: usize| record.get(i).map(|s| s.to_string());
        Ok(Some(SourceRecord {
            line: self.line,
            ref_number: field(self.idx.ref_number),
            bank_name: field(self.idx.bank_name),
            date: field(self.idx.date),
        }))
    }
}
