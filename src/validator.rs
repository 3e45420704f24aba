use crate::error::Rejection;
use crate::models::{SourceRecord, ValidRow};

/// Check one record for the required fields, trimming surrounding
/// whitespace. Pure; absence of data is a classified outcome, not an error.
pub fn validate(record: &SourceRecord) -> Result<ValidRow, Rejection> {
    Ok(ValidRow {
        ref_number: required(&record.ref_number, "ref_number")?,
        bank_name: required(&record.bank_name, "bank_name")?,
        date: required(&record.date, "date")?,
    })
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, Rejection> {
    let trimmed = value.as_deref().unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(Rejection::MissingField(name));
    }
    Ok(trimmed.to_string())
}
