use std::path::PathBuf;

use thiserror::Error;

/// Fatal, run-aborting failures. Anything that reaches the caller as an
/// `ImportError` terminates the run with a non-zero exit.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Source is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Why a single record was rejected. Rejections are tallied and reported at
/// the row boundary; they never abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("duplicate ref_number")]
    DuplicateRef,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
