use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ColumnName, OrderKey};

/// Error type for argument, IO, and dataset failures.
#[derive(Debug, Error)]
pub enum AssignError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("dataset '{}' is unavailable: {source}", .path.display())]
    DatasetUnavailable { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed dataset row at line {line}: {details}")]
    Malformed { line: u64, details: String },
    #[error("dataset header mismatch (expected {expected:?}, found {found:?})")]
    HeaderMismatch {
        expected: Vec<ColumnName>,
        found: Vec<ColumnName>,
    },
    #[error("duplicate value {value} in column '{column}'")]
    DuplicateKey { column: ColumnName, value: OrderKey },
}

impl From<csv::Error> for AssignError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        let details = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => AssignError::Io(io_err),
            _ => AssignError::Malformed { line, details },
        }
    }
}

impl AssignError {
    /// True for errors caused by command-line input rather than the dataset.
    pub fn is_usage(&self) -> bool {
        matches!(self, AssignError::Usage(_) | AssignError::Configuration(_))
    }

    /// Process exit status: `2` for usage errors, `1` for everything else.
    pub fn exit_code(&self) -> u8 {
        if self.is_usage() { 2 } else { 1 }
    }
}
