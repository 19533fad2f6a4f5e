use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures along the load -> render -> export pipeline. Every variant is
/// fatal: the run aborts and no output document is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed results file: {0}")]
    Csv(#[from] csv::Error),
    #[error("results are missing required column {0:?}")]
    MissingColumn(&'static str),
    #[error("non-numeric value {value:?} in column {column:?} at record {record}")]
    InvalidValue {
        column: String,
        record: usize,
        value: String,
    },
    #[error("column {column:?} has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("configured series {0:?} is not present in the loaded table")]
    MissingSeries(String),
    #[error("failed to draw figure: {0}")]
    Draw(String),
    #[error("failed to convert figure to PDF: {0}")]
    Pdf(String),
}
