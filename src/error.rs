use std::path::PathBuf;

use thiserror::Error;

/// Failure to bring the launch dataset into memory.
///
/// Raised only at startup; the dashboard cannot run without its dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of record objects")]
    NotRecords,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("dataset contains no launch records")]
    Empty,
}
