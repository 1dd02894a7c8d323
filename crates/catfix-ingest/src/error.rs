//! Error types for catalogue ingestion.

use std::path::PathBuf;
use thiserror::Error;

use catfix_model::ConfigError;

/// Errors that can occur while reading or extracting the catalogue table.
///
/// Everything here is fatal for the run; row-level problems are absorbed by
/// the extractor and surface as warnings instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured encoding label is not known to `encoding_rs`.
    #[error("unknown encoding label {label:?}")]
    UnknownEncoding { label: String },

    /// Failed to parse the decoded text as CSV.
    #[error("failed to parse CSV: {message}")]
    CsvParse { message: String },

    /// The table holds no rows at all.
    #[error("CSV table is empty")]
    EmptyTable,

    /// Required columns are absent from the discovered header row.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Invalid generator configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
