use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by dataset ingestion functions.
///
/// Processing never fails; this enum only covers loading users/products/purchases from JSON or CSV.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error, including values that do not parse into the record's field types.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON ingestion error, including values of the wrong type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (empty input, missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
