//! JSON ingestion implementation.
//!
//! The input is a single object holding the three lists:
//!
//! ```json
//! {"users": [...], "products": [...], "purchases": [...]}
//! ```
//!
//! Any list may be omitted and then defaults to empty.

use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::Dataset;

/// Ingest a JSON file into a [`Dataset`].
pub fn dataset_from_json_path(path: impl AsRef<Path>) -> IngestionResult<Dataset> {
    let text = fs::read_to_string(path)?;
    dataset_from_json_str(&text)
}

/// Ingest JSON from an in-memory string into a [`Dataset`].
pub fn dataset_from_json_str(input: &str) -> IngestionResult<Dataset> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    if !value.is_object() {
        return Err(IngestionError::SchemaMismatch {
            message: "json must be an object with users/products/purchases arrays".to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}
