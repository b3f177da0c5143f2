//! CSV ingestion implementation.
//!
//! One CSV file per entity type. Rules:
//!
//! - CSV must have headers.
//! - Headers must contain every required column (order can differ, extra columns are ignored).
//! - Purchase columns may be spelled `user_id`/`userId` and `product_id`/`productId`.
//! - Each value must parse into the field type; failures surface as [`IngestionError::Csv`].

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{Product, Purchase, User};

const USER_COLUMNS: &[&[&str]] = &[&["id"], &["name"], &["age"]];
const PRODUCT_COLUMNS: &[&[&str]] = &[&["id"], &["name"], &["price"]];
const PURCHASE_COLUMNS: &[&[&str]] = &[
    &["user_id", "userId"],
    &["product_id", "productId"],
    &["quantity"],
];

/// Ingest users from a CSV file.
pub fn users_from_csv_path(path: impl AsRef<Path>) -> IngestionResult<Vec<User>> {
    users_from_csv_reader(&mut open_reader(path)?)
}

/// Ingest users from an existing CSV reader.
pub fn users_from_csv_reader<R: Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<Vec<User>> {
    read_records(rdr, USER_COLUMNS)
}

/// Ingest products from a CSV file.
pub fn products_from_csv_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Product>> {
    products_from_csv_reader(&mut open_reader(path)?)
}

/// Ingest products from an existing CSV reader.
pub fn products_from_csv_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<Product>> {
    read_records(rdr, PRODUCT_COLUMNS)
}

/// Ingest purchases from a CSV file.
pub fn purchases_from_csv_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Purchase>> {
    purchases_from_csv_reader(&mut open_reader(path)?)
}

/// Ingest purchases from an existing CSV reader.
pub fn purchases_from_csv_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<Purchase>> {
    read_records(rdr, PURCHASE_COLUMNS)
}

fn open_reader(path: impl AsRef<Path>) -> IngestionResult<csv::Reader<std::fs::File>> {
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?)
}

fn read_records<T, R>(rdr: &mut csv::Reader<R>, required: &[&[&str]]) -> IngestionResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let headers = rdr.headers()?.clone();

    for spellings in required {
        if !headers.iter().any(|h| spellings.contains(&h)) {
            return Err(IngestionError::SchemaMismatch {
                message: format!(
                    "missing required column '{column}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>(),
                    column = spellings[0]
                ),
            });
        }
    }

    let mut out = Vec::new();
    for result in rdr.deserialize::<T>() {
        out.push(result?);
    }
    Ok(out)
}
