//! Loading users, products and purchases from files or in-memory text.
//!
//! - [`json`]: a whole [`crate::types::Dataset`] from one JSON document
//! - [`csv`]: one entity list per CSV file
//!
//! Ingestion does not check that purchases reference existing users or products.

pub mod csv;
pub mod json;

pub use self::csv::{
    products_from_csv_path, products_from_csv_reader, purchases_from_csv_path,
    purchases_from_csv_reader, users_from_csv_path, users_from_csv_reader,
};
pub use self::json::{dataset_from_json_path, dataset_from_json_str};
