//! `purchase-report` is a small library of in-memory aggregations over users, products and
//! purchases, plus a binary that prints them as a text report.
//!
//! ## Data model
//!
//! A [`types::Dataset`] holds three immutable lists:
//!
//! - [`types::User`]: `id`, `name`, `age`
//! - [`types::Product`]: `id`, `name`, `price`
//! - [`types::Purchase`]: `user_id`, `product_id`, `quantity`
//!
//! Purchases are not validated against users or products. A purchase of an unknown product
//! contributes `0` to spend totals.
//!
//! ## Modules
//!
//! - [`processing`]: filter, top-N, grouping, spend totals, top buyer, generic [`processing::find_max`]
//! - [`report`]: builds and renders the seven-section text report
//! - [`observability`]: observer hooks for report progress and warnings
//! - [`ingestion`]: load datasets from JSON or CSV
//! - [`sample`]: the fixed sample dataset used by the binary
//! - [`types`]: entity and dataset types
//! - [`error`]: error types used by ingestion
//!
//! ## Example
//!
//! ```rust
//! use purchase_report::report::{build_report, ReportOptions};
//! use purchase_report::types::{Dataset, Product, Purchase, User};
//!
//! let ds = Dataset::new(
//!     vec![User::new(1, "Ivan", 18), User::new(2, "Anna", 25), User::new(3, "Bo", 30)],
//!     vec![
//!         Product::new(1, "Mouse", 1200),
//!         Product::new(2, "Keyboard", 3500),
//!         Product::new(3, "Monitor", 9000),
//!     ],
//!     vec![Purchase::new(1, 1, 2), Purchase::new(2, 2, 1), Purchase::new(3, 3, 1)],
//! );
//!
//! let report = build_report(&ds, &ReportOptions::default());
//! assert_eq!(report.top_buyer.as_ref().map(|u| u.name.as_str()), Some("Bo"));
//! assert_eq!(report.spent_per_user.get(&1), Some(&2400));
//! println!("{}", report.to_text());
//! ```

pub mod error;
pub mod ingestion;
pub mod observability;
pub mod processing;
pub mod report;
pub mod sample;
pub mod types;

pub use error::{IngestionError, IngestionResult};
