//! In-memory transformations over users, products and purchases.
//!
//! Every function here is pure: it borrows its input and returns a new collection or value.
//! Missing data shows up as an empty collection or `None`, never as an error.
//!
//! - [`users_older_than()`]: age filter
//! - [`top_expensive_products()`]: stable top-N by price
//! - [`group_by_user()`], [`group_by_product()`], [`did_user_buy_product()`]: grouping
//! - [`total_spent_per_user()`], [`top_buyer_by_spent()`]: spend aggregation
//! - [`find_max()`]: generic arg-max over any iterable
//!
//! ## Example
//!
//! ```rust
//! use purchase_report::processing::{
//!     find_max, top_buyer_by_spent, top_expensive_products, total_spent_per_user, users_older_than,
//! };
//! use purchase_report::types::{Product, Purchase, User};
//!
//! let users = vec![User::new(1, "Ivan", 18), User::new(2, "Anna", 25), User::new(3, "Bo", 30)];
//! let products = vec![
//!     Product::new(1, "Mouse", 1200),
//!     Product::new(2, "Keyboard", 3500),
//!     Product::new(3, "Monitor", 9000),
//! ];
//! let purchases = vec![Purchase::new(1, 1, 2), Purchase::new(2, 2, 1), Purchase::new(3, 3, 1)];
//!
//! assert_eq!(users_older_than(&users, 21).len(), 2);
//! assert_eq!(top_expensive_products(&products, 3)[0].name, "Monitor");
//!
//! let spent = total_spent_per_user(&users, &products, &purchases);
//! assert_eq!(spent[&1], 2400);
//! assert_eq!(top_buyer_by_spent(&users, &spent).unwrap().name, "Bo");
//! assert_eq!(find_max(&products, |p| p.price).unwrap().name, "Monitor");
//! ```

pub mod filter;
pub mod group;
pub mod reduce;
pub mod top_n;

pub use filter::users_older_than;
pub use group::{did_user_buy_product, group_by, group_by_product, group_by_user};
pub use reduce::{
    find_max, price_index, top_buyer_by_spent, total_spent_per_user, unresolved_purchases,
};
pub use top_n::{top_expensive_products, DEFAULT_TOP_N};
