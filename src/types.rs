//! Core data model types.
//!
//! Every entity is an immutable snapshot: processing functions borrow them and return new
//! collections, never mutating their input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`User`].
pub type UserId = i64;
/// Identifier of a [`Product`].
pub type ProductId = i64;
/// Unit price of a [`Product`].
pub type Price = i64;
/// Money spent (price times quantity, summed).
pub type Amount = i64;

/// A customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Unique id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
}

impl User {
    /// Create a new user.
    pub fn new(id: UserId, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name={}, age={})", self.id, self.name, self.age)
    }
}

/// An item that can be purchased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// Unique id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, non-negative.
    pub price: Price,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={})",
            self.id, self.name, self.price
        )
    }
}

/// A single purchase line: `quantity` units of a product bought by a user.
///
/// `user_id` and `product_id` are not validated against any user/product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Purchase {
    /// Buyer.
    #[serde(alias = "userId")]
    pub user_id: UserId,
    /// Product bought.
    #[serde(alias = "productId")]
    pub product_id: ProductId,
    /// Number of units, positive.
    pub quantity: i64,
}

impl Purchase {
    /// Create a new purchase.
    pub fn new(user_id: UserId, product_id: ProductId, quantity: i64) -> Self {
        Self {
            user_id,
            product_id,
            quantity,
        }
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchase(userId={}, productId={}, quantity={})",
            self.user_id, self.product_id, self.quantity
        )
    }
}

/// In-memory snapshot of users, products and purchases for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Users, in input order.
    #[serde(default)]
    pub users: Vec<User>,
    /// Products, in input order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Purchases, in input order.
    #[serde(default)]
    pub purchases: Vec<Purchase>,
}

impl Dataset {
    /// Create a dataset from its three lists.
    pub fn new(users: Vec<User>, products: Vec<Product>, purchases: Vec<Purchase>) -> Self {
        Self {
            users,
            products,
            purchases,
        }
    }

    /// Look up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Returns `true` if the dataset has no users, products or purchases.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.products.is_empty() && self.purchases.is_empty()
    }
}
