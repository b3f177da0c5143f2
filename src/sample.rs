//! The fixed sample dataset printed by the `purchase-report` binary.

use crate::types::{Dataset, Product, Purchase, User};

/// Sample users.
pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Ivan", 18),
        User::new(2, "Anna", 25),
        User::new(3, "Bo", 30),
        User::new(4, "Lena", 21),
        User::new(5, "Oleg", 42),
    ]
}

/// Sample products. Keyboard and Webcam share a price.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Mouse", 1200),
        Product::new(2, "Keyboard", 3500),
        Product::new(3, "Monitor", 9000),
        Product::new(4, "Headphones", 4500),
        Product::new(5, "USB Cable", 300),
        Product::new(6, "Webcam", 3500),
    ]
}

/// Sample purchases.
pub fn purchases() -> Vec<Purchase> {
    vec![
        Purchase::new(1, 1, 2),
        Purchase::new(2, 2, 1),
        Purchase::new(3, 3, 1),
        Purchase::new(1, 5, 3),
        Purchase::new(2, 4, 1),
        Purchase::new(4, 6, 1),
        Purchase::new(5, 3, 2),
        Purchase::new(5, 1, 1),
        Purchase::new(3, 5, 2),
        Purchase::new(2, 1, 1),
        Purchase::new(4, 2, 1),
    ]
}

/// The full sample [`Dataset`].
pub fn dataset() -> Dataset {
    Dataset::new(users(), products(), purchases())
}
