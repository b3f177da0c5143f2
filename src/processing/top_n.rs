//! Top-N product ranking.

use crate::types::Product;

/// Conventional `n` for [`top_expensive_products`].
pub const DEFAULT_TOP_N: usize = 3;

/// Returns the `n` most expensive products, most expensive first.
///
/// The sort is stable: products with equal price keep their input order. Returns fewer than `n`
/// products if the input is shorter. The input slice is not modified.
pub fn top_expensive_products(products: &[Product], n: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    // `sort_by` is stable.
    sorted.sort_by(|a, b| b.price.cmp(&a.price));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::{top_expensive_products, DEFAULT_TOP_N};
    use crate::types::Product;

    #[test]
    fn ranks_by_price_descending() {
        let products = vec![
            Product::new(1, "Mouse", 1200),
            Product::new(2, "Keyboard", 3500),
            Product::new(3, "Monitor", 9000),
            Product::new(4, "Cable", 300),
        ];
        let out = top_expensive_products(&products, DEFAULT_TOP_N);
        let names: Vec<_> = out.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Monitor", "Keyboard", "Mouse"]);
        // Original unchanged
        assert_eq!(products[0].name, "Mouse");
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let products = vec![
            Product::new(1, "A", 500),
            Product::new(2, "B", 900),
            Product::new(3, "C", 500),
            Product::new(4, "D", 500),
        ];
        let ids: Vec<_> = top_expensive_products(&products, 4)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn length_is_min_of_n_and_input() {
        let products = vec![Product::new(1, "A", 1), Product::new(2, "B", 2)];
        assert_eq!(top_expensive_products(&products, 5).len(), 2);
        assert_eq!(top_expensive_products(&products, 1).len(), 1);
        assert!(top_expensive_products(&products, 0).is_empty());
        assert!(top_expensive_products(&[], 3).is_empty());
    }
}
