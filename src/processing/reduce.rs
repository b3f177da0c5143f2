//! Reductions: spend totals, top buyer, and the generic maximum finder.

use std::collections::{BTreeMap, HashMap};

use crate::types::{Amount, Price, Product, ProductId, Purchase, User, UserId};

use super::group::group_by_user;

/// Build a `product id -> price` lookup.
///
/// If ids repeat, the last product wins.
pub fn price_index(products: &[Product]) -> HashMap<ProductId, Price> {
    products.iter().map(|p| (p.id, p.price)).collect()
}

/// Purchases whose `product_id` does not resolve to any product, in input order.
pub fn unresolved_purchases(products: &[Product], purchases: &[Purchase]) -> Vec<Purchase> {
    let prices = price_index(products);
    purchases
        .iter()
        .filter(|p| !prices.contains_key(&p.product_id))
        .copied()
        .collect()
}

/// Total amount spent per user: the sum of `price * quantity` over that user's purchases.
///
/// - Unresolved product ids count as price `0`.
/// - Every user in `users` has an entry, `0` if they bought nothing.
/// - User ids that only appear in `purchases` still get an entry.
/// - Arithmetic saturates at the `i64` bounds.
pub fn total_spent_per_user(
    users: &[User],
    products: &[Product],
    purchases: &[Purchase],
) -> BTreeMap<UserId, Amount> {
    let prices = price_index(products);

    let mut spent: BTreeMap<UserId, Amount> = group_by_user(purchases)
        .into_iter()
        .map(|(user_id, user_purchases)| {
            let total = user_purchases.iter().fold(0, |acc: Amount, p| {
                let price = prices.get(&p.product_id).copied().unwrap_or(0);
                acc.saturating_add(price.saturating_mul(p.quantity))
            });
            (user_id, total)
        })
        .collect();

    for u in users {
        spent.entry(u.id).or_insert(0);
    }
    spent
}

/// The user with the greatest total in `spent_by_user_id`.
///
/// Ties resolve to the lowest user id. Returns `None` for an empty map, or if the winning id has
/// no matching user.
pub fn top_buyer_by_spent(
    users: &[User],
    spent_by_user_id: &BTreeMap<UserId, Amount>,
) -> Option<User> {
    // Map iteration is ascending by id, and find_max keeps the first maximum.
    let (top_id, _) = find_max(spent_by_user_id.iter(), |&(_, amount)| *amount)?;
    users.iter().find(|u| u.id == *top_id).cloned()
}

/// Returns the element with the greatest key, as computed by `key_of`.
///
/// Works on any iterable (slices, vectors, map iterators). If several elements share the maximum
/// key, the first one in iteration order is returned. Returns `None` for empty input.
///
/// ```rust
/// use purchase_report::processing::find_max;
///
/// let words = ["pear", "fig", "banana", "cherry"];
/// assert_eq!(find_max(words.iter(), |w| w.len()), Some(&"banana"));
/// assert_eq!(find_max(Vec::<i32>::new(), |x| *x), None);
/// ```
pub fn find_max<I, K, F>(items: I, mut key_of: F) -> Option<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut iter = items.into_iter();
    let mut best = iter.next()?;
    let mut best_key = key_of(&best);

    for candidate in iter {
        let key = key_of(&candidate);
        if key > best_key {
            best = candidate;
            best_key = key;
        }
    }
    Some(best)
}
