//! Purchase grouping and membership checks.

use std::collections::BTreeMap;

use crate::types::{ProductId, Purchase, UserId};

/// Partition `purchases` by the key returned from `key_of`.
///
/// Every purchase lands in exactly one group, groups keep input order, and no key maps to an
/// empty group. Keys iterate in ascending order.
pub fn group_by<K, F>(purchases: &[Purchase], mut key_of: F) -> BTreeMap<K, Vec<Purchase>>
where
    K: Ord,
    F: FnMut(&Purchase) -> K,
{
    let mut groups: BTreeMap<K, Vec<Purchase>> = BTreeMap::new();
    for p in purchases {
        groups.entry(key_of(p)).or_default().push(*p);
    }
    groups
}

/// Group purchases by buyer.
pub fn group_by_user(purchases: &[Purchase]) -> BTreeMap<UserId, Vec<Purchase>> {
    group_by(purchases, |p| p.user_id)
}

/// Group purchases by product.
pub fn group_by_product(purchases: &[Purchase]) -> BTreeMap<ProductId, Vec<Purchase>> {
    group_by(purchases, |p| p.product_id)
}

/// Returns `true` if at least one purchase has exactly this `(user_id, product_id)` pair.
pub fn did_user_buy_product(purchases: &[Purchase], user_id: UserId, product_id: ProductId) -> bool {
    purchases
        .iter()
        .any(|p| p.user_id == user_id && p.product_id == product_id)
}
