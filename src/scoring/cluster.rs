//! Greedy price-level grouping
//!
//! Single pass, first compatible group wins: each item not yet grouped
//! becomes an anchor and collects every later ungrouped item within
//! `anchor_price * tolerance`. This is order dependent and not an optimal
//! clustering; equal-levels and confluence both rely on exactly this policy.

/// Group items whose prices sit within a relative tolerance of an anchor
///
/// Only groups with at least two members are returned, in anchor order.
pub fn group_by_price<T, F>(items: &[T], price: F, tolerance: f64) -> Vec<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut used = vec![false; items.len()];
    let mut groups = Vec::new();

    for (i, anchor) in items.iter().enumerate() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let anchor_price = price(anchor);
        let limit = anchor_price * tolerance;
        let mut group = vec![anchor.clone()];

        for (j, other) in items.iter().enumerate().skip(i + 1) {
            if !used[j] && (anchor_price - price(other)).abs() <= limit {
                used[j] = true;
                group.push(other.clone());
            }
        }

        if group.len() >= 2 {
            groups.push(group);
        }
    }

    groups
}
