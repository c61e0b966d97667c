//! `OrderedPriceIndex`: price levels ordered for O(log n) best-price lookup.

use crate::price_level::PriceLevel;
use crossbeam_skiplist::SkipMap;
use ordered_float::OrderedFloat;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A price-ordered collection of [`PriceLevel`]s for one side of the book.
///
/// Backed by a [`crossbeam_skiplist::SkipMap`], which gives O(log n)
/// insert/remove/lookup and cheap ordered iteration in either direction —
/// exactly the access pattern `best_bid`/`best_ask`/`top_levels` need. The
/// map is concurrent-safe by construction; nothing here requires that, but
/// it is the data structure the original library already reaches for when
/// it needs an ordered price ladder, so it is reused rather than replaced
/// with a `BTreeMap`.
///
/// Keys are [`OrderedFloat<f64>`] rather than raw `f64`, since `f64` has no
/// total order (`NaN`) and therefore no `Ord` impl of its own; levels are
/// never created at a `NaN` price (see [`OrderedPriceIndex::insert`]).
#[derive(Debug, Default)]
pub struct OrderedPriceIndex {
    levels: SkipMap<OrderedFloat<f64>, Arc<PriceLevel>>,
    count: AtomicUsize,
}

impl OrderedPriceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            levels: SkipMap::new(),
            count: AtomicUsize::new(0),
        }
    }

    /// Returns the existing level at `price`, inserting a fresh empty one
    /// first if none exists yet.
    ///
    /// `price` must be finite; callers are expected to have already
    /// validated it (see [`crate::order::Order::new`]).
    pub fn get_or_insert(&self, price: f64) -> Arc<PriceLevel> {
        let key = OrderedFloat(price);
        if let Some(entry) = self.levels.get(&key) {
            return entry.value().clone();
        }
        let level = Arc::new(PriceLevel::new(price));
        let entry = self.levels.get_or_insert(key, level);
        self.count.fetch_add(1, Ordering::Relaxed);
        entry.value().clone()
    }

    /// Looks up the level at `price`, if one currently exists.
    pub fn get(&self, price: f64) -> Option<Arc<PriceLevel>> {
        self.levels.get(&OrderedFloat(price)).map(|e| e.value().clone())
    }

    /// Removes the level at `price` if it is empty. No-op if the level is
    /// missing or still holds orders.
    pub fn remove_if_empty(&self, price: f64) {
        let key = OrderedFloat(price);
        if let Some(entry) = self.levels.get(&key) {
            if entry.value().is_empty() {
                entry.remove();
                self.count.fetch_sub(1, Ordering::Relaxed);
            }
        }
    }

    /// Number of distinct price levels currently held.
    pub fn size(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Whether no price level is currently held.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The lowest price currently present.
    pub fn min_price(&self) -> Option<f64> {
        self.levels.front().map(|e| e.key().0)
    }

    /// The highest price currently present.
    pub fn max_price(&self) -> Option<f64> {
        self.levels.back().map(|e| e.key().0)
    }

    /// Iterates levels from lowest to highest price.
    pub fn iter_ascending(&self) -> impl Iterator<Item = Arc<PriceLevel>> + '_ {
        self.levels.iter().map(|e| e.value().clone())
    }

    /// Iterates levels from highest to lowest price.
    pub fn iter_descending(&self) -> impl Iterator<Item = Arc<PriceLevel>> + '_ {
        self.levels.iter().rev().map(|e| e.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OrderId, Side, UserId};
    use crate::order::Order;

    fn order_at(price: f64) -> Order {
        Order::new(
            OrderId::new("o").unwrap(),
            UserId::new("u").unwrap(),
            1,
            Side::Buy,
            price,
            0,
        )
        .unwrap()
    }

    #[test]
    fn get_or_insert_reuses_existing_level() {
        let idx = OrderedPriceIndex::new();
        let a = idx.get_or_insert(100.0);
        let b = idx.get_or_insert(100.0);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(idx.size(), 1);
    }

    #[test]
    fn ascending_and_descending_order() {
        let idx = OrderedPriceIndex::new();
        idx.get_or_insert(101.0);
        idx.get_or_insert(99.0);
        idx.get_or_insert(100.0);
        let asc: Vec<f64> = idx.iter_ascending().map(|l| l.price()).collect();
        assert_eq!(asc, vec![99.0, 100.0, 101.0]);
        let desc: Vec<f64> = idx.iter_descending().map(|l| l.price()).collect();
        assert_eq!(desc, vec![101.0, 100.0, 99.0]);
    }

    #[test]
    fn min_and_max_price() {
        let idx = OrderedPriceIndex::new();
        assert_eq!(idx.min_price(), None);
        idx.get_or_insert(50.0);
        idx.get_or_insert(75.0);
        assert_eq!(idx.min_price(), Some(50.0));
        assert_eq!(idx.max_price(), Some(75.0));
    }

    #[test]
    fn remove_if_empty_only_removes_empty_levels() {
        let idx = OrderedPriceIndex::new();
        let level = idx.get_or_insert(100.0);
        level.append(order_at(100.0));
        idx.remove_if_empty(100.0);
        assert_eq!(idx.size(), 1);
        level.pop_head();
        idx.remove_if_empty(100.0);
        assert_eq!(idx.size(), 0);
    }
}
