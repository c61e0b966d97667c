//! `OrderIndex`: O(1) lookup from an order id to the level it rests on.

use crate::ids::OrderId;
use crate::price_level::PriceLevel;
use dashmap::DashMap;
use std::sync::Arc;

/// Maps a resting order's id directly to the [`PriceLevel`] it is queued
/// on, so `cancel(order_id)` never has to walk the price ladder.
///
/// Backed by [`dashmap::DashMap`] rather than a plain `HashMap` — this
/// mirrors the concurrent map the original library reaches for elsewhere
/// for its own order index, even though a single `OrderBook` here is only
/// ever driven by one thread at a time.
#[derive(Debug, Default)]
pub struct OrderIndex {
    levels: DashMap<OrderId, Arc<PriceLevel>>,
}

impl OrderIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            levels: DashMap::new(),
        }
    }

    /// Records that `order_id` now rests on `level`.
    pub fn insert(&self, order_id: OrderId, level: Arc<PriceLevel>) {
        self.levels.insert(order_id, level);
    }

    /// Removes the entry for `order_id`, returning the level it rested on.
    pub fn remove(&self, order_id: &OrderId) -> Option<Arc<PriceLevel>> {
        self.levels.remove(order_id).map(|(_, level)| level)
    }

    /// Looks up the level `order_id` currently rests on.
    pub fn get(&self, order_id: &OrderId) -> Option<Arc<PriceLevel>> {
        self.levels.get(order_id).map(|e| e.value().clone())
    }

    /// Whether `order_id` currently has a resting order tracked.
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.levels.contains_key(order_id)
    }

    /// Number of orders currently tracked.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no order is currently tracked.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OrderId {
        OrderId::new(s).unwrap()
    }

    #[test]
    fn insert_then_get_round_trips() {
        let index = OrderIndex::new();
        let level = Arc::new(PriceLevel::new(100.0));
        index.insert(id("o1"), level.clone());
        assert!(Arc::ptr_eq(&index.get(&id("o1")).unwrap(), &level));
        assert!(index.contains(&id("o1")));
    }

    #[test]
    fn remove_drops_the_entry() {
        let index = OrderIndex::new();
        let level = Arc::new(PriceLevel::new(100.0));
        index.insert(id("o1"), level);
        assert!(index.remove(&id("o1")).is_some());
        assert!(index.get(&id("o1")).is_none());
        assert!(index.remove(&id("o1")).is_none());
    }

    #[test]
    fn len_tracks_insert_and_remove() {
        let index = OrderIndex::new();
        assert_eq!(index.len(), 0);
        index.insert(id("o1"), Arc::new(PriceLevel::new(100.0)));
        index.insert(id("o2"), Arc::new(PriceLevel::new(101.0)));
        assert_eq!(index.len(), 2);
        index.remove(&id("o1"));
        assert_eq!(index.len(), 1);
    }
}
