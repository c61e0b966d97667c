//! `PriceLevel`: the FIFO queue of resting orders at a single price.

use crate::order::Order;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct PriceLevelInner {
    orders: VecDeque<Order>,
    total_quantity: u64,
}

/// An ordered, first-in-first-out queue of resting orders that all share
/// the same `price` and `side`. The head of the queue is the oldest order
/// at this price — the one with time priority.
///
/// `PriceLevel` is wrapped in a [`std::sync::Mutex`] internally (not a
/// `RefCell`) purely so it can be shared, via `Arc`, between the
/// [`crate::price_index::OrderedPriceIndex`] that owns it and the
/// [`crate::order_index::OrderIndex`] that holds a non-owning handle to
/// it; the book itself is always driven from a single thread, so the lock
/// is never contended.
#[derive(Debug)]
pub struct PriceLevel {
    price: f64,
    inner: Mutex<PriceLevelInner>,
}

impl PriceLevel {
    /// Creates a new, empty price level at `price`.
    pub fn new(price: f64) -> Self {
        Self {
            price,
            inner: Mutex::new(PriceLevelInner::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PriceLevelInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The price of this level.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Appends `order` to the tail of the queue.
    ///
    /// # Panics
    /// Panics in debug builds if `order.price` doesn't match this level's
    /// price, or `order.side` differs from the first order already resting
    /// here — both would violate the level's invariant.
    pub fn append(&self, order: Order) {
        let mut inner = self.lock();
        debug_assert!(
            order.price == self.price,
            "order price {} does not match level price {}",
            order.price,
            self.price
        );
        if let Some(existing) = inner.orders.front() {
            debug_assert_eq!(existing.side, order.side, "mixed sides within one price level");
        }
        inner.total_quantity += order.quantity;
        inner.orders.push_back(order);
    }

    /// Returns a clone of the oldest order without removing it.
    pub fn peek_head(&self) -> Option<Order> {
        self.lock().orders.front().cloned()
    }

    /// Removes and returns the oldest order, if any.
    pub fn pop_head(&self) -> Option<Order> {
        let mut inner = self.lock();
        let order = inner.orders.pop_front()?;
        inner.total_quantity = inner.total_quantity.saturating_sub(order.quantity);
        Some(order)
    }

    /// Removes the order with the given id via a linear scan.
    ///
    /// Cost is O(queue length): acceptable per the spec since cancellation
    /// is rare relative to matching on hot price levels.
    pub fn remove_by_id(&self, order_id: &crate::ids::OrderId) -> Option<Order> {
        let mut inner = self.lock();
        let pos = inner.orders.iter().position(|o| &o.order_id == order_id)?;
        let order = inner.orders.remove(pos)?;
        inner.total_quantity = inner.total_quantity.saturating_sub(order.quantity);
        Some(order)
    }

    /// Reduces the head order's quantity by `n`, where `0 < n < head.quantity`.
    ///
    /// Returns `false` (no-op) if the queue is empty or `n` is out of range;
    /// the caller observes no partial mutation in that case.
    pub fn decrement_head(&self, n: u64) -> bool {
        let mut inner = self.lock();
        let Some(head) = inner.orders.front_mut() else {
            return false;
        };
        if n == 0 || n >= head.quantity {
            return false;
        }
        head.quantity -= n;
        inner.total_quantity = inner.total_quantity.saturating_sub(n);
        true
    }

    /// Whether the queue holds no orders.
    pub fn is_empty(&self) -> bool {
        self.lock().orders.is_empty()
    }

    /// Sum of the `quantity` field of every order currently in the queue.
    pub fn total_quantity(&self) -> u64 {
        self.lock().total_quantity
    }

    /// Number of orders currently in the queue.
    pub fn order_count(&self) -> usize {
        self.lock().orders.len()
    }
}
