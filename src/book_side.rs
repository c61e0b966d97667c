//! `BookSide`: one side of the book, and the crossing algorithm.

use crate::ids::{OrderId, Side};
use crate::order::Order;
use crate::order_index::OrderIndex;
use crate::price_index::OrderedPriceIndex;
use tracing::{debug, trace};

/// A single fill produced while matching an incoming order against this
/// side: a snapshot of the resting order as it stood at the moment of the
/// match, the quantity taken from it, and the price the trade occurred at
/// (always the resting order's price).
#[derive(Debug, Clone)]
pub struct Fill {
    pub resting_order_id: OrderId,
    pub resting_user_id: crate::ids::UserId,
    pub quantity: u64,
    pub price: f64,
}

/// One side (bid or ask) of an [`crate::OrderBook`].
///
/// Owns the [`OrderedPriceIndex`] of its [`crate::PriceLevel`]s and the
/// [`OrderIndex`] mapping every resting order id on this side to its level.
#[derive(Debug)]
pub struct BookSide {
    polarity: Side,
    levels: OrderedPriceIndex,
    orders: OrderIndex,
}

impl BookSide {
    /// Creates an empty side with the given polarity.
    pub fn new(polarity: Side) -> Self {
        Self {
            polarity,
            levels: OrderedPriceIndex::new(),
            orders: OrderIndex::new(),
        }
    }

    /// This side's polarity (bid or ask).
    pub fn polarity(&self) -> Side {
        self.polarity
    }

    /// Adds `order` as a resting order: locates or creates its price level
    /// and appends it there, recording the id in the `OrderIndex`. Does
    /// not attempt to match.
    pub fn add_resting(&self, order: Order) {
        trace!(order_id = %order.order_id, price = order.price, "resting order");
        let level = self.levels.get_or_insert(order.price);
        let order_id = order.order_id;
        level.append(order);
        self.orders.insert(order_id, level);
    }

    /// Cancels the resting order with the given id.
    ///
    /// Returns whether an order with that id was present on this side.
    pub fn cancel(&self, order_id: &OrderId) -> bool {
        let Some(level) = self.orders.remove(order_id) else {
            debug!(%order_id, "cancel: not found");
            return false;
        };
        let price = level.price();
        let removed = level.remove_by_id(order_id);
        debug_assert!(removed.is_some(), "OrderIndex pointed to a level without the order");
        if level.is_empty() {
            self.levels.remove_if_empty(price);
        }
        true
    }

    /// The best price on this side: the highest bid, or the lowest ask.
    /// `0.0` if the side is empty.
    pub fn best_price(&self) -> f64 {
        match self.polarity {
            Side::Buy => self.levels.max_price().unwrap_or(0.0),
            Side::Sell => self.levels.min_price().unwrap_or(0.0),
        }
    }

    /// Whether this side currently holds no resting orders.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether an order with `order_id` currently rests on this side.
    pub fn is_resting(&self, order_id: &OrderId) -> bool {
        self.orders.contains(order_id)
    }

    /// Up to `k` (price, total_quantity) pairs, best price first. `k == 0`
    /// means all levels.
    pub fn top_levels(&self, k: usize) -> Vec<(f64, u64)> {
        let iter: Box<dyn Iterator<Item = _>> = match self.polarity {
            Side::Buy => Box::new(self.levels.iter_descending()),
            Side::Sell => Box::new(self.levels.iter_ascending()),
        };
        let pairs = iter.map(|level| (level.price(), level.total_quantity()));
        if k == 0 {
            pairs.collect()
        } else {
            pairs.take(k).collect()
        }
    }

    /// Whether `price` crosses this side for an incoming order of the
    /// opposite polarity. Called on the resting side, i.e. a buy's
    /// incoming price is checked here against the ask side, and vice
    /// versa.
    fn crosses(&self, resting_price: f64, incoming_price: f64) -> bool {
        match self.polarity {
            // This side holds asks; the incoming order is a buy.
            Side::Sell => resting_price <= incoming_price,
            // This side holds bids; the incoming order is a sell.
            Side::Buy => resting_price >= incoming_price,
        }
    }

    /// Matches `incoming` against this (opposite) side, mutating its
    /// quantity down to the unfilled remainder and returning one [`Fill`]
    /// per resting order touched, in match order.
    ///
    /// Levels emptied during matching are removed before the extremum is
    /// re-read; fully consumed orders are removed from the `OrderIndex` in
    /// the same step, per the crossing algorithm's consistency rule.
    pub fn execute_against(&self, incoming: &mut Order) -> Vec<Fill> {
        let mut fills = Vec::new();
        while incoming.quantity > 0 && !self.levels.is_empty() {
            let Some(best_price) = self.extremum_price() else {
                break;
            };
            if !self.crosses(best_price, incoming.price) {
                break;
            }
            let Some(level) = self.levels.get(best_price) else {
                break;
            };
            while incoming.quantity > 0 && !level.is_empty() {
                let Some(head) = level.peek_head() else { break };
                let filled = head.quantity.min(incoming.quantity);
                incoming.quantity -= filled;
                if filled == head.quantity {
                    let popped = level.pop_head();
                    debug_assert!(popped.is_some());
                    self.orders.remove(&head.order_id);
                } else {
                    level.decrement_head(filled);
                }
                fills.push(Fill {
                    resting_order_id: head.order_id,
                    resting_user_id: head.user_id,
                    quantity: filled,
                    price: best_price,
                });
            }
            if level.is_empty() {
                self.levels.remove_if_empty(best_price);
            }
        }
        if !fills.is_empty() {
            trace!(count = fills.len(), "crossing produced fills");
        }
        fills
    }

    fn extremum_price(&self) -> Option<f64> {
        match self.polarity {
            Side::Buy => self.levels.max_price(),
            Side::Sell => self.levels.min_price(),
        }
    }
}
