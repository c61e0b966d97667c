//! The `Order` value type.

use crate::error::OrderBookError;
use crate::ids::{OrderId, Side, UserId};
use serde::{Deserialize, Serialize};

/// A single limit order.
///
/// An `Order`'s lifetime begins when it is submitted to an [`crate::OrderBook`].
/// If it rests, it is owned by exactly one [`crate::PriceLevel`] until it is
/// fully filled or cancelled — there is no other owner of a resting order's
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Opaque identifier for this order, unique among currently-resting orders.
    pub order_id: OrderId,
    /// Opaque identifier for the order's owner.
    pub user_id: UserId,
    /// Remaining quantity. Decremented in place under partial fill.
    pub quantity: u64,
    /// Buy or sell.
    pub side: Side,
    /// Limit price. Compared by exact `f64` equality when bucketing into
    /// price levels — see [`crate::price_index::OrderedPriceIndex`].
    pub price: f64,
    /// Monotonic arrival sequence, assigned by the caller. Informational
    /// only: it plays no role in matching beyond the FIFO order in which
    /// orders are appended to a [`crate::PriceLevel`].
    pub timestamp: u64,
}

impl Order {
    /// Constructs a new order, validating price and quantity.
    ///
    /// # Errors
    /// Returns [`OrderBookError::InvalidPrice`] if `price` is `NaN`,
    /// infinite, or negative, and [`OrderBookError::InvalidQuantity`] if
    /// `quantity` is zero.
    pub fn new(
        order_id: OrderId,
        user_id: UserId,
        quantity: u64,
        side: Side,
        price: f64,
        timestamp: u64,
    ) -> Result<Self, OrderBookError> {
        if !price.is_finite() || price < 0.0 {
            return Err(OrderBookError::InvalidPrice { price });
        }
        if quantity == 0 {
            return Err(OrderBookError::InvalidQuantity { quantity });
        }
        Ok(Self {
            order_id,
            user_id,
            quantity,
            side,
            price,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OrderId {
        OrderId::new(s).unwrap()
    }

    #[test]
    fn rejects_nan_price() {
        let err = Order::new(id("o1"), id("u1"), 10, Side::Buy, f64::NAN, 0).unwrap_err();
        assert!(matches!(err, OrderBookError::InvalidPrice { .. }));
    }

    #[test]
    fn rejects_negative_price() {
        let err = Order::new(id("o1"), id("u1"), 10, Side::Buy, -1.0, 0).unwrap_err();
        assert!(matches!(err, OrderBookError::InvalidPrice { .. }));
    }

    #[test]
    fn rejects_zero_quantity() {
        let err = Order::new(id("o1"), id("u1"), 0, Side::Buy, 100.0, 0).unwrap_err();
        assert!(matches!(err, OrderBookError::InvalidQuantity { .. }));
    }

    #[test]
    fn accepts_valid_order() {
        let order = Order::new(id("o1"), id("u1"), 10, Side::Buy, 100.0, 0).unwrap();
        assert_eq!(order.quantity, 10);
        assert_eq!(order.price, 100.0);
    }
}
