//! Error types for the order book core.

use crate::ids::OrderId;
use std::fmt;

/// Errors that can occur within the order book.
///
/// Not-found conditions (`cancel` an unknown id, `lookup_trade` an unknown
/// id) are deliberately *not* represented here: per the error-handling
/// design, a miss is an ordinary outcome and is surfaced as `bool`/`Option`,
/// never as an `Err`.
#[derive(Debug)]
#[non_exhaustive]
pub enum OrderBookError {
    /// The order's price was not a finite, non-negative number (e.g. NaN,
    /// infinite, or negative). Prices are used as exact-equality bucket
    /// keys, so `NaN` in particular can never be accepted.
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// The order's quantity was zero or could not be represented.
    InvalidQuantity {
        /// The rejected quantity
        quantity: u64,
    },

    /// An order id exceeded the maximum supported length.
    IdTooLong {
        /// The length, in bytes, that was rejected
        len: usize,
    },

    /// An order id was already resting on the book when it was submitted
    /// again via `add_resting`. The caller must cancel the existing order
    /// first if replacement is intended.
    DuplicateOrderId {
        /// The order id that collided
        order_id: OrderId,
    },

    /// Allocation failed while inserting into one of the internal indices.
    /// The operation is aborted and no visible state change occurs.
    AllocationFailed,
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::InvalidPrice { price } => {
                write!(f, "invalid price: {price} is not a finite, non-negative number")
            }
            OrderBookError::InvalidQuantity { quantity } => {
                write!(f, "invalid quantity: {quantity}")
            }
            OrderBookError::IdTooLong { len } => {
                write!(f, "id too long: {len} bytes exceeds the maximum supported length")
            }
            OrderBookError::DuplicateOrderId { order_id } => {
                write!(f, "order id already resting on the book: {order_id}")
            }
            OrderBookError::AllocationFailed => {
                write!(f, "allocation failed while updating the order book")
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_non_empty() {
        let errors = [
            OrderBookError::InvalidPrice { price: f64::NAN },
            OrderBookError::InvalidQuantity { quantity: 0 },
            OrderBookError::IdTooLong { len: 40 },
            OrderBookError::AllocationFailed,
        ];
        for err in &errors {
            assert!(!err.to_string().is_empty());
        }
    }

    #[test]
    fn implements_error_trait() {
        let err = OrderBookError::AllocationFailed;
        let _: &dyn std::error::Error = &err;
    }
}
