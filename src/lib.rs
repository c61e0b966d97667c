//! # Limit Order Book
//!
//! A single-instrument, single-threaded limit order book with
//! price-time-priority matching.
//!
//! The book accepts day-limit orders only: a submitted order either rests
//! on its side of the book or crosses against the opposite side, producing
//! zero or more [`Trade`]s. There is no support for order types beyond
//! plain limit orders, no self-trade prevention, and no fee model — see
//! the module-level docs on [`order_book`] for the full contract.
//!
//! ## Layout
//!
//! The core is five components, built bottom-up:
//!
//! - [`price_level`] — FIFO queue of resting orders at one price.
//! - [`price_index`] — ordered map from price to [`price_level::PriceLevel`].
//! - [`order_index`] — map from order id to the level holding it.
//! - [`book_side`] — one side of the book; owns the crossing algorithm.
//! - [`order_book`] — the two sides plus the trade log; the public API.
//!
//! ## Example
//!
//! ```
//! use limit_order_book::{OrderBook, Order, OrderId, UserId, Side};
//!
//! let book = OrderBook::new();
//! let ask = Order::new(OrderId::new("ask1").unwrap(), UserId::new("seller").unwrap(), 100, Side::Sell, 100.0, 0).unwrap();
//! book.submit(ask).unwrap();
//!
//! let bid = Order::new(OrderId::new("bid1").unwrap(), UserId::new("buyer").unwrap(), 50, Side::Buy, 101.0, 0).unwrap();
//! let trade_ids = book.submit(bid).unwrap();
//! assert_eq!(trade_ids.len(), 1);
//! assert_eq!(book.best_ask(), 100.0);
//! ```

pub mod book_side;
pub mod config;
pub mod error;
pub mod ids;
pub mod order;
pub mod order_book;
pub mod order_index;
pub mod price_index;
pub mod price_level;
pub mod trade;
mod utils;

pub use book_side::{BookSide, Fill};
pub use config::OrderBookConfig;
pub use error::OrderBookError;
pub use ids::{OrderId, Side, TradeId, UserId};
pub use order::Order;
pub use order_book::OrderBook;
pub use order_index::OrderIndex;
pub use price_index::OrderedPriceIndex;
pub use price_level::PriceLevel;
pub use trade::{Trade, TradeIdGenerator, TradeLog};
