//! `OrderBook`: the top-level public surface.

use crate::book_side::BookSide;
use crate::config::OrderBookConfig;
use crate::error::OrderBookError;
use crate::ids::{OrderId, Side, TradeId};
use crate::order::Order;
use crate::trade::{Trade, TradeIdGenerator, TradeLog};
use tracing::{debug, trace, warn};

/// A single-instrument, single-threaded limit order book.
///
/// Owns both [`BookSide`]s (bid and ask) and the book's append-only
/// [`TradeLog`]. `submit` is the book's one mutating entry point that
/// performs matching; `cancel` removes a resting order without matching.
#[derive(Debug)]
pub struct OrderBook {
    config: OrderBookConfig,
    bid: BookSide,
    ask: BookSide,
    trades: TradeLog,
    trade_ids: TradeIdGenerator,
}

impl OrderBook {
    /// Creates an empty book with the default configuration.
    pub fn new() -> Self {
        Self::with_config(OrderBookConfig::new())
    }

    /// Creates an empty book with the given configuration.
    pub fn with_config(config: OrderBookConfig) -> Self {
        debug!(symbol = ?config.symbol, "new order book");
        Self {
            config,
            bid: BookSide::new(Side::Buy),
            ask: BookSide::new(Side::Sell),
            trades: TradeLog::new(),
            trade_ids: TradeIdGenerator::new(),
        }
    }

    /// This book's configuration.
    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    /// Submits an order: runs it through the crossing algorithm against
    /// the opposite side, records one [`Trade`] per fill, and rests any
    /// unfilled residual on the order's own side.
    ///
    /// Returns the ids of every trade produced, in match order — an empty
    /// `Vec` (never a sentinel) when nothing crossed.
    ///
    /// # Errors
    /// Rejects the order, with no visible state change, if its id is
    /// already resting on either side of the book.
    pub fn submit(&self, mut order: Order) -> Result<Vec<TradeId>, OrderBookError> {
        if self.bid.is_resting(&order.order_id) || self.ask.is_resting(&order.order_id) {
            warn!(order_id = %order.order_id, "rejecting duplicate order id");
            return Err(OrderBookError::DuplicateOrderId { order_id: order.order_id });
        }

        trace!(order_id = %order.order_id, side = %order.side, price = order.price, quantity = order.quantity, "submit");

        let incoming_side = order.side;
        let incoming_id = order.order_id;
        let incoming_user = order.user_id;
        let opposite = match incoming_side {
            Side::Buy => &self.ask,
            Side::Sell => &self.bid,
        };

        let fills = opposite.execute_against(&mut order);
        let mut trade_ids = Vec::with_capacity(fills.len());
        for fill in fills {
            let trade_id = self.trade_ids.next();
            let (buy_order_id, buy_user_id, sell_order_id, sell_user_id) = match incoming_side {
                Side::Buy => (incoming_id, incoming_user, fill.resting_order_id, fill.resting_user_id),
                Side::Sell => (fill.resting_order_id, fill.resting_user_id, incoming_id, incoming_user),
            };
            let trade = Trade {
                trade_id,
                buy_order_id,
                buy_user_id,
                sell_order_id,
                sell_user_id,
                size: fill.quantity,
                price: fill.price,
                timestamp: crate::utils::current_time_millis(),
            };
            self.trades.push(trade);
            trade_ids.push(trade_id);
        }

        if order.quantity > 0 {
            let own_side = match incoming_side {
                Side::Buy => &self.bid,
                Side::Sell => &self.ask,
            };
            own_side.add_resting(order);
        }

        Ok(trade_ids)
    }

    /// Cancels a resting order, trying the bid side then the ask side.
    /// Returns whether an order with that id was found.
    pub fn cancel(&self, order_id: &OrderId) -> bool {
        self.bid.cancel(order_id) || self.ask.cancel(order_id)
    }

    /// The best (highest) bid price, or `0.0` if no bid rests.
    pub fn best_bid(&self) -> f64 {
        self.bid.best_price()
    }

    /// The best (lowest) ask price, or `0.0` if no ask rests.
    pub fn best_ask(&self) -> f64 {
        self.ask.best_price()
    }

    /// Up to `k` (price, total_quantity) levels per side, each ordered
    /// best-first (bids descending, asks ascending). `k == 0` means all
    /// levels.
    pub fn top_levels(&self, k: usize) -> (Vec<(f64, u64)>, Vec<(f64, u64)>) {
        (self.bid.top_levels(k), self.ask.top_levels(k))
    }

    /// A snapshot of every trade executed so far, in chronological order.
    pub fn trades(&self) -> Vec<Trade> {
        self.trades.snapshot()
    }

    /// Looks up a trade by id via a linear scan of the `TradeLog`.
    pub fn lookup_trade(&self, trade_id: &TradeId) -> Option<Trade> {
        self.trades.lookup(trade_id)
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}
