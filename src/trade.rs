//! `Trade` records and the append-only `TradeLog`.

use crate::ids::{OrderId, TradeId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// An executed trade between a buy order and a sell order.
///
/// Immutable once created. `price` is always the **resting** order's price
/// (never the aggressor's) — see the crossing algorithm's price-improvement
/// rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier for this trade, within the lifetime of its `OrderBook`.
    pub trade_id: TradeId,
    /// Order id of the buy-side participant.
    pub buy_order_id: OrderId,
    /// User id of the buy-side participant.
    pub buy_user_id: UserId,
    /// Order id of the sell-side participant.
    pub sell_order_id: OrderId,
    /// User id of the sell-side participant.
    pub sell_user_id: UserId,
    /// Matched quantity.
    pub size: u64,
    /// Price at which the trade occurred (the resting order's price).
    pub price: f64,
    /// Wall-clock time, milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// A process-private, monotonically increasing generator of [`TradeId`]s.
///
/// The source uses a single `static int counter` shared by every
/// `OrderBook`; per the design notes, this rewrite keeps the counter
/// encapsulated within each `OrderBook` instance so that multiple
/// independent books never collide or interfere with one another.
#[derive(Debug, Default)]
pub struct TradeIdGenerator {
    next: AtomicU64,
}

impl TradeIdGenerator {
    /// Creates a generator starting at zero.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Returns the next trade id, formatted `TRADE-00000000`.
    pub fn next(&self) -> TradeId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        // Unwrap is safe: the formatted string is always well under MAX_ID_LEN.
        TradeId::new(&format!("TRADE-{n:08}")).expect("generated trade id always fits")
    }
}

/// The append-only, chronological record of every trade executed by an
/// `OrderBook` over its lifetime.
#[derive(Debug, Default)]
pub struct TradeLog {
    trades: Mutex<Vec<Trade>>,
}

impl TradeLog {
    /// Creates an empty trade log.
    pub fn new() -> Self {
        Self {
            trades: Mutex::new(Vec::new()),
        }
    }

    /// Appends a trade. Trades are never reordered or removed once appended.
    pub fn push(&self, trade: Trade) {
        self.lock().push(trade);
    }

    /// Returns a snapshot of every trade, in append order.
    pub fn snapshot(&self) -> Vec<Trade> {
        self.lock().clone()
    }

    /// Number of trades recorded so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no trade has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds a trade by id via linear scan, as the spec permits.
    pub fn lookup(&self, trade_id: &TradeId) -> Option<Trade> {
        self.lock().iter().find(|t| &t.trade_id == trade_id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Trade>> {
        self.trades.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
