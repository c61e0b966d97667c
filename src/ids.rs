//! Opaque short identifiers and the buy/sell polarity type.
//!
//! The source system hides `order_id`/`user_id`/`trade_id` behind a fixed
//! `char[37]` buffer and compares them byte-for-byte. `SmallId` is the
//! direct-value translation of that buffer: a stack-allocated, `Copy`
//! byte array with the same capacity, instead of a heap-allocated `String`.
//! Equality is exactly `memcmp` over the populated bytes, which preserves
//! the byte-identical match semantics the spec requires.

use crate::error::OrderBookError;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Maximum number of bytes a `SmallId` can hold (the source's `char[37]`
/// buffer, minus the NUL terminator).
pub const MAX_ID_LEN: usize = 36;

/// An opaque short identifier used for order ids, user ids, and trade ids.
#[derive(Clone, Copy)]
pub struct SmallId {
    bytes: [u8; MAX_ID_LEN],
    len: u8,
}

impl SmallId {
    /// Builds a `SmallId` from a string slice, rejecting anything longer
    /// than [`MAX_ID_LEN`] bytes.
    pub fn new(s: &str) -> Result<Self, OrderBookError> {
        let raw = s.as_bytes();
        if raw.len() > MAX_ID_LEN {
            return Err(OrderBookError::IdTooLong { len: raw.len() });
        }
        let mut bytes = [0u8; MAX_ID_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        // Constructed only from valid UTF-8 via `new`/`FromStr`.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

impl PartialEq for SmallId {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.bytes[..self.len as usize] == other.bytes[..other.len as usize]
    }
}

impl Eq for SmallId {}

impl Hash for SmallId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes[..self.len as usize].hash(state);
    }
}

impl fmt::Debug for SmallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for SmallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SmallId {
    type Err = OrderBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for SmallId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for SmallId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SmallId::new(&s).map_err(serde::de::Error::custom)
    }
}

/// An order id: the value key under which a resting order is found.
pub type OrderId = SmallId;
/// An opaque identifier for the owner of an order.
pub type UserId = SmallId;
/// A unique-within-process identifier for an executed trade.
pub type TradeId = SmallId;

/// The side of an order: buy (bid) or sell (ask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    /// A buy order, resting on (or matching against) the bid side.
    Buy,
    /// A sell order, resting on (or matching against) the ask side.
    Sell,
}

impl Side {
    /// Returns the opposite side.
    ///
    /// ```
    /// use limit_order_book::Side;
    /// assert_eq!(Side::Buy.opposite(), Side::Sell);
    /// assert_eq!(Side::Sell.opposite(), Side::Buy);
    /// ```
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}
