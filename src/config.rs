//! Book-construction configuration.

/// Construction-time configuration for an [`crate::OrderBook`].
///
/// Deliberately narrow: unlike a multi-instrument venue, this book has no
/// tick size, lot size, or fee schedule to configure — `price` is a raw
/// `f64` and matching has no fee or self-trade-prevention concept. The
/// only knob is cosmetic.
#[derive(Debug, Clone, Default)]
pub struct OrderBookConfig {
    /// Instrument symbol, used only in `Debug`/log output.
    pub symbol: Option<String>,
}

impl OrderBookConfig {
    /// The default configuration: no symbol attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration carrying the given symbol.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_symbol() {
        assert_eq!(OrderBookConfig::new().symbol, None);
    }

    #[test]
    fn with_symbol_sets_it() {
        let config = OrderBookConfig::with_symbol("XYZ");
        assert_eq!(config.symbol.as_deref(), Some("XYZ"));
    }
}
