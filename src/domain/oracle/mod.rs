//! Oracle domain: price feeds.

pub mod client;
pub mod wire;

/// Identifies one price feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OracleFeed {
    pub base_symbol: String,
    pub quote_symbol: String,
    /// e.g. `bandibc`, `coinbase`, `pricefeed`.
    pub oracle_type: String,
}

impl OracleFeed {
    pub fn new(
        base_symbol: impl Into<String>,
        quote_symbol: impl Into<String>,
        oracle_type: impl Into<String>,
    ) -> Self {
        Self {
            base_symbol: base_symbol.into(),
            quote_symbol: quote_symbol.into(),
            oracle_type: oracle_type.into(),
        }
    }

    pub(crate) fn price_request(&self, oracle_scale_factor: u32) -> wire::PriceRequest {
        wire::PriceRequest {
            base_symbol: self.base_symbol.clone(),
            quote_symbol: self.quote_symbol.clone(),
            oracle_type: self.oracle_type.clone(),
            oracle_scale_factor,
        }
    }

    pub(crate) fn stream_request(&self) -> wire::StreamPricesRequest {
        wire::StreamPricesRequest {
            base_symbol: self.base_symbol.clone(),
            quote_symbol: self.quote_symbol.clone(),
            oracle_type: self.oracle_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_carry_feed_fields() {
        let feed = OracleFeed::new("BTC", "USDT", "bandibc");
        let price = feed.price_request(6);
        assert_eq!(price.base_symbol, "BTC");
        assert_eq!(price.quote_symbol, "USDT");
        assert_eq!(price.oracle_type, "bandibc");
        assert_eq!(price.oracle_scale_factor, 6);

        let stream = feed.stream_request();
        assert_eq!(stream.base_symbol, price.base_symbol);
        assert_eq!(stream.oracle_type, price.oracle_type);
    }
}
