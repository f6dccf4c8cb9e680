//! Spot exchange domain: markets, orderbooks, orders and trades.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::orderbook::OrderbookSnapshot;
use crate::shared::ScalingError;
use wire::SpotLimitOrderbook;

impl SpotLimitOrderbook {
    /// This book as local state for `market_id`.
    pub fn to_snapshot(&self, market_id: &str) -> Result<OrderbookSnapshot, ScalingError> {
        let mut snapshot = OrderbookSnapshot::new(market_id);
        snapshot.apply(&self.buys, &self.sells)?;
        Ok(snapshot)
    }
}
