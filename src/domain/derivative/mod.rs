//! Derivative exchange domain: perpetual and expiry futures markets,
//! orders, trades, positions and funding.

pub mod client;
mod convert;
pub mod wire;

use crate::domain::orderbook::OrderbookSnapshot;
use crate::shared::ScalingError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use wire::DerivativeLimitOrderbook;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionDirection {
    Long,
    Short,
}

impl FromStr for PositionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(PositionDirection::Long),
            "short" => Ok(PositionDirection::Short),
            other => Err(format!("Unknown position direction: {}", other)),
        }
    }
}

/// An open derivative position, in chain units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub market_id: String,
    pub subaccount_id: String,
    pub direction: PositionDirection,
    pub quantity: Decimal,
    pub entry_price: Decimal,
    pub margin: Decimal,
    pub mark_price: Option<Decimal>,
    pub liquidation_price: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

impl Position {
    /// Profit at the mark price, or `None` without one.
    pub fn unrealized_pnl(&self) -> Option<Decimal> {
        let mark = self.mark_price?;
        let per_unit = match self.direction {
            PositionDirection::Long => mark - self.entry_price,
            PositionDirection::Short => self.entry_price - mark,
        };
        Some(per_unit * self.quantity)
    }
}

impl DerivativeLimitOrderbook {
    pub fn to_snapshot(&self, market_id: &str) -> Result<OrderbookSnapshot, ScalingError> {
        let mut snapshot = OrderbookSnapshot::new(market_id);
        snapshot.apply(&self.buys, &self.sells)?;
        Ok(snapshot)
    }
}
