//! Orderbook state container shared by spot and derivative markets.

use crate::shared::wire::PriceLevel;
use crate::shared::{datetime_from_millis, parse_decimal, ScalingError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Price-indexed orderbook for one market, in chain units.
///
/// The exchange sends the full book on every query and stream message, so
/// each [`apply`](Self::apply) replaces what was there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderbookSnapshot {
    pub market_id: String,
    /// Time of the most recent level in the last applied book.
    pub updated_at: Option<DateTime<Utc>>,
    bids: BTreeMap<Decimal, Decimal>,
    asks: BTreeMap<Decimal, Decimal>,
}

impl OrderbookSnapshot {
    pub fn new(market_id: impl Into<String>) -> Self {
        Self {
            market_id: market_id.into(),
            ..Default::default()
        }
    }

    /// Replace the book with `buys` and `sells`. Zero-quantity levels are
    /// dropped and repeated prices are summed. On error the book is unchanged.
    pub fn apply(&mut self, buys: &[PriceLevel], sells: &[PriceLevel]) -> Result<(), ScalingError> {
        let bids = collect_levels(buys)?;
        let asks = collect_levels(sells)?;
        self.updated_at = buys
            .iter()
            .chain(sells)
            .map(|level| level.timestamp)
            .max()
            .map(datetime_from_millis);
        self.bids = bids;
        self.asks = asks;
        Ok(())
    }

    /// Bids keyed by price; iterate in reverse for best-first.
    pub fn bids(&self) -> &BTreeMap<Decimal, Decimal> {
        &self.bids
    }

    /// Asks keyed by price, best first.
    pub fn asks(&self) -> &BTreeMap<Decimal, Decimal> {
        &self.asks
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next_back().copied()
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }

    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.updated_at = None;
    }
}

fn collect_levels(levels: &[PriceLevel]) -> Result<BTreeMap<Decimal, Decimal>, ScalingError> {
    let mut book = BTreeMap::new();
    for level in levels {
        let price = parse_decimal(&level.price)?;
        let quantity = parse_decimal(&level.quantity)?;
        if quantity.is_zero() {
            continue;
        }
        *book.entry(price).or_insert(Decimal::ZERO) += quantity;
    }
    Ok(book)
}
