//! Auction domain: burn auction rounds and bids.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{parse_decimal, ScalingError};
use rust_decimal::Decimal;
use wire::Bid;

/// The largest bid by amount. Ties keep the earliest bid in `bids`.
pub fn highest_bid(bids: &[Bid]) -> Result<Option<(&Bid, Decimal)>, ScalingError> {
    let mut best: Option<(&Bid, Decimal)> = None;
    for bid in bids {
        let amount = parse_decimal(&bid.amount)?;
        if best.map_or(true, |(_, top)| amount > top) {
            best = Some((bid, amount));
        }
    }
    Ok(best)
}
