//! Accounts domain: subaccount balances, transfers, order states, portfolio
//! and trading rewards.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;

/// A subaccount's deposit in one denom, in chain units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balance {
    pub subaccount_id: String,
    pub denom: String,
    pub total: Decimal,
    pub available: Decimal,
}

impl Balance {
    /// Funds held by open orders.
    pub fn locked(&self) -> Decimal {
        self.total - self.available
    }
}
