//! Insurance domain: insurance funds and redemption schedules.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{parse_decimal, ScalingError};
use rust_decimal::Decimal;
use wire::InsuranceFund;

impl InsuranceFund {
    /// Deposit-denom value of one pool token. `None` for an empty pool.
    pub fn share_price(&self) -> Result<Option<Decimal>, ScalingError> {
        let balance = parse_decimal(&self.balance)?;
        let total_share = parse_decimal(&self.total_share)?;
        if total_share.is_zero() {
            return Ok(None);
        }
        Ok(balance.checked_div(total_share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_price() {
        let fund = InsuranceFund {
            balance: "1500".to_string(),
            total_share: "1000".to_string(),
            ..Default::default()
        };
        assert_eq!(fund.share_price().unwrap(), Some(Decimal::new(15, 1)));

        let empty = InsuranceFund {
            balance: "0".to_string(),
            total_share: "0".to_string(),
            ..Default::default()
        };
        assert_eq!(empty.share_price().unwrap(), None);
    }
}
