//! Optional filters for exchange queries.
//!
//! Every field is optional. Unset fields are sent as the proto3 default,
//! which the exchange treats as "no filter".

use super::{ExecutionSide, Side};

/// Filters for spot and derivative market listings.
///
/// Derivative listings ignore `base_denom`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketsParams {
    pub market_status: Option<String>,
    pub base_denom: Option<String>,
    pub quote_denom: Option<String>,
}

impl MarketsParams {
    pub fn with_market_status(mut self, status: impl Into<String>) -> Self {
        self.market_status = Some(status.into());
        self
    }

    pub fn with_base_denom(mut self, denom: impl Into<String>) -> Self {
        self.base_denom = Some(denom.into());
        self
    }

    pub fn with_quote_denom(mut self, denom: impl Into<String>) -> Self {
        self.quote_denom = Some(denom.into());
        self
    }
}

/// Filters for order queries and order streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrdersParams {
    pub order_side: Option<Side>,
    pub subaccount_id: Option<String>,
}

impl OrdersParams {
    pub fn with_order_side(mut self, side: Side) -> Self {
        self.order_side = Some(side);
        self
    }

    pub fn with_subaccount_id(mut self, subaccount_id: impl Into<String>) -> Self {
        self.subaccount_id = Some(subaccount_id.into());
        self
    }
}

/// Filters and paging for trade queries and trade streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradesParams {
    pub execution_side: Option<ExecutionSide>,
    pub direction: Option<Side>,
    pub subaccount_id: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<i32>,
}

impl TradesParams {
    pub fn with_execution_side(mut self, side: ExecutionSide) -> Self {
        self.execution_side = Some(side);
        self
    }

    pub fn with_direction(mut self, direction: Side) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_subaccount_id(mut self, subaccount_id: impl Into<String>) -> Self {
        self.subaccount_id = Some(subaccount_id.into());
        self
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Filters for a subaccount's trade list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubaccountTradesParams {
    pub market_id: Option<String>,
    /// e.g. `market`, `limitFill`, `limitMatchRestingOrder`.
    pub execution_type: Option<String>,
    pub direction: Option<Side>,
}

impl SubaccountTradesParams {
    pub fn with_market_id(mut self, market_id: impl Into<String>) -> Self {
        self.market_id = Some(market_id.into());
        self
    }

    pub fn with_execution_type(mut self, execution_type: impl Into<String>) -> Self {
        self.execution_type = Some(execution_type.into());
        self
    }

    pub fn with_direction(mut self, direction: Side) -> Self {
        self.direction = Some(direction);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FundingPaymentsParams {
    pub market_id: Option<String>,
    pub skip: Option<u64>,
    pub limit: Option<i32>,
}

impl FundingPaymentsParams {
    pub fn with_market_id(mut self, market_id: impl Into<String>) -> Self {
        self.market_id = Some(market_id.into());
        self
    }

    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubaccountHistoryParams {
    pub denom: Option<String>,
    /// e.g. `deposit`, `withdraw`, `internal`, `external`.
    pub transfer_types: Vec<String>,
}

impl SubaccountHistoryParams {
    pub fn with_denom(mut self, denom: impl Into<String>) -> Self {
        self.denom = Some(denom.into());
        self
    }

    pub fn with_transfer_type(mut self, transfer_type: impl Into<String>) -> Self {
        self.transfer_types.push(transfer_type.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummaryParams {
    pub market_id: Option<String>,
    pub order_direction: Option<Side>,
}

impl OrderSummaryParams {
    pub fn with_market_id(mut self, market_id: impl Into<String>) -> Self {
        self.market_id = Some(market_id.into());
        self
    }

    pub fn with_order_direction(mut self, direction: Side) -> Self {
        self.order_direction = Some(direction);
        self
    }
}

/// Trading reward filters. An unset epoch means the latest one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsParams {
    pub account_address: Option<String>,
    pub epoch: Option<i64>,
}

impl RewardsParams {
    pub fn with_account_address(mut self, address: impl Into<String>) -> Self {
        self.account_address = Some(address.into());
        self
    }

    pub fn with_epoch(mut self, epoch: i64) -> Self {
        self.epoch = Some(epoch);
        self
    }
}

/// Insurance fund redemption filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedemptionsParams {
    pub redeemer: Option<String>,
    pub redemption_denom: Option<String>,
    /// `pending` or `disbursed`.
    pub status: Option<String>,
}

impl RedemptionsParams {
    pub fn with_redeemer(mut self, redeemer: impl Into<String>) -> Self {
        self.redeemer = Some(redeemer.into());
        self
    }

    pub fn with_redemption_denom(mut self, denom: impl Into<String>) -> Self {
        self.redemption_denom = Some(denom.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        assert_eq!(TradesParams::default().limit, None);
        assert!(SubaccountHistoryParams::default().transfer_types.is_empty());
        assert_eq!(MarketsParams::default().market_status, None);
    }

    #[test]
    fn test_setters_chain() {
        let params = TradesParams::default()
            .with_execution_side(ExecutionSide::Maker)
            .with_direction(Side::Sell)
            .with_skip(10)
            .with_limit(50);
        assert_eq!(params.execution_side, Some(ExecutionSide::Maker));
        assert_eq!(params.direction, Some(Side::Sell));
        assert_eq!(params.skip, Some(10));
        assert_eq!(params.limit, Some(50));
        assert_eq!(params.subaccount_id, None);
    }

    #[test]
    fn test_transfer_types_accumulate() {
        let params = SubaccountHistoryParams::default()
            .with_transfer_type("deposit")
            .with_transfer_type("withdraw");
        assert_eq!(params.transfer_types, vec!["deposit", "withdraw"]);
    }
}
