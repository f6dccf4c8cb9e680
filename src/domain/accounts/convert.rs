//! Request builders and balance conversion for the accounts service.

use super::wire::{
    OrderStatesRequest, RewardsRequest, SubaccountBalance, SubaccountHistoryRequest,
    SubaccountOrderSummaryRequest,
};
use super::Balance;
use crate::shared::{
    opt_display, opt_string, parse_decimal, OrderSummaryParams, RewardsParams, ScalingError,
    SubaccountHistoryParams,
};

pub(crate) fn history_request(
    subaccount_id: &str,
    params: &SubaccountHistoryParams,
) -> SubaccountHistoryRequest {
    SubaccountHistoryRequest {
        subaccount_id: subaccount_id.to_string(),
        denom: opt_string(&params.denom),
        transfer_types: params.transfer_types.clone(),
        ..Default::default()
    }
}

pub(crate) fn order_summary_request(
    subaccount_id: &str,
    params: &OrderSummaryParams,
) -> SubaccountOrderSummaryRequest {
    SubaccountOrderSummaryRequest {
        subaccount_id: subaccount_id.to_string(),
        market_id: opt_string(&params.market_id),
        order_direction: opt_display(params.order_direction),
    }
}

pub(crate) fn order_states_request(
    spot_order_hashes: &[String],
    derivative_order_hashes: &[String],
) -> OrderStatesRequest {
    OrderStatesRequest {
        spot_order_hashes: spot_order_hashes.to_vec(),
        derivative_order_hashes: derivative_order_hashes.to_vec(),
    }
}

pub(crate) fn rewards_request(params: &RewardsParams) -> RewardsRequest {
    RewardsRequest {
        epoch: params.epoch.unwrap_or_default(),
        account_address: opt_string(&params.account_address),
    }
}

impl TryFrom<&SubaccountBalance> for Balance {
    type Error = ScalingError;

    fn try_from(b: &SubaccountBalance) -> Result<Self, Self::Error> {
        let (total, available) = match &b.deposit {
            Some(d) => (parse_decimal(&d.total_balance)?, parse_decimal(&d.available_balance)?),
            None => Default::default(),
        };
        Ok(Self {
            subaccount_id: b.subaccount_id.clone(),
            denom: b.denom.clone(),
            total,
            available,
        })
    }
}
