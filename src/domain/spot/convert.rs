//! Request builders and conversions for the spot exchange service.

use super::wire::{
    MarketsRequest, OrdersRequest, SpotMarketInfo, StreamOrdersRequest, StreamTradesRequest,
    SubaccountOrdersListRequest, SubaccountTradesListRequest, TradesRequest,
};
use crate::denom::Denom;
use crate::error::SdkError;
use crate::shared::{
    opt_display, opt_string, parse_decimal, MarketsParams, OrdersParams, SubaccountTradesParams,
    TradesParams,
};

pub(crate) fn markets_request(params: &MarketsParams) -> MarketsRequest {
    MarketsRequest {
        market_status: opt_string(&params.market_status),
        base_denom: opt_string(&params.base_denom),
        quote_denom: opt_string(&params.quote_denom),
    }
}

pub(crate) fn orders_request(market_id: &str, params: &OrdersParams) -> OrdersRequest {
    OrdersRequest {
        market_id: market_id.to_string(),
        order_side: opt_display(params.order_side),
        subaccount_id: opt_string(&params.subaccount_id),
    }
}

pub(crate) fn stream_orders_request(market_id: &str, params: &OrdersParams) -> StreamOrdersRequest {
    let OrdersRequest {
        market_id,
        order_side,
        subaccount_id,
    } = orders_request(market_id, params);
    StreamOrdersRequest {
        market_id,
        order_side,
        subaccount_id,
    }
}

pub(crate) fn trades_request(market_id: &str, params: &TradesParams) -> TradesRequest {
    TradesRequest {
        market_id: market_id.to_string(),
        execution_side: opt_display(params.execution_side),
        direction: opt_display(params.direction),
        subaccount_id: opt_string(&params.subaccount_id),
        skip: params.skip.unwrap_or_default(),
        limit: params.limit.unwrap_or_default(),
    }
}

pub(crate) fn stream_trades_request(market_id: &str, params: &TradesParams) -> StreamTradesRequest {
    let TradesRequest {
        market_id,
        execution_side,
        direction,
        subaccount_id,
        skip,
        limit,
    } = trades_request(market_id, params);
    StreamTradesRequest {
        market_id,
        execution_side,
        direction,
        subaccount_id,
        skip,
        limit,
    }
}

pub(crate) fn subaccount_orders_request(
    subaccount_id: &str,
    market_id: Option<&str>,
) -> SubaccountOrdersListRequest {
    SubaccountOrdersListRequest {
        subaccount_id: subaccount_id.to_string(),
        market_id: market_id.unwrap_or_default().to_string(),
    }
}

pub(crate) fn subaccount_trades_request(
    subaccount_id: &str,
    params: &SubaccountTradesParams,
) -> SubaccountTradesListRequest {
    SubaccountTradesListRequest {
        subaccount_id: subaccount_id.to_string(),
        market_id: opt_string(&params.market_id),
        execution_type: opt_string(&params.execution_type),
        direction: opt_display(params.direction),
    }
}

/// Market metadata in the shape of a denom table entry, built from the live
/// market listing. Fails if either side lacks token metadata.
impl TryFrom<&SpotMarketInfo> for Denom {
    type Error = SdkError;

    fn try_from(m: &SpotMarketInfo) -> Result<Self, Self::Error> {
        let decimals = |meta: &Option<super::wire::TokenMeta>, side: &str| {
            meta.as_ref()
                .and_then(|t| u32::try_from(t.decimals).ok())
                .ok_or_else(|| {
                    SdkError::InvalidResponse(format!(
                        "Market {} has no {} token decimals",
                        m.market_id, side
                    ))
                })
        };
        Ok(Denom {
            description: m.ticker.clone(),
            base: decimals(&m.base_token_meta, "base")?,
            quote: decimals(&m.quote_token_meta, "quote")?,
            min_price_tick_size: parse_decimal(&m.min_price_tick_size)?,
            min_quantity_tick_size: parse_decimal(&m.min_quantity_tick_size)?,
        })
    }
}
