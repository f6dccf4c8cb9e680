//! Request builders and position conversion for the derivative exchange.

use super::wire::{
    DerivativePosition, FundingPaymentsRequest, MarketsRequest, OrdersRequest, PositionsRequest,
    StreamOrdersRequest, StreamPositionsRequest, StreamTradesRequest, SubaccountOrdersListRequest,
    SubaccountTradesListRequest, TradesRequest,
};
use super::{Position, PositionDirection};
use crate::error::SdkError;
use crate::shared::{
    datetime_from_millis, opt_display, opt_string, parse_decimal, FundingPaymentsParams,
    MarketsParams, OrdersParams, SubaccountTradesParams, TradesParams,
};

/// Derivative listings filter on status and quote denom only.
pub(crate) fn markets_request(params: &MarketsParams) -> MarketsRequest {
    MarketsRequest {
        market_status: opt_string(&params.market_status),
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
    StreamOrdersRequest {
        market_id: market_id.to_string(),
        order_side: opt_display(params.order_side),
        subaccount_id: opt_string(&params.subaccount_id),
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
    StreamTradesRequest {
        market_id: market_id.to_string(),
        execution_side: opt_display(params.execution_side),
        direction: opt_display(params.direction),
        subaccount_id: opt_string(&params.subaccount_id),
        skip: params.skip.unwrap_or_default(),
        limit: params.limit.unwrap_or_default(),
    }
}

pub(crate) fn positions_request(market_id: &str, subaccount_id: Option<&str>) -> PositionsRequest {
    PositionsRequest {
        market_id: market_id.to_string(),
        subaccount_id: subaccount_id.unwrap_or_default().to_string(),
    }
}

pub(crate) fn stream_positions_request(
    market_id: &str,
    subaccount_id: Option<&str>,
) -> StreamPositionsRequest {
    StreamPositionsRequest {
        market_id: market_id.to_string(),
        subaccount_id: subaccount_id.unwrap_or_default().to_string(),
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

pub(crate) fn funding_payments_request(
    subaccount_id: &str,
    params: &FundingPaymentsParams,
) -> FundingPaymentsRequest {
    FundingPaymentsRequest {
        subaccount_id: subaccount_id.to_string(),
        market_id: opt_string(&params.market_id),
        skip: params.skip.unwrap_or_default(),
        limit: params.limit.unwrap_or_default(),
    }
}

impl TryFrom<&DerivativePosition> for Position {
    type Error = SdkError;

    fn try_from(p: &DerivativePosition) -> Result<Self, Self::Error> {
        let direction = p.direction.parse::<PositionDirection>().map_err(|_| {
            SdkError::InvalidResponse(format!("Unknown position direction: {:?}", p.direction))
        })?;
        let optional = |s: &str| -> Result<_, SdkError> {
            if s.is_empty() {
                Ok(None)
            } else {
                Ok(Some(parse_decimal(s)?))
            }
        };
        Ok(Self {
            market_id: p.market_id.clone(),
            subaccount_id: p.subaccount_id.clone(),
            direction,
            quantity: parse_decimal(&p.quantity)?,
            entry_price: parse_decimal(&p.entry_price)?,
            margin: parse_decimal(&p.margin)?,
            mark_price: optional(&p.mark_price)?,
            liquidation_price: optional(&p.liquidation_price)?,
            updated_at: datetime_from_millis(p.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{ExecutionSide, Side};
    use rust_decimal::Decimal;

    const MARKET: &str = "0x4ca0f92fc28be0c9761326016b5a1a2177dd6375558365116b5bdda9abc229ce";

    #[test]
    fn test_markets_request_ignores_base_denom() {
        let params = MarketsParams::default()
            .with_market_status("active")
            .with_base_denom("inj")
            .with_quote_denom("peggy0xdAC1");
        let req = markets_request(&params);
        assert_eq!(req.market_status, "active");
        assert_eq!(req.quote_denom, "peggy0xdAC1");
    }

    #[test]
    fn test_trade_requests_match() {
        let params = TradesParams::default()
            .with_execution_side(ExecutionSide::Maker)
            .with_subaccount_id("0xsub")
            .with_skip(5);
        let unary = trades_request(MARKET, &params);
        let stream = stream_trades_request(MARKET, &params);
        assert_eq!(unary.execution_side, "maker");
        assert_eq!(unary.direction, "");
        assert_eq!(unary.skip, 5);
        assert_eq!(stream.subaccount_id, unary.subaccount_id);
        assert_eq!(stream.skip, unary.skip);
    }

    #[test]
    fn test_order_requests_match() {
        let params = OrdersParams::default().with_order_side(Side::Sell);
        let unary = orders_request(MARKET, &params);
        let stream = stream_orders_request(MARKET, &params);
        assert_eq!(unary.order_side, "sell");
        assert_eq!(stream.order_side, "sell");
        assert_eq!(stream.subaccount_id, "");
    }

    #[test]
    fn test_position_requests() {
        assert_eq!(positions_request(MARKET, None).subaccount_id, "");
        assert_eq!(
            stream_positions_request(MARKET, Some("0xsub")).subaccount_id,
            "0xsub"
        );
    }

    #[test]
    fn test_funding_payments_request() {
        let req = funding_payments_request(
            "0xsub",
            &FundingPaymentsParams::default().with_market_id(MARKET).with_limit(10),
        );
        assert_eq!(req.market_id, MARKET);
        assert_eq!(req.skip, 0);
        assert_eq!(req.limit, 10);
    }

    fn position(direction: &str, mark_price: &str) -> DerivativePosition {
        DerivativePosition {
            market_id: MARKET.to_string(),
            subaccount_id: "0xsub".to_string(),
            direction: direction.to_string(),
            quantity: "2".to_string(),
            entry_price: "20000".to_string(),
            margin: "8000".to_string(),
            mark_price: mark_price.to_string(),
            updated_at: 1_700_000_000_000,
            ..Default::default()
        }
    }

    #[test]
    fn test_position_conversion() {
        let long = Position::try_from(&position("long", "21000")).unwrap();
        assert_eq!(long.direction, PositionDirection::Long);
        assert_eq!(long.unrealized_pnl(), Some(Decimal::from(2000)));
        assert_eq!(long.liquidation_price, None);

        let short = Position::try_from(&position("short", "21000")).unwrap();
        assert_eq!(short.unrealized_pnl(), Some(Decimal::from(-2000)));

        let unmarked = Position::try_from(&position("long", "")).unwrap();
        assert_eq!(unmarked.unrealized_pnl(), None);
    }

    #[test]
    fn test_unknown_direction_is_invalid_response() {
        assert!(matches!(
            Position::try_from(&position("sideways", "1")),
            Err(SdkError::InvalidResponse(_))
        ));
    }
}
