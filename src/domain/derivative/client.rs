//! Derivative exchange sub-client.

use super::convert::{
    funding_payments_request, markets_request, orders_request, positions_request,
    stream_orders_request, stream_positions_request, stream_trades_request,
    subaccount_orders_request, subaccount_trades_request, trades_request,
};
use super::wire::{
    self, FundingPaymentsResponse, LiquidablePositionsRequest, LiquidablePositionsResponse,
    MarketRequest, MarketResponse, MarketsResponse, OrderbookRequest, OrderbookResponse,
    OrdersResponse, PositionsResponse, StreamMarketRequest, StreamMarketResponse,
    StreamOrderbookRequest, StreamOrderbookResponse, StreamOrdersResponse,
    StreamPositionsResponse, StreamTradesResponse, SubaccountOrdersListResponse,
    SubaccountTradesListResponse, TradesResponse,
};
use super::Position;
use crate::client::InjectiveClient;
use crate::domain::orderbook::OrderbookSnapshot;
use crate::error::SdkError;
use crate::grpc::RpcStream;
use crate::shared::{
    FundingPaymentsParams, MarketsParams, OrdersParams, SubaccountTradesParams, TradesParams,
};

pub struct Derivatives<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Derivatives<'a> {
    pub async fn get_market(&self, market_id: &str) -> Result<MarketResponse, SdkError> {
        let request = MarketRequest {
            market_id: market_id.to_string(),
        };
        self.client.exchange_channel.unary(&wire::MARKET, request).await
    }

    /// Market listing. Only `market_status` and `quote_denom` apply.
    pub async fn get_markets(&self, params: &MarketsParams) -> Result<MarketsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::MARKETS, markets_request(params))
            .await
    }

    pub async fn stream_markets(&self) -> Result<RpcStream<StreamMarketResponse>, SdkError> {
        let request = StreamMarketRequest {
            market_ids: Vec::new(),
        };
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_MARKET, request)
            .await
    }

    pub async fn get_orderbook(&self, market_id: &str) -> Result<OrderbookResponse, SdkError> {
        let request = OrderbookRequest {
            market_id: market_id.to_string(),
        };
        self.client.exchange_channel.unary(&wire::ORDERBOOK, request).await
    }

    pub async fn orderbook_snapshot(&self, market_id: &str) -> Result<OrderbookSnapshot, SdkError> {
        let response = self.get_orderbook(market_id).await?;
        let Some(book) = response.orderbook else {
            return Ok(OrderbookSnapshot::new(market_id));
        };
        Ok(book.to_snapshot(market_id)?)
    }

    pub async fn get_orders(
        &self,
        market_id: &str,
        params: &OrdersParams,
    ) -> Result<OrdersResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::ORDERS, orders_request(market_id, params))
            .await
    }

    pub async fn get_trades(
        &self,
        market_id: &str,
        params: &TradesParams,
    ) -> Result<TradesResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::TRADES, trades_request(market_id, params))
            .await
    }

    pub async fn stream_orderbook(
        &self,
        market_id: &str,
    ) -> Result<RpcStream<StreamOrderbookResponse>, SdkError> {
        self.stream_orderbooks(&[market_id.to_string()]).await
    }

    pub async fn stream_orderbooks(
        &self,
        market_ids: &[String],
    ) -> Result<RpcStream<StreamOrderbookResponse>, SdkError> {
        let request = StreamOrderbookRequest {
            market_ids: market_ids.to_vec(),
        };
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_ORDERBOOK, request)
            .await
    }

    pub async fn stream_orders(
        &self,
        market_id: &str,
        params: &OrdersParams,
    ) -> Result<RpcStream<StreamOrdersResponse>, SdkError> {
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_ORDERS, stream_orders_request(market_id, params))
            .await
    }

    pub async fn stream_trades(
        &self,
        market_id: &str,
        params: &TradesParams,
    ) -> Result<RpcStream<StreamTradesResponse>, SdkError> {
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_TRADES, stream_trades_request(market_id, params))
            .await
    }

    pub async fn get_positions(
        &self,
        market_id: &str,
        subaccount_id: Option<&str>,
    ) -> Result<PositionsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::POSITIONS, positions_request(market_id, subaccount_id))
            .await
    }

    /// [`Self::get_positions`] converted to [`Position`]s.
    pub async fn positions(
        &self,
        market_id: &str,
        subaccount_id: Option<&str>,
    ) -> Result<Vec<Position>, SdkError> {
        let response = self.get_positions(market_id, subaccount_id).await?;
        response.positions.iter().map(Position::try_from).collect()
    }

    pub async fn stream_positions(
        &self,
        market_id: &str,
        subaccount_id: Option<&str>,
    ) -> Result<RpcStream<StreamPositionsResponse>, SdkError> {
        self.client
            .exchange_channel
            .server_stream(
                &wire::STREAM_POSITIONS,
                stream_positions_request(market_id, subaccount_id),
            )
            .await
    }

    /// Positions below maintenance margin, optionally for one market.
    pub async fn get_liquidable_positions(
        &self,
        market_id: Option<&str>,
    ) -> Result<LiquidablePositionsResponse, SdkError> {
        let request = LiquidablePositionsRequest {
            market_id: market_id.unwrap_or_default().to_string(),
        };
        self.client
            .exchange_channel
            .unary(&wire::LIQUIDABLE_POSITIONS, request)
            .await
    }

    pub async fn get_subaccount_orders(
        &self,
        subaccount_id: &str,
        market_id: Option<&str>,
    ) -> Result<SubaccountOrdersListResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::SUBACCOUNT_ORDERS_LIST,
                subaccount_orders_request(subaccount_id, market_id),
            )
            .await
    }

    pub async fn get_subaccount_trades(
        &self,
        subaccount_id: &str,
        params: &SubaccountTradesParams,
    ) -> Result<SubaccountTradesListResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::SUBACCOUNT_TRADES_LIST,
                subaccount_trades_request(subaccount_id, params),
            )
            .await
    }

    pub async fn get_funding_payments(
        &self,
        subaccount_id: &str,
        params: &FundingPaymentsParams,
    ) -> Result<FundingPaymentsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::FUNDING_PAYMENTS,
                funding_payments_request(subaccount_id, params),
            )
            .await
    }
}
