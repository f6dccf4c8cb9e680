//! Wire messages for `injective_spot_exchange_rpc.InjectiveSpotExchangeRPC`.

use crate::grpc::method::rpc_table;
pub use crate::shared::wire::{PriceLevel, TokenMeta};

// ─── Markets ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct SpotMarketInfo {
    #[prost(string, tag = "1")]
    pub market_id: String,
    /// `active`, `paused`, `suspended`, `demolished` or `expired`.
    #[prost(string, tag = "2")]
    pub market_status: String,
    #[prost(string, tag = "3")]
    pub ticker: String,
    #[prost(string, tag = "4")]
    pub base_denom: String,
    #[prost(message, optional, tag = "5")]
    pub base_token_meta: Option<TokenMeta>,
    #[prost(string, tag = "6")]
    pub quote_denom: String,
    #[prost(message, optional, tag = "7")]
    pub quote_token_meta: Option<TokenMeta>,
    #[prost(string, tag = "8")]
    pub maker_fee_rate: String,
    #[prost(string, tag = "9")]
    pub taker_fee_rate: String,
    #[prost(string, tag = "10")]
    pub service_provider_fee: String,
    #[prost(string, tag = "11")]
    pub min_price_tick_size: String,
    #[prost(string, tag = "12")]
    pub min_quantity_tick_size: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketsRequest {
    #[prost(string, tag = "1")]
    pub market_status: String,
    #[prost(string, tag = "2")]
    pub base_denom: String,
    #[prost(string, tag = "3")]
    pub quote_denom: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketsResponse {
    #[prost(message, repeated, tag = "1")]
    pub markets: Vec<SpotMarketInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketResponse {
    #[prost(message, optional, tag = "1")]
    pub market: Option<SpotMarketInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamMarketsRequest {
    /// Empty means every market.
    #[prost(string, repeated, tag = "1")]
    pub market_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamMarketsResponse {
    #[prost(message, optional, tag = "1")]
    pub market: Option<SpotMarketInfo>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

// ─── Orderbooks ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct SpotLimitOrderbook {
    #[prost(message, repeated, tag = "1")]
    pub buys: Vec<PriceLevel>,
    #[prost(message, repeated, tag = "2")]
    pub sells: Vec<PriceLevel>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderbookRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderbookResponse {
    #[prost(message, optional, tag = "1")]
    pub orderbook: Option<SpotLimitOrderbook>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrderbookRequest {
    #[prost(string, repeated, tag = "1")]
    pub market_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrderbookResponse {
    #[prost(message, optional, tag = "1")]
    pub orderbook: Option<SpotLimitOrderbook>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
    #[prost(string, tag = "4")]
    pub market_id: String,
}

// ─── Orders ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct SpotLimitOrder {
    #[prost(string, tag = "1")]
    pub order_hash: String,
    #[prost(string, tag = "2")]
    pub order_side: String,
    #[prost(string, tag = "3")]
    pub market_id: String,
    #[prost(string, tag = "4")]
    pub subaccount_id: String,
    #[prost(string, tag = "5")]
    pub price: String,
    #[prost(string, tag = "6")]
    pub quantity: String,
    #[prost(string, tag = "7")]
    pub unfilled_quantity: String,
    #[prost(string, tag = "8")]
    pub trigger_price: String,
    #[prost(string, tag = "9")]
    pub fee_recipient: String,
    #[prost(string, tag = "10")]
    pub state: String,
    #[prost(sint64, tag = "11")]
    pub created_at: i64,
    #[prost(sint64, tag = "12")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrdersRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub order_side: String,
    #[prost(string, tag = "3")]
    pub subaccount_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<SpotLimitOrder>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrdersRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub order_side: String,
    #[prost(string, tag = "3")]
    pub subaccount_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrdersResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<SpotLimitOrder>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountOrdersListRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountOrdersListResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<SpotLimitOrder>,
}

// ─── Trades ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct SpotTrade {
    #[prost(string, tag = "1")]
    pub order_hash: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
    #[prost(string, tag = "3")]
    pub market_id: String,
    #[prost(string, tag = "4")]
    pub trade_execution_type: String,
    #[prost(string, tag = "5")]
    pub trade_direction: String,
    #[prost(message, optional, tag = "6")]
    pub price: Option<PriceLevel>,
    #[prost(string, tag = "7")]
    pub fee: String,
    #[prost(sint64, tag = "8")]
    pub executed_at: i64,
    #[prost(string, tag = "9")]
    pub fee_recipient: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TradesRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub execution_side: String,
    #[prost(string, tag = "3")]
    pub direction: String,
    #[prost(string, tag = "4")]
    pub subaccount_id: String,
    #[prost(uint64, tag = "5")]
    pub skip: u64,
    #[prost(sint32, tag = "6")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TradesResponse {
    #[prost(message, repeated, tag = "1")]
    pub trades: Vec<SpotTrade>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamTradesRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub execution_side: String,
    #[prost(string, tag = "3")]
    pub direction: String,
    #[prost(string, tag = "4")]
    pub subaccount_id: String,
    #[prost(uint64, tag = "5")]
    pub skip: u64,
    #[prost(sint32, tag = "6")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamTradesResponse {
    #[prost(message, optional, tag = "1")]
    pub trade: Option<SpotTrade>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountTradesListRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
    #[prost(string, tag = "3")]
    pub execution_type: String,
    #[prost(string, tag = "4")]
    pub direction: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountTradesListResponse {
    #[prost(message, repeated, tag = "1")]
    pub trades: Vec<SpotTrade>,
}

rpc_table! {
    service = "injective_spot_exchange_rpc.InjectiveSpotExchangeRPC";
    Unary MARKETS = "Markets" (MarketsRequest) -> MarketsResponse;
    Unary MARKET = "Market" (MarketRequest) -> MarketResponse;
    ServerStream STREAM_MARKETS = "StreamMarkets" (StreamMarketsRequest) -> StreamMarketsResponse;
    Unary ORDERBOOK = "Orderbook" (OrderbookRequest) -> OrderbookResponse;
    ServerStream STREAM_ORDERBOOK = "StreamOrderbook" (StreamOrderbookRequest) -> StreamOrderbookResponse;
    Unary ORDERS = "Orders" (OrdersRequest) -> OrdersResponse;
    ServerStream STREAM_ORDERS = "StreamOrders" (StreamOrdersRequest) -> StreamOrdersResponse;
    Unary TRADES = "Trades" (TradesRequest) -> TradesResponse;
    ServerStream STREAM_TRADES = "StreamTrades" (StreamTradesRequest) -> StreamTradesResponse;
    Unary SUBACCOUNT_ORDERS_LIST = "SubaccountOrdersList" (SubaccountOrdersListRequest) -> SubaccountOrdersListResponse;
    Unary SUBACCOUNT_TRADES_LIST = "SubaccountTradesList" (SubaccountTradesListRequest) -> SubaccountTradesListResponse;
}
