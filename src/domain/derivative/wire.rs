//! Wire messages for
//! `injective_derivative_exchange_rpc.InjectiveDerivativeExchangeRPC`.

use crate::grpc::method::rpc_table;
pub use crate::shared::wire::{PriceLevel, TokenMeta};

// ─── Markets ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct DerivativeMarketInfo {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub market_status: String,
    #[prost(string, tag = "3")]
    pub ticker: String,
    #[prost(string, tag = "4")]
    pub oracle_base: String,
    #[prost(string, tag = "5")]
    pub oracle_quote: String,
    #[prost(string, tag = "6")]
    pub oracle_type: String,
    #[prost(uint32, tag = "7")]
    pub oracle_scale_factor: u32,
    #[prost(string, tag = "8")]
    pub initial_margin_ratio: String,
    #[prost(string, tag = "9")]
    pub maintenance_margin_ratio: String,
    #[prost(string, tag = "10")]
    pub quote_denom: String,
    #[prost(message, optional, tag = "11")]
    pub quote_token_meta: Option<TokenMeta>,
    #[prost(string, tag = "12")]
    pub maker_fee_rate: String,
    #[prost(string, tag = "13")]
    pub taker_fee_rate: String,
    #[prost(string, tag = "14")]
    pub service_provider_fee: String,
    #[prost(bool, tag = "15")]
    pub is_perpetual: bool,
    #[prost(string, tag = "16")]
    pub min_price_tick_size: String,
    #[prost(string, tag = "17")]
    pub min_quantity_tick_size: String,
    #[prost(message, optional, tag = "18")]
    pub perpetual_market_info: Option<PerpetualMarketInfo>,
    #[prost(message, optional, tag = "19")]
    pub perpetual_market_funding: Option<PerpetualMarketFunding>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PerpetualMarketInfo {
    #[prost(string, tag = "1")]
    pub hourly_funding_rate_cap: String,
    #[prost(string, tag = "2")]
    pub hourly_interest_rate: String,
    #[prost(sint64, tag = "3")]
    pub next_funding_timestamp: i64,
    #[prost(sint64, tag = "4")]
    pub funding_interval: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PerpetualMarketFunding {
    #[prost(string, tag = "1")]
    pub cumulative_funding: String,
    #[prost(string, tag = "2")]
    pub cumulative_price: String,
    #[prost(sint64, tag = "3")]
    pub last_timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketsRequest {
    #[prost(string, tag = "1")]
    pub market_status: String,
    #[prost(string, tag = "2")]
    pub quote_denom: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketsResponse {
    #[prost(message, repeated, tag = "1")]
    pub markets: Vec<DerivativeMarketInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct MarketResponse {
    #[prost(message, optional, tag = "1")]
    pub market: Option<DerivativeMarketInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamMarketRequest {
    #[prost(string, repeated, tag = "1")]
    pub market_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamMarketResponse {
    #[prost(message, optional, tag = "1")]
    pub market: Option<DerivativeMarketInfo>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

// ─── Orderbooks ──────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct DerivativeLimitOrderbook {
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
    pub orderbook: Option<DerivativeLimitOrderbook>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrderbookRequest {
    #[prost(string, repeated, tag = "1")]
    pub market_ids: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamOrderbookResponse {
    #[prost(message, optional, tag = "1")]
    pub orderbook: Option<DerivativeLimitOrderbook>,
    #[prost(string, tag = "2")]
    pub operation_type: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
    #[prost(string, tag = "4")]
    pub market_id: String,
}

// ─── Orders ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct DerivativeLimitOrder {
    #[prost(string, tag = "1")]
    pub order_hash: String,
    #[prost(string, tag = "2")]
    pub order_side: String,
    #[prost(string, tag = "3")]
    pub market_id: String,
    #[prost(string, tag = "4")]
    pub subaccount_id: String,
    #[prost(bool, tag = "5")]
    pub is_reduce_only: bool,
    #[prost(string, tag = "6")]
    pub margin: String,
    #[prost(string, tag = "7")]
    pub price: String,
    #[prost(string, tag = "8")]
    pub quantity: String,
    #[prost(string, tag = "9")]
    pub unfilled_quantity: String,
    #[prost(string, tag = "10")]
    pub trigger_price: String,
    #[prost(string, tag = "11")]
    pub fee_recipient: String,
    #[prost(string, tag = "12")]
    pub state: String,
    #[prost(sint64, tag = "13")]
    pub created_at: i64,
    #[prost(sint64, tag = "14")]
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
    pub orders: Vec<DerivativeLimitOrder>,
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
    pub order: Option<DerivativeLimitOrder>,
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
    pub orders: Vec<DerivativeLimitOrder>,
}

// ─── Trades ──────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct PositionDelta {
    #[prost(string, tag = "1")]
    pub trade_direction: String,
    #[prost(string, tag = "2")]
    pub execution_price: String,
    #[prost(string, tag = "3")]
    pub execution_quantity: String,
    #[prost(string, tag = "4")]
    pub execution_margin: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DerivativeTrade {
    #[prost(string, tag = "1")]
    pub order_hash: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
    #[prost(string, tag = "3")]
    pub market_id: String,
    #[prost(string, tag = "4")]
    pub trade_execution_type: String,
    #[prost(bool, tag = "5")]
    pub is_liquidation: bool,
    #[prost(message, optional, tag = "6")]
    pub position_delta: Option<PositionDelta>,
    #[prost(string, tag = "7")]
    pub payout: String,
    #[prost(string, tag = "8")]
    pub fee: String,
    #[prost(sint64, tag = "9")]
    pub executed_at: i64,
    #[prost(string, tag = "10")]
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
    pub trades: Vec<DerivativeTrade>,
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
    pub trade: Option<DerivativeTrade>,
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
    pub trades: Vec<DerivativeTrade>,
}

// ─── Positions ───────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct DerivativePosition {
    #[prost(string, tag = "1")]
    pub ticker: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
    #[prost(string, tag = "3")]
    pub subaccount_id: String,
    /// `long` or `short`.
    #[prost(string, tag = "4")]
    pub direction: String,
    #[prost(string, tag = "5")]
    pub quantity: String,
    #[prost(string, tag = "6")]
    pub entry_price: String,
    #[prost(string, tag = "7")]
    pub margin: String,
    #[prost(string, tag = "8")]
    pub liquidation_price: String,
    #[prost(string, tag = "9")]
    pub mark_price: String,
    #[prost(string, tag = "10")]
    pub aggregate_reduce_only_quantity: String,
    #[prost(sint64, tag = "11")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PositionsRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PositionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub positions: Vec<DerivativePosition>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamPositionsRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamPositionsResponse {
    #[prost(message, optional, tag = "1")]
    pub position: Option<DerivativePosition>,
    #[prost(sint64, tag = "2")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LiquidablePositionsRequest {
    #[prost(string, tag = "1")]
    pub market_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LiquidablePositionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub positions: Vec<DerivativePosition>,
}

// ─── Funding ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, prost::Message)]
pub struct FundingPayment {
    #[prost(string, tag = "1")]
    pub market_id: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
    /// Signed; negative when the subaccount paid.
    #[prost(string, tag = "3")]
    pub amount: String,
    #[prost(sint64, tag = "4")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FundingPaymentsRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
    #[prost(uint64, tag = "3")]
    pub skip: u64,
    #[prost(sint32, tag = "4")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FundingPaymentsResponse {
    #[prost(message, repeated, tag = "1")]
    pub payments: Vec<FundingPayment>,
}

rpc_table! {
    service = "injective_derivative_exchange_rpc.InjectiveDerivativeExchangeRPC";
    Unary MARKETS = "Markets" (MarketsRequest) -> MarketsResponse;
    Unary MARKET = "Market" (MarketRequest) -> MarketResponse;
    ServerStream STREAM_MARKET = "StreamMarket" (StreamMarketRequest) -> StreamMarketResponse;
    Unary ORDERBOOK = "Orderbook" (OrderbookRequest) -> OrderbookResponse;
    ServerStream STREAM_ORDERBOOK = "StreamOrderbook" (StreamOrderbookRequest) -> StreamOrderbookResponse;
    Unary ORDERS = "Orders" (OrdersRequest) -> OrdersResponse;
    ServerStream STREAM_ORDERS = "StreamOrders" (StreamOrdersRequest) -> StreamOrdersResponse;
    Unary TRADES = "Trades" (TradesRequest) -> TradesResponse;
    ServerStream STREAM_TRADES = "StreamTrades" (StreamTradesRequest) -> StreamTradesResponse;
    Unary POSITIONS = "Positions" (PositionsRequest) -> PositionsResponse;
    ServerStream STREAM_POSITIONS = "StreamPositions" (StreamPositionsRequest) -> StreamPositionsResponse;
    Unary LIQUIDABLE_POSITIONS = "LiquidablePositions" (LiquidablePositionsRequest) -> LiquidablePositionsResponse;
    Unary SUBACCOUNT_ORDERS_LIST = "SubaccountOrdersList" (SubaccountOrdersListRequest) -> SubaccountOrdersListResponse;
    Unary SUBACCOUNT_TRADES_LIST = "SubaccountTradesList" (SubaccountTradesListRequest) -> SubaccountTradesListResponse;
    Unary FUNDING_PAYMENTS = "FundingPayments" (FundingPaymentsRequest) -> FundingPaymentsResponse;
}
