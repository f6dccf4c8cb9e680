//! Wire messages for `injective_oracle_rpc.InjectiveOracleRPC`.

use crate::grpc::method::rpc_table;

#[derive(Clone, PartialEq, prost::Message)]
pub struct OracleListRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OracleListResponse {
    #[prost(message, repeated, tag = "1")]
    pub oracles: Vec<Oracle>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Oracle {
    #[prost(string, tag = "1")]
    pub symbol: String,
    #[prost(string, tag = "2")]
    pub base_symbol: String,
    #[prost(string, tag = "3")]
    pub quote_symbol: String,
    #[prost(string, tag = "4")]
    pub oracle_type: String,
    #[prost(string, tag = "5")]
    pub price: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PriceRequest {
    #[prost(string, tag = "1")]
    pub base_symbol: String,
    #[prost(string, tag = "2")]
    pub quote_symbol: String,
    #[prost(string, tag = "3")]
    pub oracle_type: String,
    #[prost(uint32, tag = "4")]
    pub oracle_scale_factor: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PriceResponse {
    #[prost(string, tag = "1")]
    pub price: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamPricesRequest {
    #[prost(string, tag = "1")]
    pub base_symbol: String,
    #[prost(string, tag = "2")]
    pub quote_symbol: String,
    #[prost(string, tag = "3")]
    pub oracle_type: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamPricesResponse {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(sint64, tag = "2")]
    pub timestamp: i64,
}

rpc_table! {
    service = "injective_oracle_rpc.InjectiveOracleRPC";
    Unary ORACLE_LIST = "OracleList" (OracleListRequest) -> OracleListResponse;
    Unary PRICE = "Price" (PriceRequest) -> PriceResponse;
    ServerStream STREAM_PRICES = "StreamPrices" (StreamPricesRequest) -> StreamPricesResponse;
}
