//! Wire messages for `injective_explorer_rpc.InjectiveExplorerRPC`.

use crate::grpc::method::rpc_table;
use crate::shared::wire::Coin;
use std::collections::HashMap;

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetTxByTxHashRequest {
    #[prost(string, tag = "1")]
    pub hash: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetTxByTxHashResponse {
    #[prost(message, optional, tag = "1")]
    pub data: Option<TxDetailData>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TxDetailData {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(uint64, tag = "2")]
    pub block_number: u64,
    #[prost(string, tag = "3")]
    pub block_timestamp: String,
    #[prost(string, tag = "4")]
    pub hash: String,
    /// Zero on success.
    #[prost(uint32, tag = "5")]
    pub code: u32,
    #[prost(bytes = "vec", tag = "6")]
    pub data: Vec<u8>,
    #[prost(string, tag = "8")]
    pub info: String,
    #[prost(sint64, tag = "9")]
    pub gas_wanted: i64,
    #[prost(sint64, tag = "10")]
    pub gas_used: i64,
    #[prost(message, optional, tag = "11")]
    pub gas_fee: Option<GasFee>,
    #[prost(string, tag = "12")]
    pub codespace: String,
    #[prost(message, repeated, tag = "13")]
    pub events: Vec<Event>,
    #[prost(string, tag = "14")]
    pub tx_type: String,
    /// JSON-encoded message list.
    #[prost(bytes = "vec", tag = "15")]
    pub messages: Vec<u8>,
    #[prost(message, repeated, tag = "16")]
    pub signatures: Vec<Signature>,
    #[prost(string, tag = "17")]
    pub memo: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GasFee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Event {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(map = "string, string", tag = "2")]
    pub attributes: HashMap<String, String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Signature {
    #[prost(string, tag = "1")]
    pub pubkey: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(uint64, tag = "3")]
    pub sequence: u64,
    #[prost(string, tag = "4")]
    pub signature: String,
}

rpc_table! {
    service = "injective_explorer_rpc.InjectiveExplorerRPC";
    Unary GET_TX_BY_TX_HASH = "GetTxByTxHash" (GetTxByTxHashRequest) -> GetTxByTxHashResponse;
}
