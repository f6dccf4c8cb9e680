//! Wire messages for `injective_meta_rpc.InjectiveMetaRPC`.

use crate::grpc::method::rpc_table;
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct PingRequest {}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct PingResponse {}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct VersionRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VersionResponse {
    #[prost(string, tag = "1")]
    pub version: String,
    #[prost(map = "string, string", tag = "2")]
    pub build: HashMap<String, String>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct InfoRequest {
    /// Client time in unix milliseconds, echoed back by the server.
    #[prost(uint64, tag = "1")]
    pub timestamp: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct InfoResponse {
    #[prost(uint64, tag = "1")]
    pub timestamp: u64,
    #[prost(uint64, tag = "2")]
    pub server_time: u64,
    #[prost(string, tag = "3")]
    pub version: String,
    #[prost(map = "string, string", tag = "4")]
    pub build: HashMap<String, String>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct StreamKeepaliveRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamKeepaliveResponse {
    /// `shutdown` when the server is going away.
    #[prost(string, tag = "1")]
    pub event: String,
    #[prost(string, tag = "2")]
    pub new_endpoint: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

rpc_table! {
    service = "injective_meta_rpc.InjectiveMetaRPC";
    Unary PING = "Ping" (PingRequest) -> PingResponse;
    Unary VERSION = "Version" (VersionRequest) -> VersionResponse;
    Unary INFO = "Info" (InfoRequest) -> InfoResponse;
    ServerStream STREAM_KEEPALIVE = "StreamKeepalive" (StreamKeepaliveRequest) -> StreamKeepaliveResponse;
}
