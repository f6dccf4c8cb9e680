//! Wire messages for `injective_auction_rpc.InjectiveAuctionRPC`.

use crate::grpc::method::rpc_table;
use crate::shared::wire::Coin;

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AuctionRequest {
    #[prost(sint64, tag = "1")]
    pub round: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AuctionResponse {
    #[prost(message, optional, tag = "1")]
    pub auction: Option<Auction>,
    #[prost(message, repeated, tag = "2")]
    pub bids: Vec<Bid>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Auction {
    #[prost(string, tag = "1")]
    pub winner: String,
    #[prost(message, repeated, tag = "2")]
    pub basket: Vec<Coin>,
    #[prost(string, tag = "3")]
    pub winning_bid_amount: String,
    #[prost(uint64, tag = "4")]
    pub round: u64,
    #[prost(sint64, tag = "5")]
    pub end_timestamp: i64,
    #[prost(sint64, tag = "6")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Bid {
    #[prost(string, tag = "1")]
    pub bidder: String,
    #[prost(string, tag = "2")]
    pub amount: String,
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AuctionsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AuctionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub auctions: Vec<Auction>,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct StreamBidsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamBidsResponse {
    #[prost(string, tag = "1")]
    pub bidder: String,
    #[prost(string, tag = "2")]
    pub bid_amount: String,
    #[prost(sint64, tag = "3")]
    pub round: i64,
    #[prost(sint64, tag = "4")]
    pub timestamp: i64,
}

rpc_table! {
    service = "injective_auction_rpc.InjectiveAuctionRPC";
    Unary AUCTION_ENDPOINT = "AuctionEndpoint" (AuctionRequest) -> AuctionResponse;
    Unary AUCTIONS = "Auctions" (AuctionsRequest) -> AuctionsResponse;
    ServerStream STREAM_BIDS = "StreamBids" (StreamBidsRequest) -> StreamBidsResponse;
}
