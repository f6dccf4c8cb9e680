//! Auction sub-client.

use super::convert::auction_request;
use super::wire::{
    self, AuctionResponse, AuctionsRequest, AuctionsResponse, StreamBidsRequest,
    StreamBidsResponse,
};
use crate::client::InjectiveClient;
use crate::error::SdkError;
use crate::grpc::RpcStream;

pub struct Auctions<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Auctions<'a> {
    /// One auction round with its bids.
    pub async fn get_auction(&self, round: i64) -> Result<AuctionResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::AUCTION_ENDPOINT, auction_request(round))
            .await
    }

    pub async fn get_auctions(&self) -> Result<AuctionsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::AUCTIONS, AuctionsRequest {})
            .await
    }

    /// New bids across all rounds as they arrive.
    pub async fn stream_bids(&self) -> Result<RpcStream<StreamBidsResponse>, SdkError> {
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_BIDS, StreamBidsRequest {})
            .await
    }
}
