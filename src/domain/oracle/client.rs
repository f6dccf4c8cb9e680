//! Oracle sub-client.

use super::wire::{
    self, OracleListRequest, OracleListResponse, PriceResponse, StreamPricesResponse,
};
use super::OracleFeed;
use crate::client::InjectiveClient;
use crate::error::SdkError;
use crate::grpc::RpcStream;

pub struct Oracle<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Oracle<'a> {
    /// Price updates for one feed.
    pub async fn stream_oracle_prices(
        &self,
        base_symbol: &str,
        quote_symbol: &str,
        oracle_type: &str,
    ) -> Result<RpcStream<StreamPricesResponse>, SdkError> {
        let feed = OracleFeed::new(base_symbol, quote_symbol, oracle_type);
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_PRICES, feed.stream_request())
            .await
    }

    pub async fn get_oracle_prices(
        &self,
        base_symbol: &str,
        quote_symbol: &str,
        oracle_type: &str,
        oracle_scale_factor: u32,
    ) -> Result<PriceResponse, SdkError> {
        let feed = OracleFeed::new(base_symbol, quote_symbol, oracle_type);
        self.client
            .exchange_channel
            .unary(&wire::PRICE, feed.price_request(oracle_scale_factor))
            .await
    }

    pub async fn get_oracle_list(&self) -> Result<OracleListResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::ORACLE_LIST, OracleListRequest {})
            .await
    }
}
