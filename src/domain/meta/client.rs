//! Meta sub-client.

use super::convert::info_request;
use super::ServerInfo;
use super::wire::{
    self, InfoResponse, PingRequest, PingResponse, StreamKeepaliveRequest,
    StreamKeepaliveResponse, VersionRequest, VersionResponse,
};
use crate::client::InjectiveClient;
use crate::error::SdkError;
use crate::grpc::RpcStream;

pub struct Meta<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Meta<'a> {
    pub async fn ping(&self) -> Result<PingResponse, SdkError> {
        self.client.exchange_channel.unary(&wire::PING, PingRequest {}).await
    }

    pub async fn version(&self) -> Result<VersionResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::VERSION, VersionRequest {})
            .await
    }

    /// Server info. The request carries the current time in milliseconds.
    pub async fn info(&self) -> Result<InfoResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::INFO, info_request(chrono::Utc::now()))
            .await
    }

    /// [`Self::info`] converted to timestamps.
    pub async fn server_info(&self) -> Result<ServerInfo, SdkError> {
        Ok(ServerInfo::from(&self.info().await?))
    }

    /// Keepalive events. The server announces shutdowns and endpoint moves here.
    pub async fn stream_keepalive(&self) -> Result<RpcStream<StreamKeepaliveResponse>, SdkError> {
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_KEEPALIVE, StreamKeepaliveRequest {})
            .await
    }
}
