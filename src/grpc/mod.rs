//! gRPC transport layer: channel construction, timeout interception, dispatch.
//!
//! Every [`GrpcChannel`] is one lazily-connected, multiplexed HTTP/2 channel
//! wrapped with the [`UnaryTimeout`] interceptor. Calls go through
//! [`GrpcChannel::unary`] or [`GrpcChannel::server_stream`], which tag the
//! request with its [`CallKind`] so that only unary calls receive a deadline.

pub mod interceptor;
pub mod method;

pub use interceptor::{CallKind, UnaryTimeout};
pub use method::{ServerStream, Unary};

use crate::error::SdkError;

use std::time::Duration;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tonic::{Request, Status};

/// Environment variable holding the unary call timeout, in whole seconds.
pub const TIMEOUT_ENV_VAR: &str = "INJ_GRPC_TIMEOUT";

/// Unary call timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// A stream of server-pushed messages. Ends when the server closes it.
pub type RpcStream<T> = tonic::Streaming<T>;

/// Transport configuration shared by both channels of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcConfig {
    /// Deadline applied to every unary call. Streams are never bounded.
    pub timeout: Duration,
    /// Upper bound on establishing the TCP/TLS connection.
    pub connect_timeout: Option<Duration>,
    pub tcp_keepalive: Option<Duration>,
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            tcp_keepalive: None,
        }
    }
}

impl GrpcConfig {
    /// Defaults, with the timeout taken from `INJ_GRPC_TIMEOUT` when set.
    pub fn from_env() -> Result<Self, SdkError> {
        let raw = std::env::var(TIMEOUT_ENV_VAR).ok();
        Ok(Self {
            timeout: parse_timeout(raw.as_deref())?,
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_tcp_keepalive(mut self, interval: Duration) -> Self {
        self.tcp_keepalive = Some(interval);
        self
    }
}

/// Unset or blank means the default; anything else must be whole seconds.
fn parse_timeout(raw: Option<&str>) -> Result<Duration, SdkError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_TIMEOUT),
        Some(value) => value.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            SdkError::Validation(format!(
                "{} must be an integer number of seconds, got {:?}",
                TIMEOUT_ENV_VAR, value
            ))
        }),
    }
}

/// How a channel authenticates the remote.
#[derive(Debug, Clone)]
pub enum ChannelSecurity {
    /// Plaintext HTTP/2.
    Insecure,
    /// TLS with the given config, or the platform trust store when `None`.
    Tls(Option<ClientTlsConfig>),
}

impl Default for ChannelSecurity {
    fn default() -> Self {
        ChannelSecurity::Tls(None)
    }
}

impl ChannelSecurity {
    fn scheme(&self) -> &'static str {
        match self {
            ChannelSecurity::Insecure => "http",
            ChannelSecurity::Tls(_) => "https",
        }
    }
}

/// Turn a `host:port` endpoint into a URI for the given security mode.
/// Endpoints that already carry a scheme are used as-is.
fn endpoint_uri(endpoint: &str, security: &ChannelSecurity) -> String {
    if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("{}://{}", security.scheme(), endpoint)
    }
}

/// One multiplexed channel with the unary timeout interceptor attached.
///
/// Cloning is cheap; clones share the underlying connection and may be used
/// concurrently.
#[derive(Debug, Clone)]
pub struct GrpcChannel {
    endpoint: String,
    inner: InterceptedService<Channel, UnaryTimeout>,
}

impl GrpcChannel {
    /// Open a channel to `endpoint`.
    ///
    /// The connection is established on first use, so this never waits on
    /// the remote. Must be called from within a Tokio runtime.
    pub fn open(
        endpoint: &str,
        security: &ChannelSecurity,
        config: &GrpcConfig,
    ) -> Result<Self, SdkError> {
        let uri = endpoint_uri(endpoint, security);
        let mut builder = Endpoint::from_shared(uri.clone())?.tcp_keepalive(config.tcp_keepalive);
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let ChannelSecurity::Tls(tls) = security {
            let tls = tls
                .clone()
                .unwrap_or_else(|| ClientTlsConfig::new().with_native_roots());
            builder = builder.tls_config(tls)?;
        }

        tracing::debug!(
            endpoint = %uri,
            tls = matches!(security, ChannelSecurity::Tls(_)),
            timeout_ms = config.timeout.as_millis() as u64,
            "Opening gRPC channel"
        );

        let channel = builder.connect_lazy();
        Ok(Self {
            endpoint: uri,
            inner: InterceptedService::new(channel, UnaryTimeout::new(config.timeout)),
        })
    }

    /// The URI this channel connects to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue a unary call. The call is bounded by the channel's timeout.
    pub async fn unary<Req, Resp>(
        &self,
        method: &Unary<Req, Resp>,
        message: Req,
    ) -> Result<Resp, SdkError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(method = method.path(), "gRPC unary call");
        let mut grpc = self.ready().await?;
        let response = grpc
            .unary(
                tagged(message, CallKind::Unary),
                PathAndQuery::from_static(method.path()),
                ProstCodec::default(),
            )
            .await?;
        Ok(response.into_inner())
    }

    /// Open a server stream. No deadline is applied; the stream lives until
    /// the server closes it or the caller drops it.
    pub async fn server_stream<Req, Resp>(
        &self,
        method: &ServerStream<Req, Resp>,
        message: Req,
    ) -> Result<RpcStream<Resp>, SdkError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        tracing::debug!(method = method.path(), "gRPC stream opened");
        let mut grpc = self.ready().await?;
        let response = grpc
            .server_streaming(
                tagged(message, CallKind::ServerStreaming),
                PathAndQuery::from_static(method.path()),
                ProstCodec::default(),
            )
            .await?;
        Ok(response.into_inner())
    }

    async fn ready(
        &self,
    ) -> Result<tonic::client::Grpc<InterceptedService<Channel, UnaryTimeout>>, Status> {
        let mut grpc = tonic::client::Grpc::new(self.inner.clone());
        grpc.ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {}", e)))?;
        Ok(grpc)
    }
}

fn tagged<T>(message: T, kind: CallKind) -> Request<T> {
    let mut request = Request::new(message);
    request.extensions_mut().insert(kind);
    request
}
