//! Integration tests for per-call deadlines and channel routing.
//!
//! Each test spins up in-process tonic servers on ephemeral ports that
//! record the path and `grpc-timeout` header of every call they receive,
//! then drives them through a real `InjectiveClient`.
//!
//! Run with:
//! ```bash
//! cargo test --test grpc_timeout
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use cosmos_sdk_proto::cosmos::base::tendermint::v1beta1::{Block, Header};
use futures_util::Stream;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::ProstCodec;
use tonic::codegen::{http, Body, BoxFuture, Service, StdError};
use tonic::server::{Grpc, NamedService, ServerStreamingService, UnaryService};

use injective_sdk::domain::chain::wire::{GetLatestBlockRequest, GetLatestBlockResponse};
use injective_sdk::domain::meta::wire::{
    PingRequest, PingResponse, StreamKeepaliveRequest, StreamKeepaliveResponse, VersionRequest,
    VersionResponse,
};
use injective_sdk::prelude::*;

const PING_PATH: &str = "/injective_meta_rpc.InjectiveMetaRPC/Ping";
const VERSION_PATH: &str = "/injective_meta_rpc.InjectiveMetaRPC/Version";
const KEEPALIVE_PATH: &str = "/injective_meta_rpc.InjectiveMetaRPC/StreamKeepalive";
const LATEST_BLOCK_PATH: &str = "/cosmos.base.tendermint.v1beta1.Service/GetLatestBlock";

/// How long the `Version` handler stalls before answering.
const SLOW_CALL: Duration = Duration::from_secs(3);
const KEEPALIVE_EVENTS: i64 = 3;
const KEEPALIVE_INTERVAL: Duration = Duration::from_millis(700);

// ─── Recording server ────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Call {
    path: String,
    timeout: Option<Duration>,
}

/// Shared call log of one server. `label` doubles as the chain id the
/// server reports.
#[derive(Clone)]
struct Recorder {
    label: &'static str,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn call_to(&self, path: &str) -> Option<Call> {
        self.calls().into_iter().find(|c| c.path == path)
    }
}

/// Parse a `grpc-timeout` header value such as `5000000u`.
fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    let (amount, unit) = value.split_at(value.len().checked_sub(1)?);
    let amount: u64 = amount.parse().ok()?;
    Some(match unit {
        "H" => Duration::from_secs(amount * 3600),
        "M" => Duration::from_secs(amount * 60),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    })
}

struct Ping;

impl UnaryService<PingRequest> for Ping {
    type Response = PingResponse;
    type Future = BoxFuture<tonic::Response<PingResponse>, tonic::Status>;

    fn call(&mut self, _: tonic::Request<PingRequest>) -> Self::Future {
        Box::pin(async { Ok(tonic::Response::new(PingResponse {})) })
    }
}

struct SlowVersion;

impl UnaryService<VersionRequest> for SlowVersion {
    type Response = VersionResponse;
    type Future = BoxFuture<tonic::Response<VersionResponse>, tonic::Status>;

    fn call(&mut self, _: tonic::Request<VersionRequest>) -> Self::Future {
        Box::pin(async {
            tokio::time::sleep(SLOW_CALL).await;
            Ok(tonic::Response::new(VersionResponse {
                version: "v-slow".to_string(),
                ..Default::default()
            }))
        })
    }
}

struct Keepalive;

type KeepaliveStream =
    Pin<Box<dyn Stream<Item = Result<StreamKeepaliveResponse, tonic::Status>> + Send>>;

impl ServerStreamingService<StreamKeepaliveRequest> for Keepalive {
    type Response = StreamKeepaliveResponse;
    type ResponseStream = KeepaliveStream;
    type Future = BoxFuture<tonic::Response<KeepaliveStream>, tonic::Status>;

    fn call(&mut self, _: tonic::Request<StreamKeepaliveRequest>) -> Self::Future {
        let events = futures_util::stream::unfold(0, |n| async move {
            if n == KEEPALIVE_EVENTS {
                return None;
            }
            tokio::time::sleep(KEEPALIVE_INTERVAL).await;
            let event = StreamKeepaliveResponse {
                event: "ping".to_string(),
                timestamp: n,
                ..Default::default()
            };
            Some((Ok(event), n + 1))
        });
        let stream: KeepaliveStream = Box::pin(events);
        Box::pin(async move { Ok(tonic::Response::new(stream)) })
    }
}

struct LatestBlock(&'static str);

impl UnaryService<GetLatestBlockRequest> for LatestBlock {
    type Response = GetLatestBlockResponse;
    type Future = BoxFuture<tonic::Response<GetLatestBlockResponse>, tonic::Status>;

    fn call(&mut self, _: tonic::Request<GetLatestBlockRequest>) -> Self::Future {
        let chain_id = self.0.to_string();
        Box::pin(async move {
            let header = Header {
                chain_id,
                ..Default::default()
            };
            Ok(tonic::Response::new(GetLatestBlockResponse {
                sdk_block: Some(Block {
                    header: Some(header),
                    ..Default::default()
                }),
                ..Default::default()
            }))
        })
    }
}

fn dispatch<B>(
    recorder: &Recorder,
    req: http::Request<B>,
) -> BoxFuture<http::Response<tonic::body::BoxBody>, Infallible>
where
    B: Body + Send + 'static,
    B::Error: Into<StdError> + Send + 'static,
{
    let path = req.uri().path().to_string();
    let timeout = req
        .headers()
        .get("grpc-timeout")
        .and_then(|v| v.to_str().ok())
        .and_then(parse_grpc_timeout);
    recorder.calls.lock().unwrap().push(Call {
        path: path.clone(),
        timeout,
    });

    let label = recorder.label;
    match path.as_str() {
        PING_PATH => Box::pin(async move {
            let mut grpc = Grpc::new(ProstCodec::default());
            Ok(grpc.unary(Ping, req).await)
        }),
        VERSION_PATH => Box::pin(async move {
            let mut grpc = Grpc::new(ProstCodec::default());
            Ok(grpc.unary(SlowVersion, req).await)
        }),
        KEEPALIVE_PATH => Box::pin(async move {
            let mut grpc = Grpc::new(ProstCodec::default());
            Ok(grpc.server_streaming(Keepalive, req).await)
        }),
        LATEST_BLOCK_PATH => Box::pin(async move {
            let mut grpc = Grpc::new(ProstCodec::default());
            Ok(grpc.unary(LatestBlock(label), req).await)
        }),
        _ => Box::pin(async move {
            let mut response = http::Response::new(tonic::body::empty_body());
            let headers = response.headers_mut();
            headers.insert(
                tonic::Status::GRPC_STATUS,
                (tonic::Code::Unimplemented as i32).into(),
            );
            headers.insert(
                http::header::CONTENT_TYPE,
                tonic::metadata::GRPC_CONTENT_TYPE,
            );
            Ok(response)
        }),
    }
}

/// The meta and tendermint services of one recording server.
macro_rules! recording_service {
    ($name:ident, $service:literal) => {
        #[derive(Clone)]
        struct $name(Recorder);

        impl NamedService for $name {
            const NAME: &'static str = $service;
        }

        impl<B> Service<http::Request<B>> for $name
        where
            B: Body + Send + 'static,
            B::Error: Into<StdError> + Send + 'static,
        {
            type Response = http::Response<tonic::body::BoxBody>;
            type Error = Infallible;
            type Future = BoxFuture<Self::Response, Self::Error>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, req: http::Request<B>) -> Self::Future {
                dispatch(&self.0, req)
            }
        }
    };
}

recording_service!(MetaServer, "injective_meta_rpc.InjectiveMetaRPC");
recording_service!(NodeServer, "cosmos.base.tendermint.v1beta1.Service");

async fn spawn_server(label: &'static str) -> (SocketAddr, Recorder) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorder = Recorder::new(label);

    let router = tonic::transport::Server::builder()
        .add_service(MetaServer(recorder.clone()))
        .add_service(NodeServer(recorder.clone()));
    tokio::spawn(router.serve_with_incoming(TcpListenerStream::new(listener)));

    (addr, recorder)
}

fn client_for(chain: SocketAddr, exchange: SocketAddr, timeout: Duration) -> InjectiveClient {
    let network = Network::new(
        "http://localhost:10337",
        chain.to_string(),
        exchange.to_string(),
        "injective-777",
        "inj",
        Environment::Local,
    )
    .unwrap();
    InjectiveClient::builder()
        .network(network)
        .insecure()
        .timeout(timeout)
        .build()
        .unwrap()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unary_calls_carry_configured_timeout() {
    let (addr, server) = spawn_server("injective-local").await;
    let client = client_for(addr, addr, Duration::from_secs(5));

    client.meta().ping().await.unwrap();
    client.chain().get_latest_block().await.unwrap();

    let ping = server.call_to(PING_PATH).expect("ping was not received");
    assert_eq!(ping.timeout, Some(Duration::from_secs(5)));
    let block = server
        .call_to(LATEST_BLOCK_PATH)
        .expect("latest block was not received");
    assert_eq!(block.timeout, Some(Duration::from_secs(5)));
}

#[tokio::test]
async fn slow_unary_call_hits_deadline() {
    let (addr, server) = spawn_server("injective-local").await;
    let client = client_for(addr, addr, Duration::from_secs(1));

    let started = Instant::now();
    let err = client.meta().version().await.unwrap_err();
    let elapsed = started.elapsed();

    match err {
        SdkError::Status(status) => assert!(
            matches!(
                status.code(),
                tonic::Code::DeadlineExceeded | tonic::Code::Cancelled
            ),
            "unexpected status: {status:?}"
        ),
        other => panic!("expected a status error, got: {other:?}"),
    }
    assert!(elapsed < SLOW_CALL, "call was not cut short: {elapsed:?}");
    assert_eq!(
        server.call_to(VERSION_PATH).unwrap().timeout,
        Some(Duration::from_secs(1))
    );
}

#[tokio::test]
async fn server_stream_outlives_unary_timeout() {
    let (addr, server) = spawn_server("injective-local").await;
    let client = client_for(addr, addr, Duration::from_secs(1));

    let started = Instant::now();
    let mut stream = client.meta().stream_keepalive().await.unwrap();
    let mut received = Vec::new();
    while let Some(event) = stream.message().await.unwrap() {
        received.push(event.timestamp);
    }

    assert_eq!(received, vec![0, 1, 2]);
    assert!(started.elapsed() > Duration::from_secs(1));
    let call = server.call_to(KEEPALIVE_PATH).unwrap();
    assert_eq!(call.timeout, None, "streams must not carry a deadline");
}

#[tokio::test]
async fn each_stream_call_opens_a_fresh_stream() {
    let (addr, server) = spawn_server("injective-local").await;
    let client = client_for(addr, addr, Duration::from_secs(1));

    let mut first = client.meta().stream_keepalive().await.unwrap();
    let mut second = client.meta().stream_keepalive().await.unwrap();
    assert_eq!(first.message().await.unwrap().unwrap().timestamp, 0);
    assert_eq!(second.message().await.unwrap().unwrap().timestamp, 0);

    let opened = server
        .calls()
        .iter()
        .filter(|c| c.path == KEEPALIVE_PATH)
        .count();
    assert_eq!(opened, 2);
}

#[tokio::test]
async fn exchange_channel_reaches_exchange_endpoint() {
    let (chain_addr, chain) = spawn_server("chain-node").await;
    let (exchange_addr, exchange) = spawn_server("exchange-node").await;
    let client = client_for(chain_addr, exchange_addr, Duration::from_secs(5));

    client.meta().ping().await.unwrap();
    let chain_id = client.chain().get_chain_id().await.unwrap();

    assert_eq!(chain_id, "chain-node");
    assert!(exchange.call_to(PING_PATH).is_some());
    assert!(exchange.call_to(LATEST_BLOCK_PATH).is_none());
    assert!(chain.call_to(PING_PATH).is_none());
    assert!(chain.call_to(LATEST_BLOCK_PATH).is_some());
}

#[tokio::test]
async fn unknown_method_surfaces_as_status() {
    let (addr, _server) = spawn_server("injective-local").await;
    let client = client_for(addr, addr, Duration::from_secs(5));

    // The test server implements only the meta and tendermint services.
    let err = client.auction().get_auctions().await.unwrap_err();
    match err {
        SdkError::Status(status) => assert_eq!(status.code(), tonic::Code::Unimplemented),
        other => panic!("expected a status error, got: {other:?}"),
    }
}
