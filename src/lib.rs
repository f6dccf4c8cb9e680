//! # Injective SDK
//!
//! A Rust client for the Injective chain node and exchange indexer gRPC APIs.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: shared types, request params, network presets, denomination tables
//! 2. **Transport**: `GrpcChannel` over `tonic`, with a deadline on unary calls only
//! 3. **Domains**: one vertical slice per remote service (wire messages, builders, sub-client)
//! 4. **High-Level Client**: `InjectiveClient` holding the chain and exchange channels
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use injective_sdk::prelude::*;
//!
//! let client = InjectiveClient::builder()
//!     .network(Network::testnet(None)?)
//!     .build()?;
//!
//! let chain_id = client.chain().get_chain_id().await?;
//! let markets = client.spot().get_markets(&MarketsParams::default()).await?;
//! let mut trades = client
//!     .derivatives()
//!     .stream_trades(market_id, &TradesParams::default())
//!     .await?;
//! while let Some(update) = trades.message().await? {
//!     println!("{:?}", update.trade);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared enums, request params, scaling and common wire messages.
pub mod shared;

/// Unified SDK error types.
pub mod error;

/// Network presets and endpoint descriptors.
pub mod network;

/// Static market and peggy denomination metadata.
pub mod denom;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// gRPC channels, the unary timeout interceptor and call dispatch.
pub mod grpc;

// ── Layer 3: Domains ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire messages, conversions, sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `InjectiveClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums and request params
    pub use crate::shared::{
        ExecutionSide, FundingPaymentsParams, MarketsParams, OrderSummaryParams, OrdersParams,
        RedemptionsParams, RewardsParams, Side, SubaccountHistoryParams, SubaccountTradesParams,
        TradesParams,
    };

    // Domain types
    pub use crate::domain::accounts::Balance;
    pub use crate::domain::chain::AccountLookup;
    pub use crate::domain::derivative::{Position, PositionDirection};
    pub use crate::domain::meta::ServerInfo;
    pub use crate::domain::oracle::OracleFeed;
    pub use crate::domain::orderbook::OrderbookSnapshot;

    // Errors
    pub use crate::error::{DenomError, ScalingError, SdkError, SdkResult};

    // Network + denominations
    pub use crate::denom::{Denom, DenomTable, PeggyDenom};
    pub use crate::network::{Environment, Network};

    // Transport
    pub use crate::grpc::{ChannelSecurity, GrpcConfig, RpcStream};

    // Client + sub-clients
    pub use crate::client::{
        AccountsClient, AuctionsClient, ChainClient, DerivativesClient, ExplorerClient,
        InjectiveClient, InjectiveClientBuilder, InsuranceClient, MetaClient, OracleClient,
        SpotClient,
    };
}
