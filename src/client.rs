//! High-level client: `InjectiveClient` with nested sub-client accessors.
//!
//! Each remote service has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the two channels, and the accessor methods.

use crate::domain::accounts::client::Accounts;
use crate::domain::auction::client::Auctions;
use crate::domain::chain::client::Chain;
use crate::domain::derivative::client::Derivatives;
use crate::domain::explorer::client::Explorer;
use crate::domain::insurance::client::Insurance;
use crate::domain::meta::client::Meta;
use crate::domain::oracle::client::Oracle;
use crate::domain::spot::client::Spot;
use crate::error::SdkError;
use crate::grpc::{ChannelSecurity, GrpcChannel, GrpcConfig};
use crate::network::{Network, DEFAULT_MAINNET_NODE};

use std::time::Duration;
use tonic::transport::ClientTlsConfig;

// Re-export sub-client types for convenience.
pub use crate::domain::accounts::client::Accounts as AccountsClient;
pub use crate::domain::auction::client::Auctions as AuctionsClient;
pub use crate::domain::chain::client::Chain as ChainClient;
pub use crate::domain::derivative::client::Derivatives as DerivativesClient;
pub use crate::domain::explorer::client::Explorer as ExplorerClient;
pub use crate::domain::insurance::client::Insurance as InsuranceClient;
pub use crate::domain::meta::client::Meta as MetaClient;
pub use crate::domain::oracle::client::Oracle as OracleClient;
pub use crate::domain::spot::client::Spot as SpotClient;

/// The primary entry point for the SDK.
///
/// Holds one channel to the chain node and one to the exchange indexer and
/// hands out borrowed sub-clients per service: `client.spot()`,
/// `client.chain()`, etc. Clones share both channels.
#[derive(Debug, Clone)]
pub struct InjectiveClient {
    pub(crate) chain_channel: GrpcChannel,
    pub(crate) exchange_channel: GrpcChannel,
    network: Network,
    grpc_config: GrpcConfig,
}

impl InjectiveClient {
    pub fn builder() -> InjectiveClientBuilder {
        InjectiveClientBuilder::default()
    }

    /// Client for `network` over TLS. The unary timeout comes from
    /// `INJ_GRPC_TIMEOUT`, or 8 seconds when it is unset.
    pub fn new(network: Network) -> Result<Self, SdkError> {
        Self::builder().network(network).build()
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn grpc_config(&self) -> &GrpcConfig {
        &self.grpc_config
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn chain(&self) -> Chain<'_> {
        Chain { client: self }
    }

    pub fn auction(&self) -> Auctions<'_> {
        Auctions { client: self }
    }

    pub fn meta(&self) -> Meta<'_> {
        Meta { client: self }
    }

    pub fn explorer(&self) -> Explorer<'_> {
        Explorer { client: self }
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn oracle(&self) -> Oracle<'_> {
        Oracle { client: self }
    }

    pub fn insurance(&self) -> Insurance<'_> {
        Insurance { client: self }
    }

    pub fn spot(&self) -> Spot<'_> {
        Spot { client: self }
    }

    pub fn derivatives(&self) -> Derivatives<'_> {
        Derivatives { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct InjectiveClientBuilder {
    network: Network,
    security: ChannelSecurity,
    grpc_config: Option<GrpcConfig>,
    timeout: Option<Duration>,
}

impl Default for InjectiveClientBuilder {
    fn default() -> Self {
        Self {
            network: Network::mainnet_node(DEFAULT_MAINNET_NODE),
            security: ChannelSecurity::default(),
            grpc_config: None,
            timeout: None,
        }
    }
}

impl InjectiveClientBuilder {
    pub fn network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Use plaintext HTTP/2 for both channels.
    pub fn insecure(mut self) -> Self {
        self.security = ChannelSecurity::Insecure;
        self
    }

    /// Use TLS with a caller-supplied config instead of the native roots.
    pub fn tls_config(mut self, tls: ClientTlsConfig) -> Self {
        self.security = ChannelSecurity::Tls(Some(tls));
        self
    }

    /// Transport config to use instead of [`GrpcConfig::from_env`].
    pub fn grpc_config(mut self, config: GrpcConfig) -> Self {
        self.grpc_config = Some(config);
        self
    }

    /// Deadline for unary calls. Streams are never bounded. Takes precedence
    /// over both `INJ_GRPC_TIMEOUT` and the timeout of [`Self::grpc_config`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Open both channels. Connections are made lazily on first call, so
    /// this only fails on malformed endpoints, TLS configuration, or an
    /// `INJ_GRPC_TIMEOUT` that is not a whole number of seconds.
    ///
    /// Without an explicit [`Self::grpc_config`] the config is read through
    /// [`GrpcConfig::from_env`].
    pub fn build(self) -> Result<InjectiveClient, SdkError> {
        let mut grpc_config = match self.grpc_config {
            Some(config) => config,
            None => GrpcConfig::from_env()?,
        };
        if let Some(timeout) = self.timeout {
            grpc_config.timeout = timeout;
        }

        let chain_channel =
            GrpcChannel::open(self.network.grpc_endpoint(), &self.security, &grpc_config)?;
        let exchange_channel = GrpcChannel::open(
            self.network.grpc_exchange_endpoint(),
            &self.security,
            &grpc_config,
        )?;

        tracing::info!(
            env = %self.network.env(),
            chain = chain_channel.endpoint(),
            exchange = exchange_channel.endpoint(),
            "Injective client ready"
        );

        Ok(InjectiveClient {
            chain_channel,
            exchange_channel,
            network: self.network,
            grpc_config,
        })
    }
}
