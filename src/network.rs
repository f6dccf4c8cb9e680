//! Network descriptors: LCD / gRPC endpoints and chain metadata per environment.

use crate::error::SdkError;
use serde::Serialize;
use std::fmt;

/// Nodes accepted by [`Network::testnet`].
pub const TESTNET_NODES: &[&str] = &["sentry0", "sentry1"];

/// Nodes accepted by [`Network::mainnet`].
pub const MAINNET_NODES: &[&str] = &[
    "sentry0", // us, prod
    "sentry1", // us, prod
    "sentry2", // us, staging
    "sentry3", // tokyo, prod
    "sentry4",
    "sentry.cd", // dedicated github-runner
    "asymm_inner_node",
    "asymm_outer_node",
];

pub const DEFAULT_TESTNET_NODE: &str = "sentry0";
pub const DEFAULT_MAINNET_NODE: &str = "sentry2";

const MAINNET_CHAIN_ID: &str = "injective-1";
const FEE_DENOM: &str = "inj";

/// Environment tag carried by every [`Network`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Devnet,
    Testnet,
    Mainnet,
    Local,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Devnet => "devnet",
            Environment::Testnet => "testnet",
            Environment::Mainnet => "mainnet",
            Environment::Local => "local",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endpoints and chain parameters of one Injective deployment.
///
/// Immutable once built. Use the presets ([`Network::mainnet`],
/// [`Network::testnet`], ...) or [`Network::new`] for a custom deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    lcd_endpoint: String,
    grpc_endpoint: String,
    grpc_exchange_endpoint: String,
    chain_id: String,
    fee_denom: String,
    env: Environment,
}

impl Network {
    /// Build a custom network descriptor. Every field must be non-empty.
    pub fn new(
        lcd_endpoint: impl Into<String>,
        grpc_endpoint: impl Into<String>,
        grpc_exchange_endpoint: impl Into<String>,
        chain_id: impl Into<String>,
        fee_denom: impl Into<String>,
        env: Environment,
    ) -> Result<Self, SdkError> {
        let network = Self {
            lcd_endpoint: lcd_endpoint.into(),
            grpc_endpoint: grpc_endpoint.into(),
            grpc_exchange_endpoint: grpc_exchange_endpoint.into(),
            chain_id: chain_id.into(),
            fee_denom: fee_denom.into(),
            env,
        };

        let fields = [
            ("lcd_endpoint", &network.lcd_endpoint),
            ("grpc_endpoint", &network.grpc_endpoint),
            ("grpc_exchange_endpoint", &network.grpc_exchange_endpoint),
            ("chain_id", &network.chain_id),
            ("fee_denom", &network.fee_denom),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SdkError::Validation(format!("{} must not be empty", name)));
        }

        Ok(network)
    }

    pub fn devnet() -> Self {
        Self::preset(
            "https://devnet.lcd.injective.dev",
            "devnet.injective.dev:9900",
            "devnet.injective.dev:9910",
            "injective-777",
            Environment::Devnet,
        )
    }

    /// Testnet through one of [`TESTNET_NODES`] (default `sentry0`).
    pub fn testnet(node: Option<&str>) -> Result<Self, SdkError> {
        let node = node.unwrap_or(DEFAULT_TESTNET_NODE);
        check_node(node, TESTNET_NODES)?;

        Ok(Self::preset(
            "https://testnet.lcd.injective.dev",
            &format!("{}.injective.dev:9900", node),
            &format!("{}.injective.dev:9910", node),
            "injective-888",
            Environment::Testnet,
        ))
    }

    /// Mainnet through one of [`MAINNET_NODES`] (default `sentry2`).
    ///
    /// `asymm_inner_node` and `asymm_outer_node` are reached by IP address;
    /// every other node resolves under `injective.network`.
    pub fn mainnet(node: Option<&str>) -> Result<Self, SdkError> {
        let node = node.unwrap_or(DEFAULT_MAINNET_NODE);
        check_node(node, MAINNET_NODES)?;
        Ok(Self::mainnet_node(node))
    }

    pub fn local() -> Self {
        Self::preset(
            "localhost:10337",
            "localhost:9900",
            "localhost:9910",
            MAINNET_CHAIN_ID,
            Environment::Local,
        )
    }

    pub fn mainnet_through_self_hosted_node() -> Self {
        Self::direct_ip("172.31.42.171")
    }

    pub fn lcd_endpoint(&self) -> &str {
        &self.lcd_endpoint
    }

    pub fn grpc_endpoint(&self) -> &str {
        &self.grpc_endpoint
    }

    pub fn grpc_exchange_endpoint(&self) -> &str {
        &self.grpc_exchange_endpoint
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn fee_denom(&self) -> &str {
        &self.fee_denom
    }

    pub fn env(&self) -> Environment {
        self.env
    }

    /// The environment tag as a string (`"mainnet"`, `"testnet"`, ...).
    pub fn string(&self) -> &'static str {
        self.env.as_str()
    }

    /// Mainnet preset for a node already known to be in the allow-list.
    pub(crate) fn mainnet_node(node: &str) -> Self {
        match node {
            "asymm_inner_node" => Self::direct_ip("172.31.37.139"),
            "asymm_outer_node" => Self::direct_ip("18.183.209.52"),
            _ => Self::preset(
                "https://lcd.injective.network",
                &format!("{}.injective.network:9900", node),
                &format!("{}.injective.network:9910", node),
                MAINNET_CHAIN_ID,
                Environment::Mainnet,
            ),
        }
    }

    fn direct_ip(ip: &str) -> Self {
        Self::preset(
            &format!("http://{}:10337", ip),
            &format!("{}:9900", ip),
            &format!("{}:9910", ip),
            MAINNET_CHAIN_ID,
            Environment::Mainnet,
        )
    }

    fn preset(
        lcd_endpoint: &str,
        grpc_endpoint: &str,
        grpc_exchange_endpoint: &str,
        chain_id: &str,
        env: Environment,
    ) -> Self {
        Self {
            lcd_endpoint: lcd_endpoint.to_string(),
            grpc_endpoint: grpc_endpoint.to_string(),
            grpc_exchange_endpoint: grpc_exchange_endpoint.to_string(),
            chain_id: chain_id.to_string(),
            fee_denom: FEE_DENOM.to_string(),
            env,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env.as_str())
    }
}

fn check_node(node: &str, allowed: &[&str]) -> Result<(), SdkError> {
    if allowed.contains(&node) {
        Ok(())
    } else {
        Err(SdkError::Validation(format!(
            "Unknown node {:?}. Must be one of {:?}",
            node, allowed
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_default_node() {
        let network = Network::testnet(None).unwrap();
        assert_eq!(network.grpc_endpoint(), "sentry0.injective.dev:9900");
        assert_eq!(network.grpc_exchange_endpoint(), "sentry0.injective.dev:9910");
        assert_eq!(network.chain_id(), "injective-888");
        assert_eq!(network.env(), Environment::Testnet);
    }

    #[test]
    fn test_testnet_rejects_unknown_node() {
        for node in ["sentry2", "sentry.cd", "", "SENTRY0"] {
            let err = Network::testnet(Some(node)).unwrap_err();
            let msg = err.to_string();
            assert!(matches!(err, SdkError::Validation(_)));
            assert!(msg.contains("sentry0") && msg.contains("sentry1"), "{msg}");
        }
    }

    #[test]
    fn test_mainnet_accepts_every_allowed_node() {
        for node in MAINNET_NODES {
            let network = Network::mainnet(Some(node)).unwrap();
            assert_eq!(network.chain_id(), "injective-1");
            assert_eq!(network.fee_denom(), "inj");
            assert_eq!(network.string(), "mainnet");
        }
    }

    #[test]
    fn test_mainnet_rejects_unknown_node() {
        let err = Network::mainnet(Some("sentry9")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sentry9"));
        assert!(msg.contains("asymm_outer_node"));
    }

    #[test]
    fn test_mainnet_default_is_sentry2() {
        let network = Network::mainnet(None).unwrap();
        assert_eq!(network.lcd_endpoint(), "https://lcd.injective.network");
        assert_eq!(network.grpc_endpoint(), "sentry2.injective.network:9900");
        assert_eq!(network.grpc_exchange_endpoint(), "sentry2.injective.network:9910");
    }

    #[test]
    fn test_mainnet_asymm_nodes_use_direct_ips() {
        let inner = Network::mainnet(Some("asymm_inner_node")).unwrap();
        assert_eq!(inner.lcd_endpoint(), "http://172.31.37.139:10337");
        assert_eq!(inner.grpc_endpoint(), "172.31.37.139:9900");
        assert_eq!(inner.grpc_exchange_endpoint(), "172.31.37.139:9910");

        let outer = Network::mainnet(Some("asymm_outer_node")).unwrap();
        assert_eq!(outer.grpc_endpoint(), "18.183.209.52:9900");
        assert_eq!(outer.grpc_exchange_endpoint(), "18.183.209.52:9910");
    }

    #[test]
    fn test_local_and_self_hosted() {
        let local = Network::local();
        assert_eq!(local.grpc_endpoint(), "localhost:9900");
        assert_eq!(local.grpc_exchange_endpoint(), "localhost:9910");
        assert_eq!(local.env(), Environment::Local);

        let hosted = Network::mainnet_through_self_hosted_node();
        assert_eq!(hosted.grpc_endpoint(), "172.31.42.171:9900");
        assert_eq!(hosted.env(), Environment::Mainnet);
    }

    #[test]
    fn test_devnet() {
        let devnet = Network::devnet();
        assert_eq!(devnet.chain_id(), "injective-777");
        assert_eq!(devnet.grpc_exchange_endpoint(), "devnet.injective.dev:9910");
        assert_eq!(devnet.to_string(), "devnet");
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        let err = Network::new("http://lcd", "", "x:9910", "c", "inj", Environment::Local)
            .unwrap_err();
        assert!(err.to_string().contains("grpc_endpoint"));

        let ok = Network::new("http://lcd", "x:9900", "x:9910", "c", "inj", Environment::Local);
        assert!(ok.is_ok());
    }
}
