//! Static denomination metadata: market tick sizes and peggy token decimals.
//!
//! One table per environment, embedded at compile time and parsed on first use.

use crate::error::DenomError;
use crate::network::Environment;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref DEVNET: Result<DenomTable, DenomError> =
        DenomTable::parse(include_str!("../data/denoms_devnet.toml"));
    static ref TESTNET: Result<DenomTable, DenomError> =
        DenomTable::parse(include_str!("../data/denoms_testnet.toml"));
    static ref MAINNET: Result<DenomTable, DenomError> =
        DenomTable::parse(include_str!("../data/denoms_mainnet.toml"));
}

/// Market metadata: exponents and minimum tick sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denom {
    pub description: String,
    /// Base asset decimals.
    pub base: u32,
    /// Quote asset decimals.
    pub quote: u32,
    pub min_price_tick_size: Decimal,
    pub min_quantity_tick_size: Decimal,
}

/// A bridged (peggy) token denomination and its decimal count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeggyDenom {
    pub denom: String,
    pub decimals: u32,
}

impl Denom {
    /// Look up a market by id.
    ///
    /// Devnet and testnet use their own tables; mainnet and local both
    /// resolve against the mainnet table.
    pub fn load_market(env: Environment, market_id: &str) -> Result<Denom, DenomError> {
        let (name, table) = match env {
            Environment::Devnet => ("devnet", &*DEVNET),
            Environment::Testnet => ("testnet", &*TESTNET),
            Environment::Mainnet | Environment::Local => ("mainnet", &*MAINNET),
        };
        table.as_ref().map_err(Clone::clone)?.market(name, market_id)
    }

    /// Look up a peggy denomination by token symbol.
    ///
    /// Local deployments share the devnet table.
    pub fn load_peggy_denom(env: Environment, symbol: &str) -> Result<PeggyDenom, DenomError> {
        let (name, table) = match env {
            Environment::Devnet | Environment::Local => ("devnet", &*DEVNET),
            Environment::Testnet => ("testnet", &*TESTNET),
            Environment::Mainnet => ("mainnet", &*MAINNET),
        };
        table.as_ref().map_err(Clone::clone)?.peggy_denom(name, symbol)
    }
}

/// Raw section as written in the TOML file. Market sections and token
/// sections share one namespace, so every field is optional here.
#[derive(Debug, Clone, Default, Deserialize)]
struct Section {
    description: Option<String>,
    base: Option<u32>,
    quote: Option<u32>,
    min_price_tick_size: Option<Decimal>,
    min_quantity_tick_size: Option<Decimal>,
    peggy_denom: Option<String>,
    decimals: Option<u32>,
}

/// A parsed denomination table (one environment).
#[derive(Debug, Clone, Default)]
pub struct DenomTable {
    sections: HashMap<String, Section>,
}

impl DenomTable {
    /// Parse a table from TOML text. Each top-level table is one section.
    pub fn parse(source: &str) -> Result<Self, DenomError> {
        let sections: HashMap<String, Section> =
            toml::from_str(source).map_err(|e| DenomError::Parse(e.to_string()))?;
        Ok(Self { sections })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Market metadata for `market_id`. `env` only labels errors.
    pub fn market(&self, env: &str, market_id: &str) -> Result<Denom, DenomError> {
        let section = self.section(env, market_id)?;
        Ok(Denom {
            description: required(market_id, "description", section.description.clone())?,
            base: required(market_id, "base", section.base)?,
            quote: required(market_id, "quote", section.quote)?,
            min_price_tick_size: required(
                market_id,
                "min_price_tick_size",
                section.min_price_tick_size,
            )?,
            min_quantity_tick_size: required(
                market_id,
                "min_quantity_tick_size",
                section.min_quantity_tick_size,
            )?,
        })
    }

    /// Peggy denomination for `symbol`. `env` only labels errors.
    pub fn peggy_denom(&self, env: &str, symbol: &str) -> Result<PeggyDenom, DenomError> {
        let section = self.section(env, symbol)?;
        Ok(PeggyDenom {
            denom: required(symbol, "peggy_denom", section.peggy_denom.clone())?,
            decimals: required(symbol, "decimals", section.decimals)?,
        })
    }

    fn section(&self, env: &str, key: &str) -> Result<&Section, DenomError> {
        self.sections.get(key).ok_or_else(|| DenomError::UnknownKey {
            env: env.to_string(),
            key: key.to_string(),
        })
    }
}

fn required<T>(key: &str, field: &'static str, value: Option<T>) -> Result<T, DenomError> {
    value.ok_or_else(|| DenomError::MissingField {
        key: key.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const INJ_USDT: &str = "0xa508cb32923323679f29a032c70342c147c17d0145625922b0ef22e955c844c0";

    #[test]
    fn test_embedded_tables_parse() {
        for table in [&*DEVNET, &*TESTNET, &*MAINNET] {
            let table = table.as_ref().expect("embedded table should parse");
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn test_mainnet_market_matches_section() {
        let denom = Denom::load_market(Environment::Mainnet, INJ_USDT).unwrap();
        assert_eq!(denom.description, "Mainnet Spot INJ/USDT");
        assert_eq!(denom.base, 18);
        assert_eq!(denom.quote, 6);
        assert_eq!(
            denom.min_price_tick_size,
            Decimal::from_str("0.000000000000001").unwrap()
        );
        assert_eq!(
            denom.min_quantity_tick_size,
            Decimal::from_str("1000000000000000").unwrap()
        );
    }

    #[test]
    fn test_local_markets_resolve_against_mainnet() {
        let local = Denom::load_market(Environment::Local, INJ_USDT).unwrap();
        let mainnet = Denom::load_market(Environment::Mainnet, INJ_USDT).unwrap();
        assert_eq!(local, mainnet);
    }

    #[test]
    fn test_unknown_market_is_key_error() {
        let err = Denom::load_market(Environment::Mainnet, "0xnotamarket").unwrap_err();
        assert_eq!(
            err,
            DenomError::UnknownKey {
                env: "mainnet".into(),
                key: "0xnotamarket".into()
            }
        );
    }

    #[test]
    fn test_peggy_denom_lookup() {
        let usdt = Denom::load_peggy_denom(Environment::Mainnet, "USDT").unwrap();
        assert_eq!(usdt.denom, "peggy0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(usdt.decimals, 6);

        let local = Denom::load_peggy_denom(Environment::Local, "INJ").unwrap();
        let devnet = Denom::load_peggy_denom(Environment::Devnet, "INJ").unwrap();
        assert_eq!(local, devnet);
    }

    #[test]
    fn test_token_section_is_not_a_market() {
        let err = Denom::load_market(Environment::Mainnet, "USDT").unwrap_err();
        assert!(matches!(
            err,
            DenomError::MissingField { field: "description", .. }
        ));
    }

    #[test]
    fn test_custom_table() {
        let table = DenomTable::parse(
            r#"
            [FOO]
            peggy_denom = "factory/foo"
            decimals = 8
            "#,
        )
        .unwrap();
        assert!(table.contains("FOO"));
        assert_eq!(table.peggy_denom("custom", "FOO").unwrap().decimals, 8);
        assert!(DenomTable::parse("not = [valid").is_err());
    }
}
