//! Shared enums, request parameters and wire messages used across the
//! exchange domains.
//!
//! The enums serialize to the exact lowercase strings the exchange API
//! expects in its string-typed filter fields.

pub mod params;
pub mod scaling;
pub mod wire;

pub use params::{
    FundingPaymentsParams, MarketsParams, OrderSummaryParams, OrdersParams, RedemptionsParams,
    RewardsParams, SubaccountHistoryParams, SubaccountTradesParams, TradesParams,
};
pub use scaling::{parse_decimal, ScalingError};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Side ────────────────────────────────────────────────────────────────────

/// Order or trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("Unknown side: {}", other)),
        }
    }
}

// ─── ExecutionSide ───────────────────────────────────────────────────────────

/// Whether a fill added (maker) or removed (taker) liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionSide {
    Maker,
    Taker,
}

impl ExecutionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionSide::Maker => "maker",
            ExecutionSide::Taker => "taker",
        }
    }
}

impl std::fmt::Display for ExecutionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maker" => Ok(ExecutionSide::Maker),
            "taker" => Ok(ExecutionSide::Taker),
            other => Err(format!("Unknown execution side: {}", other)),
        }
    }
}

/// Unix milliseconds to UTC. Out-of-range values map to the epoch.
pub(crate) fn datetime_from_millis(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// Wire form of an optional string filter: unset becomes the empty string.
pub(crate) fn opt_string(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Wire form of an optional enum filter.
pub(crate) fn opt_display<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_strings() {
        assert_eq!(Side::Buy.as_str(), "buy");
        assert_eq!(Side::Sell.to_string(), "sell");
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert!("bid".parse::<Side>().is_err());
    }

    #[test]
    fn test_execution_side_strings() {
        assert_eq!(ExecutionSide::Maker.as_str(), "maker");
        assert_eq!("taker".parse::<ExecutionSide>().unwrap(), ExecutionSide::Taker);
        assert!("both".parse::<ExecutionSide>().is_err());
    }

    #[test]
    fn test_optional_filters() {
        assert_eq!(opt_string(&None), "");
        assert_eq!(opt_string(&Some("inj".into())), "inj");
        assert_eq!(opt_display(Some(Side::Buy)), "buy");
        assert_eq!(opt_display(None::<ExecutionSide>), "");
    }

    #[test]
    fn test_datetime_from_millis() {
        assert_eq!(datetime_from_millis(1_000).timestamp(), 1);
        assert_eq!(datetime_from_millis(i64::MAX), DateTime::<Utc>::default());
    }

    #[test]
    fn test_serde_is_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Filter {
            side: Side,
            execution: ExecutionSide,
        }
        let text = toml::to_string(&Filter {
            side: Side::Buy,
            execution: ExecutionSide::Taker,
        })
        .unwrap();
        assert!(text.contains("side = \"buy\""));
        assert!(text.contains("execution = \"taker\""));

        let back: Filter = toml::from_str(&text).unwrap();
        assert_eq!(back.side, Side::Buy);
    }
}
