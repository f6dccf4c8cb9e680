//! Wire messages that appear in more than one exchange service.
//!
//! Each service package declares its own copy upstream; the encodings are
//! identical so one Rust type serves them all.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    /// Integer amount in the denom's smallest unit, as a decimal string.
    #[prost(string, tag = "2")]
    pub amount: String,
}

/// Token metadata attached to markets.
#[derive(Clone, PartialEq, prost::Message)]
pub struct TokenMeta {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub address: String,
    #[prost(string, tag = "3")]
    pub symbol: String,
    #[prost(string, tag = "4")]
    pub logo: String,
    #[prost(sint32, tag = "5")]
    pub decimals: i32,
    #[prost(sint64, tag = "6")]
    pub updated_at: i64,
}

/// One orderbook level, or the execution price of a trade.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PriceLevel {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub quantity: String,
    /// Unix milliseconds.
    #[prost(sint64, tag = "3")]
    pub timestamp: i64,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct Paging {
    #[prost(sint64, tag = "1")]
    pub total: i64,
}
