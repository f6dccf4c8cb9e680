//! Domain modules organized as vertical slices, one per remote service.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types and helpers over the wire messages
//! - `wire.rs`: prost messages and the service's RPC method table
//! - `convert.rs`: Request builders and `TryFrom`/`From` conversions
//! - `client.rs`: Sub-client issuing the service's calls
//!
//! `chain` talks to the chain node; every other slice talks to the exchange
//! indexer. `orderbook` holds the book state shared by spot and derivatives.

pub mod accounts;
pub mod auction;
pub mod chain;
pub mod derivative;
pub mod explorer;
pub mod insurance;
pub mod meta;
pub mod oracle;
pub mod orderbook;
pub mod spot;
