//! Orderbook domain: local orderbook state built from exchange snapshots.

pub mod state;

pub use state::OrderbookSnapshot;
