//! Meta domain: liveness, version and server info.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};

/// Round-trip timing derived from an `Info` exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub version: String,
    /// When the request was built, as echoed by the server.
    pub sent_at: DateTime<Utc>,
    pub server_time: DateTime<Utc>,
}

impl ServerInfo {
    /// Server clock minus client clock at send time. Includes one-way latency.
    pub fn clock_offset(&self) -> chrono::Duration {
        self.server_time - self.sent_at
    }
}
