//! Request builders and response conversions for the meta service.

use super::wire::{InfoRequest, InfoResponse};
use super::ServerInfo;
use crate::shared::datetime_from_millis;
use chrono::{DateTime, Utc};

/// An `Info` request stamped with `now` in unix milliseconds.
pub(crate) fn info_request(now: DateTime<Utc>) -> InfoRequest {
    InfoRequest {
        timestamp: now.timestamp_millis().max(0) as u64,
    }
}

fn from_millis(ms: u64) -> DateTime<Utc> {
    datetime_from_millis(i64::try_from(ms).unwrap_or(i64::MAX))
}

impl From<&InfoResponse> for ServerInfo {
    fn from(r: &InfoResponse) -> Self {
        Self {
            version: r.version.clone(),
            sent_at: from_millis(r.timestamp),
            server_time: from_millis(r.server_time),
        }
    }
}
