//! Unified SDK error types.

pub use crate::shared::scaling::ScalingError;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// A remote call failed (unavailable, deadline exceeded, server status...).
    /// Passed through exactly as the transport reported it.
    #[error("gRPC call failed: {0}")]
    Status(#[from] tonic::Status),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Denom error: {0}")]
    Denom(#[from] DenomError),

    #[error("Scaling error: {0}")]
    Scaling(#[from] ScalingError),
}

/// Result alias used across the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

/// Static denomination table errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DenomError {
    #[error("Unknown key {key:?} in {env} denom table")]
    UnknownKey { env: String, key: String },

    #[error("Section {key:?} has no {field:?} entry")]
    MissingField { key: String, field: &'static str },

    #[error("Malformed denom table: {0}")]
    Parse(String),
}

impl SdkError {
    /// The gRPC status code, if this error came from a remote call.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            SdkError::Status(status) => Some(status.code()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_passes_through_unchanged() {
        let err: SdkError = tonic::Status::deadline_exceeded("too slow").into();
        assert_eq!(err.code(), Some(tonic::Code::DeadlineExceeded));
        match err {
            SdkError::Status(status) => assert_eq!(status.message(), "too slow"),
            other => panic!("expected status, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_echoes_input() {
        let err = SdkError::from(DenomError::UnknownKey {
            env: "mainnet".into(),
            key: "0xdead".into(),
        });
        assert!(err.to_string().contains("0xdead"));
        assert!(err.code().is_none());
    }
}
