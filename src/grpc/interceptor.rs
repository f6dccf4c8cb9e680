//! Per-call deadline enforcement for unary calls.

use std::time::Duration;
use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Shape of an outgoing call, attached to the request extensions by the
/// dispatcher so interceptors can tell unary calls from streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Unary,
    ServerStreaming,
}

/// Interceptor that bounds every unary call by a fixed timeout.
///
/// The deadline is set as the call is issued: the `grpc-timeout` header is
/// replaced with the configured duration, so the effective deadline is
/// "issue time + timeout". Method, metadata and extensions are otherwise left
/// as they were. Server-streaming calls are passed through untouched so
/// long-lived subscriptions are never cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryTimeout {
    timeout: Duration,
}

impl UnaryTimeout {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Interceptor for UnaryTimeout {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if request.extensions().get::<CallKind>() == Some(&CallKind::Unary) {
            request.set_timeout(self.timeout);
        }
        Ok(request)
    }
}
