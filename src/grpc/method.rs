//! Typed method descriptors.
//!
//! Each remote method is one `const` pairing its full gRPC path with its
//! request/response types and call shape. Domain slices declare their whole
//! surface with [`rpc_table!`] and the dispatcher in [`super::GrpcChannel`]
//! does the rest.

use std::fmt;
use std::marker::PhantomData;

/// A unary (single request, single response) method.
pub struct Unary<Req, Resp> {
    path: &'static str,
    _types: PhantomData<fn(Req) -> Resp>,
}

/// A server-streaming (single request, unbounded responses) method.
pub struct ServerStream<Req, Resp> {
    path: &'static str,
    _types: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Unary<Req, Resp> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _types: PhantomData,
        }
    }

    /// Full method path, e.g. `/injective_meta_rpc.InjectiveMetaRPC/Ping`.
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<Req, Resp> ServerStream<Req, Resp> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _types: PhantomData,
        }
    }

    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<Req, Resp> fmt::Debug for Unary<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unary").field(&self.path).finish()
    }
}

impl<Req, Resp> fmt::Debug for ServerStream<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServerStream").field(&self.path).finish()
    }
}

/// Declare the methods of one gRPC service as typed descriptor constants.
///
/// ```rust,ignore
/// rpc_table! {
///     service = "injective_meta_rpc.InjectiveMetaRPC";
///     Unary PING = "Ping" (PingRequest) -> PingResponse;
///     ServerStream STREAM_KEEPALIVE = "StreamKeepalive" (StreamKeepaliveRequest) -> StreamKeepaliveResponse;
/// }
/// ```
macro_rules! rpc_table {
    (
        service = $service:literal;
        $( $kind:ident $name:ident = $method:literal ($req:ty) -> $resp:ty; )*
    ) => {
        $(
            pub const $name: $crate::grpc::method::$kind<$req, $resp> =
                $crate::grpc::method::$kind::new(concat!("/", $service, "/", $method));
        )*
    };
}

pub(crate) use rpc_table;
