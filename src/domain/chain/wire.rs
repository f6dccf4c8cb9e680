//! Cosmos chain messages and the chain-side method table.

pub use cosmos_sdk_proto::cosmos::auth::v1beta1::{
    BaseAccount, QueryAccountRequest, QueryAccountResponse,
};
pub use cosmos_sdk_proto::cosmos::authz::v1beta1::{QueryGrantsRequest, QueryGrantsResponse};
pub use cosmos_sdk_proto::cosmos::base::abci::v1beta1::{AbciMessageLog, TxResponse};
pub use cosmos_sdk_proto::cosmos::base::tendermint::v1beta1::{
    GetLatestBlockRequest, GetLatestBlockResponse,
};
pub use cosmos_sdk_proto::cosmos::tx::v1beta1::{
    BroadcastMode, BroadcastTxRequest, BroadcastTxResponse, GetTxRequest, GetTxResponse,
    SimulateRequest, SimulateResponse,
};

use crate::grpc::method::rpc_table;

rpc_table! {
    service = "cosmos.base.tendermint.v1beta1.Service";
    Unary GET_LATEST_BLOCK = "GetLatestBlock" (GetLatestBlockRequest) -> GetLatestBlockResponse;
}

rpc_table! {
    service = "cosmos.auth.v1beta1.Query";
    Unary ACCOUNT = "Account" (QueryAccountRequest) -> QueryAccountResponse;
}

rpc_table! {
    service = "cosmos.authz.v1beta1.Query";
    Unary GRANTS = "Grants" (QueryGrantsRequest) -> QueryGrantsResponse;
}

rpc_table! {
    service = "cosmos.tx.v1beta1.Service";
    Unary GET_TX = "GetTx" (GetTxRequest) -> GetTxResponse;
    Unary SIMULATE = "Simulate" (SimulateRequest) -> SimulateResponse;
    Unary BROADCAST_TX = "BroadcastTx" (BroadcastTxRequest) -> BroadcastTxResponse;
}
