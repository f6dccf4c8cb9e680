//! Chain sub-client: blocks, accounts, transactions, grants.

use super::wire::{
    self, BaseAccount, BroadcastMode, GetLatestBlockRequest, GetLatestBlockResponse, GetTxRequest,
    QueryAccountRequest, QueryGrantsRequest, QueryGrantsResponse, SimulateRequest,
    SimulateResponse, TxResponse,
};
use super::{
    broadcast_request, chain_id_of, request_ids_from_logs, tx_request, tx_request_from_hex,
    AccountLookup,
};
use crate::client::InjectiveClient;
use crate::error::SdkError;

/// Sub-client for the chain node (Cosmos SDK services).
pub struct Chain<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Chain<'a> {
    pub async fn get_latest_block(&self) -> Result<GetLatestBlockResponse, SdkError> {
        self.client
            .chain_channel
            .unary(&wire::GET_LATEST_BLOCK, GetLatestBlockRequest {})
            .await
    }

    /// Chain id from the latest block header.
    pub async fn get_chain_id(&self) -> Result<String, SdkError> {
        let block = self.get_latest_block().await?;
        chain_id_of(&block)
            .ok_or_else(|| SdkError::InvalidResponse("Latest block has no header".to_string()))
    }

    /// Look up an account, keeping "does not exist" apart from failures.
    pub async fn lookup_account(&self, address: &str) -> AccountLookup {
        let result = self
            .client
            .chain_channel
            .unary(
                &wire::ACCOUNT,
                QueryAccountRequest {
                    address: address.to_string(),
                },
            )
            .await;
        AccountLookup::from_response(result)
    }

    /// The account at `address`, or `None` if it is missing, not a
    /// `BaseAccount`, or could not be fetched.
    pub async fn get_account(&self, address: &str) -> Option<BaseAccount> {
        match self.lookup_account(address).await {
            AccountLookup::Failed(e) => {
                tracing::debug!(address, error = %e, "Account lookup failed");
                None
            }
            lookup => lookup.into_account(),
        }
    }

    /// Request ids emitted by the transaction with this hash.
    ///
    /// `tx_hash` is the raw 32-byte hash; it is hex-encoded for the query.
    /// For the hex text of `TxResponse::txhash` use
    /// [`Self::get_request_id_by_tx_hash_hex`].
    pub async fn get_request_id_by_tx_hash(&self, tx_hash: &[u8]) -> Result<Vec<u64>, SdkError> {
        self.request_ids(tx_request(tx_hash)).await
    }

    /// [`Self::get_request_id_by_tx_hash`] for a hex-encoded hash.
    pub async fn get_request_id_by_tx_hash_hex(&self, tx_hash: &str) -> Result<Vec<u64>, SdkError> {
        self.request_ids(tx_request_from_hex(tx_hash)?).await
    }

    pub async fn simulate_tx(&self, tx_bytes: Vec<u8>) -> Result<SimulateResponse, SdkError> {
        #[allow(deprecated)]
        let request = SimulateRequest {
            tx_bytes,
            ..Default::default()
        };
        self.client.chain_channel.unary(&wire::SIMULATE, request).await
    }

    /// Broadcast and return once the transaction has passed `CheckTx`.
    pub async fn send_tx_sync_mode(&self, tx_bytes: Vec<u8>) -> Result<TxResponse, SdkError> {
        self.broadcast(tx_bytes, BroadcastMode::Sync).await
    }

    /// Broadcast and return immediately.
    pub async fn send_tx_async_mode(&self, tx_bytes: Vec<u8>) -> Result<TxResponse, SdkError> {
        self.broadcast(tx_bytes, BroadcastMode::Async).await
    }

    /// Broadcast and wait for the transaction to be committed.
    #[allow(deprecated)]
    pub async fn send_tx_block_mode(&self, tx_bytes: Vec<u8>) -> Result<TxResponse, SdkError> {
        self.broadcast(tx_bytes, BroadcastMode::Block).await
    }

    pub async fn get_grants(
        &self,
        granter: &str,
        grantee: &str,
        msg_type_url: Option<&str>,
    ) -> Result<QueryGrantsResponse, SdkError> {
        let request = QueryGrantsRequest {
            granter: granter.to_string(),
            grantee: grantee.to_string(),
            msg_type_url: msg_type_url.unwrap_or_default().to_string(),
            pagination: None,
        };
        self.client.chain_channel.unary(&wire::GRANTS, request).await
    }

    async fn request_ids(&self, request: GetTxRequest) -> Result<Vec<u64>, SdkError> {
        let tx = self.client.chain_channel.unary(&wire::GET_TX, request).await?;
        let logs = tx.tx_response.map(|r| r.logs).unwrap_or_default();
        request_ids_from_logs(&logs)
    }

    async fn broadcast(
        &self,
        tx_bytes: Vec<u8>,
        mode: BroadcastMode,
    ) -> Result<TxResponse, SdkError> {
        tracing::debug!(mode = mode.as_str_name(), bytes = tx_bytes.len(), "Broadcasting tx");
        let response = self
            .client
            .chain_channel
            .unary(&wire::BROADCAST_TX, broadcast_request(tx_bytes, mode))
            .await?;
        Ok(response.tx_response.unwrap_or_default())
    }
}
