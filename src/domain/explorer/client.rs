//! Explorer sub-client.

use super::wire::{self, GetTxByTxHashRequest, GetTxByTxHashResponse};
use crate::client::InjectiveClient;
use crate::error::SdkError;

pub struct Explorer<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Explorer<'a> {
    /// Indexed transaction details. `tx_hash` is sent exactly as given.
    pub async fn get_tx_by_hash(&self, tx_hash: &str) -> Result<GetTxByTxHashResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::GET_TX_BY_TX_HASH,
                GetTxByTxHashRequest {
                    hash: tx_hash.to_string(),
                },
            )
            .await
    }
}
