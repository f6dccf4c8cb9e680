//! Insurance sub-client.

use super::convert::redemptions_request;
use super::wire::{self, FundsRequest, FundsResponse, RedemptionsResponse};
use crate::client::InjectiveClient;
use crate::error::SdkError;
use crate::shared::RedemptionsParams;

pub struct Insurance<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Insurance<'a> {
    pub async fn get_insurance_funds(&self) -> Result<FundsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::FUNDS, FundsRequest {})
            .await
    }

    pub async fn get_redemptions(
        &self,
        params: &RedemptionsParams,
    ) -> Result<RedemptionsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::REDEMPTIONS, redemptions_request(params))
            .await
    }
}
