//! Accounts sub-client.

use super::convert::{
    history_request, order_states_request, order_summary_request, rewards_request,
};
use super::wire::{
    self, OrderStatesResponse, PortfolioRequest, PortfolioResponse, RewardsResponse,
    StreamSubaccountBalanceRequest, StreamSubaccountBalanceResponse, SubaccountBalanceRequest,
    SubaccountBalanceResponse, SubaccountBalancesListRequest, SubaccountBalancesListResponse,
    SubaccountHistoryResponse, SubaccountOrderSummaryResponse, SubaccountsListRequest,
    SubaccountsListResponse,
};
use super::Balance;
use crate::client::InjectiveClient;
use crate::error::SdkError;
use crate::grpc::RpcStream;
use crate::shared::{OrderSummaryParams, RewardsParams, SubaccountHistoryParams};

pub struct Accounts<'a> {
    pub(crate) client: &'a InjectiveClient,
}

impl<'a> Accounts<'a> {
    /// Balance updates for every denom of a subaccount.
    pub async fn stream_subaccount_balance(
        &self,
        subaccount_id: &str,
    ) -> Result<RpcStream<StreamSubaccountBalanceResponse>, SdkError> {
        let request = StreamSubaccountBalanceRequest {
            subaccount_id: subaccount_id.to_string(),
            denoms: Vec::new(),
        };
        self.client
            .exchange_channel
            .server_stream(&wire::STREAM_SUBACCOUNT_BALANCE, request)
            .await
    }

    pub async fn get_subaccount_balance(
        &self,
        subaccount_id: &str,
        denom: &str,
    ) -> Result<SubaccountBalanceResponse, SdkError> {
        let request = SubaccountBalanceRequest {
            subaccount_id: subaccount_id.to_string(),
            denom: denom.to_string(),
        };
        self.client
            .exchange_channel
            .unary(&wire::SUBACCOUNT_BALANCE_ENDPOINT, request)
            .await
    }

    /// [`Self::get_subaccount_balance`] as decimals. `None` if the
    /// subaccount holds nothing of `denom`.
    pub async fn balance(
        &self,
        subaccount_id: &str,
        denom: &str,
    ) -> Result<Option<Balance>, SdkError> {
        let response = self.get_subaccount_balance(subaccount_id, denom).await?;
        response
            .balance
            .as_ref()
            .map(Balance::try_from)
            .transpose()
            .map_err(SdkError::from)
    }

    pub async fn get_subaccount_list(
        &self,
        account_address: &str,
    ) -> Result<SubaccountsListResponse, SdkError> {
        let request = SubaccountsListRequest {
            account_address: account_address.to_string(),
        };
        self.client
            .exchange_channel
            .unary(&wire::SUBACCOUNTS_LIST, request)
            .await
    }

    pub async fn get_subaccount_balances_list(
        &self,
        subaccount_id: &str,
    ) -> Result<SubaccountBalancesListResponse, SdkError> {
        let request = SubaccountBalancesListRequest {
            subaccount_id: subaccount_id.to_string(),
            denoms: Vec::new(),
        };
        self.client
            .exchange_channel
            .unary(&wire::SUBACCOUNT_BALANCES_LIST, request)
            .await
    }

    /// Deposits, withdrawals and transfers touching a subaccount.
    pub async fn get_subaccount_history(
        &self,
        subaccount_id: &str,
        params: &SubaccountHistoryParams,
    ) -> Result<SubaccountHistoryResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::SUBACCOUNT_HISTORY, history_request(subaccount_id, params))
            .await
    }

    pub async fn get_subaccount_order_summary(
        &self,
        subaccount_id: &str,
        params: &OrderSummaryParams,
    ) -> Result<SubaccountOrderSummaryResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::SUBACCOUNT_ORDER_SUMMARY,
                order_summary_request(subaccount_id, params),
            )
            .await
    }

    pub async fn get_order_states(
        &self,
        spot_order_hashes: &[String],
        derivative_order_hashes: &[String],
    ) -> Result<OrderStatesResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(
                &wire::ORDER_STATES,
                order_states_request(spot_order_hashes, derivative_order_hashes),
            )
            .await
    }

    pub async fn get_portfolio(
        &self,
        account_address: &str,
    ) -> Result<PortfolioResponse, SdkError> {
        let request = PortfolioRequest {
            account_address: account_address.to_string(),
        };
        self.client
            .exchange_channel
            .unary(&wire::PORTFOLIO, request)
            .await
    }

    pub async fn get_rewards(&self, params: &RewardsParams) -> Result<RewardsResponse, SdkError> {
        self.client
            .exchange_channel
            .unary(&wire::REWARDS, rewards_request(params))
            .await
    }
}
