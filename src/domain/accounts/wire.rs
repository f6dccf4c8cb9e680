//! Wire messages for `injective_accounts_rpc.InjectiveAccountsRPC`.

use crate::grpc::method::rpc_table;
use crate::shared::wire::{Coin, Paging};

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalance {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub account_address: String,
    #[prost(string, tag = "3")]
    pub denom: String,
    #[prost(message, optional, tag = "4")]
    pub deposit: Option<SubaccountDeposit>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountDeposit {
    #[prost(string, tag = "1")]
    pub total_balance: String,
    #[prost(string, tag = "2")]
    pub available_balance: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamSubaccountBalanceRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    /// Empty means every denom.
    #[prost(string, repeated, tag = "2")]
    pub denoms: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StreamSubaccountBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: Option<SubaccountBalance>,
    #[prost(sint64, tag = "2")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalanceRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub denom: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: Option<SubaccountBalance>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountsListRequest {
    #[prost(string, tag = "1")]
    pub account_address: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountsListResponse {
    #[prost(string, repeated, tag = "1")]
    pub subaccounts: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalancesListRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, repeated, tag = "2")]
    pub denoms: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalancesListResponse {
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<SubaccountBalance>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountHistoryRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub denom: String,
    #[prost(string, repeated, tag = "3")]
    pub transfer_types: Vec<String>,
    #[prost(uint64, tag = "4")]
    pub skip: u64,
    #[prost(sint32, tag = "5")]
    pub limit: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountHistoryResponse {
    #[prost(message, repeated, tag = "1")]
    pub transfers: Vec<SubaccountBalanceTransfer>,
    #[prost(message, optional, tag = "2")]
    pub paging: Option<Paging>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountBalanceTransfer {
    #[prost(string, tag = "1")]
    pub transfer_type: String,
    #[prost(string, tag = "2")]
    pub src_subaccount_id: String,
    #[prost(string, tag = "3")]
    pub src_account_address: String,
    #[prost(string, tag = "4")]
    pub dst_subaccount_id: String,
    #[prost(string, tag = "5")]
    pub dst_account_address: String,
    #[prost(message, optional, tag = "6")]
    pub amount: Option<Coin>,
    #[prost(sint64, tag = "7")]
    pub executed_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountOrderSummaryRequest {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
    #[prost(string, tag = "3")]
    pub order_direction: String,
}

#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct SubaccountOrderSummaryResponse {
    #[prost(sint64, tag = "1")]
    pub spot_orders_total: i64,
    #[prost(sint64, tag = "2")]
    pub derivative_orders_total: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderStatesRequest {
    #[prost(string, repeated, tag = "1")]
    pub spot_order_hashes: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub derivative_order_hashes: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderStatesResponse {
    #[prost(message, repeated, tag = "1")]
    pub spot_order_states: Vec<OrderStateRecord>,
    #[prost(message, repeated, tag = "2")]
    pub derivative_order_states: Vec<OrderStateRecord>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OrderStateRecord {
    #[prost(string, tag = "1")]
    pub order_hash: String,
    #[prost(string, tag = "2")]
    pub subaccount_id: String,
    #[prost(string, tag = "3")]
    pub market_id: String,
    #[prost(string, tag = "4")]
    pub order_type: String,
    #[prost(string, tag = "5")]
    pub order_side: String,
    /// `booked`, `partial_filled`, `filled` or `canceled`.
    #[prost(string, tag = "6")]
    pub state: String,
    #[prost(string, tag = "7")]
    pub quantity_filled: String,
    #[prost(string, tag = "8")]
    pub quantity_remaining: String,
    #[prost(sint64, tag = "9")]
    pub created_at: i64,
    #[prost(sint64, tag = "10")]
    pub updated_at: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PortfolioRequest {
    #[prost(string, tag = "1")]
    pub account_address: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PortfolioResponse {
    #[prost(message, optional, tag = "1")]
    pub portfolio: Option<AccountPortfolio>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AccountPortfolio {
    #[prost(string, tag = "1")]
    pub portfolio_value: String,
    #[prost(string, tag = "2")]
    pub available_balance: String,
    #[prost(string, tag = "3")]
    pub locked_balance: String,
    #[prost(string, tag = "4")]
    pub unrealized_pnl: String,
    #[prost(message, repeated, tag = "5")]
    pub subaccounts: Vec<SubaccountPortfolio>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubaccountPortfolio {
    #[prost(string, tag = "1")]
    pub subaccount_id: String,
    #[prost(string, tag = "2")]
    pub available_balance: String,
    #[prost(string, tag = "3")]
    pub locked_balance: String,
    #[prost(string, tag = "4")]
    pub unrealized_pnl: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RewardsRequest {
    #[prost(sint64, tag = "1")]
    pub epoch: i64,
    #[prost(string, tag = "2")]
    pub account_address: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RewardsResponse {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<Reward>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Reward {
    #[prost(string, tag = "1")]
    pub account_address: String,
    #[prost(message, repeated, tag = "2")]
    pub rewards: Vec<Coin>,
    #[prost(sint64, tag = "3")]
    pub distributed_at: i64,
}

rpc_table! {
    service = "injective_accounts_rpc.InjectiveAccountsRPC";
    ServerStream STREAM_SUBACCOUNT_BALANCE = "StreamSubaccountBalance" (StreamSubaccountBalanceRequest) -> StreamSubaccountBalanceResponse;
    Unary SUBACCOUNT_BALANCE_ENDPOINT = "SubaccountBalanceEndpoint" (SubaccountBalanceRequest) -> SubaccountBalanceResponse;
    Unary SUBACCOUNTS_LIST = "SubaccountsList" (SubaccountsListRequest) -> SubaccountsListResponse;
    Unary SUBACCOUNT_BALANCES_LIST = "SubaccountBalancesList" (SubaccountBalancesListRequest) -> SubaccountBalancesListResponse;
    Unary SUBACCOUNT_HISTORY = "SubaccountHistory" (SubaccountHistoryRequest) -> SubaccountHistoryResponse;
    Unary SUBACCOUNT_ORDER_SUMMARY = "SubaccountOrderSummary" (SubaccountOrderSummaryRequest) -> SubaccountOrderSummaryResponse;
    Unary ORDER_STATES = "OrderStates" (OrderStatesRequest) -> OrderStatesResponse;
    Unary PORTFOLIO = "Portfolio" (PortfolioRequest) -> PortfolioResponse;
    Unary REWARDS = "Rewards" (RewardsRequest) -> RewardsResponse;
}
