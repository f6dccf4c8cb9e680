//! Wire messages for `injective_insurance_rpc.InjectiveInsuranceRPC`.

use crate::grpc::method::rpc_table;

#[derive(Clone, PartialEq, prost::Message)]
pub struct FundsRequest {}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FundsResponse {
    #[prost(message, repeated, tag = "1")]
    pub funds: Vec<InsuranceFund>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct InsuranceFund {
    #[prost(string, tag = "1")]
    pub market_ticker: String,
    #[prost(string, tag = "2")]
    pub market_id: String,
    #[prost(string, tag = "3")]
    pub deposit_denom: String,
    #[prost(string, tag = "4")]
    pub pool_token_denom: String,
    /// Seconds between a redemption request and its payout.
    #[prost(sint64, tag = "5")]
    pub redemption_notice_period_duration: i64,
    #[prost(string, tag = "6")]
    pub balance: String,
    #[prost(string, tag = "7")]
    pub total_share: String,
    #[prost(string, tag = "8")]
    pub oracle_base: String,
    #[prost(string, tag = "9")]
    pub oracle_quote: String,
    #[prost(string, tag = "10")]
    pub oracle_type: String,
    #[prost(sint64, tag = "11")]
    pub expiry: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RedemptionsRequest {
    #[prost(string, tag = "1")]
    pub redeemer: String,
    #[prost(string, tag = "2")]
    pub redemption_denom: String,
    #[prost(string, tag = "3")]
    pub status: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RedemptionsResponse {
    #[prost(message, repeated, tag = "1")]
    pub redemption_schedules: Vec<RedemptionSchedule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RedemptionSchedule {
    #[prost(uint64, tag = "1")]
    pub redemption_id: u64,
    #[prost(string, tag = "2")]
    pub status: String,
    #[prost(string, tag = "3")]
    pub redeemer: String,
    #[prost(sint64, tag = "4")]
    pub claimable_redemption_time: i64,
    #[prost(string, tag = "5")]
    pub redemption_amount: String,
    #[prost(string, tag = "6")]
    pub redemption_denom: String,
    #[prost(sint64, tag = "7")]
    pub requested_at: i64,
    #[prost(string, tag = "8")]
    pub disbursed_amount: String,
    #[prost(string, tag = "9")]
    pub disbursed_denom: String,
    #[prost(sint64, tag = "10")]
    pub disbursed_at: i64,
}

rpc_table! {
    service = "injective_insurance_rpc.InjectiveInsuranceRPC";
    Unary FUNDS = "Funds" (FundsRequest) -> FundsResponse;
    Unary REDEMPTIONS = "Redemptions" (RedemptionsRequest) -> RedemptionsResponse;
}
