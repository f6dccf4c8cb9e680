use super::wire::RedemptionsRequest;
use crate::shared::{opt_string, RedemptionsParams};

pub(crate) fn redemptions_request(params: &RedemptionsParams) -> RedemptionsRequest {
    RedemptionsRequest {
        redeemer: opt_string(&params.redeemer),
        redemption_denom: opt_string(&params.redemption_denom),
        status: opt_string(&params.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redemptions_request() {
        let req = redemptions_request(
            &RedemptionsParams::default()
                .with_redeemer("inj1xyz")
                .with_status("pending"),
        );
        assert_eq!(req.redeemer, "inj1xyz");
        assert_eq!(req.redemption_denom, "");
        assert_eq!(req.status, "pending");
    }
}
