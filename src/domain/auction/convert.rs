//! Request builders for the auction service.

use super::wire::AuctionRequest;

pub(crate) fn auction_request(round: i64) -> AuctionRequest {
    AuctionRequest { round }
}
