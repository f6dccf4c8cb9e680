//! Chain domain: blocks, accounts, transactions and authz grants.
//!
//! Served over the chain channel using the standard Cosmos SDK services.

pub mod client;
pub mod wire;

use crate::error::SdkError;
use prost::Message;
use tonic::Code;
use wire::{
    AbciMessageLog, BaseAccount, BroadcastMode, BroadcastTxRequest, GetLatestBlockResponse,
    GetTxRequest, QueryAccountResponse,
};

/// Type URL of the only account type [`AccountLookup`] decodes.
pub const BASE_ACCOUNT_TYPE_URL: &str = "/cosmos.auth.v1beta1.BaseAccount";

/// Event types that carry a request id in their `id` attribute.
const REQUEST_EVENT_TYPES: [&str; 2] = ["request", "report"];

/// Outcome of an account query.
#[derive(Debug)]
pub enum AccountLookup {
    Found(BaseAccount),
    /// The chain has no account at this address.
    NotFound,
    /// The account exists but is not a `BaseAccount`; carries the type URL.
    UnexpectedType(String),
    /// The payload claimed to be a `BaseAccount` but did not decode.
    Malformed(prost::DecodeError),
    /// The query itself failed.
    Failed(SdkError),
}

impl AccountLookup {
    /// Collapse to present/absent: everything but `Found` is `None`.
    pub fn into_account(self) -> Option<BaseAccount> {
        match self {
            AccountLookup::Found(account) => Some(account),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, AccountLookup::Found(_))
    }

    pub(crate) fn from_response(result: Result<QueryAccountResponse, SdkError>) -> Self {
        match result {
            Ok(response) => match response.account {
                Some(any) => decode_base_account(&any.type_url, &any.value),
                None => AccountLookup::NotFound,
            },
            Err(SdkError::Status(status)) if status.code() == Code::NotFound => {
                AccountLookup::NotFound
            }
            Err(e) => AccountLookup::Failed(e),
        }
    }
}

/// Decode a boxed account, checking its declared type first.
pub fn decode_base_account(type_url: &str, value: &[u8]) -> AccountLookup {
    if type_url != BASE_ACCOUNT_TYPE_URL {
        tracing::warn!(type_url, "Account is not a BaseAccount");
        return AccountLookup::UnexpectedType(type_url.to_string());
    }
    match BaseAccount::decode(value) {
        Ok(account) => AccountLookup::Found(account),
        Err(e) => AccountLookup::Malformed(e),
    }
}

/// Collect request ids from transaction logs.
///
/// A log entry contributes an id only when it holds exactly one `request` or
/// `report` event and that event holds exactly one `id` attribute. Ids are
/// returned in log order.
pub fn request_ids_from_logs(logs: &[AbciMessageLog]) -> Result<Vec<u64>, SdkError> {
    let mut ids = Vec::new();

    for log in logs {
        let events: Vec<_> = log
            .events
            .iter()
            .filter(|event| REQUEST_EVENT_TYPES.contains(&event.r#type.as_str()))
            .collect();
        let [event] = events.as_slice() else {
            continue;
        };

        let attrs: Vec<_> = event.attributes.iter().filter(|attr| attr.key == "id").collect();
        let [attr] = attrs.as_slice() else {
            continue;
        };

        let id = attr.value.trim().parse::<u64>().map_err(|_| {
            SdkError::InvalidResponse(format!("request id {:?} is not an integer", attr.value))
        })?;
        ids.push(id);
    }

    if ids.is_empty() {
        return Err(SdkError::NotFound("Request Id is not found".to_string()));
    }
    Ok(ids)
}

/// Chain id from a latest-block response. Prefers the SDK block encoding and
/// falls back to the legacy Tendermint one.
#[allow(deprecated)]
pub(crate) fn chain_id_of(response: &GetLatestBlockResponse) -> Option<String> {
    if let Some(header) = response.sdk_block.as_ref().and_then(|b| b.header.as_ref()) {
        return Some(header.chain_id.clone());
    }
    response
        .block
        .as_ref()
        .and_then(|b| b.header.as_ref())
        .map(|h| h.chain_id.clone())
}

/// Broadcast request for `tx_bytes` in the given mode.
pub fn broadcast_request(tx_bytes: Vec<u8>, mode: BroadcastMode) -> BroadcastTxRequest {
    BroadcastTxRequest {
        tx_bytes,
        mode: mode as i32,
    }
}

/// `GetTx` request for a raw (32-byte) transaction hash.
pub fn tx_request(hash: &[u8]) -> GetTxRequest {
    GetTxRequest {
        hash: hex::encode_upper(hash),
    }
}

/// `GetTx` request for a hex hash as printed in `TxResponse::txhash`.
/// Case and a leading `0x` are ignored.
pub fn tx_request_from_hex(hash: &str) -> Result<GetTxRequest, SdkError> {
    let trimmed = hash.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let raw = hex::decode(digits)
        .map_err(|e| SdkError::Validation(format!("Invalid tx hash {:?}: {}", hash, e)))?;
    Ok(tx_request(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmos_sdk_proto::cosmos::base::abci::v1beta1::{Attribute, StringEvent};

    fn event(kind: &str, attrs: &[(&str, &str)]) -> StringEvent {
        StringEvent {
            r#type: kind.to_string(),
            attributes: attrs
                .iter()
                .map(|(key, value)| Attribute {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    fn log(events: Vec<StringEvent>) -> AbciMessageLog {
        AbciMessageLog {
            events,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_matching_events_is_not_found() {
        let logs = vec![log(vec![event("transfer", &[("id", "1")])])];
        let err = request_ids_from_logs(&logs).unwrap_err();
        assert!(matches!(err, SdkError::NotFound(_)));

        assert!(matches!(request_ids_from_logs(&[]), Err(SdkError::NotFound(_))));
    }

    #[test]
    fn test_single_request_event() {
        let logs = vec![log(vec![
            event("message", &[("action", "request")]),
            event("request", &[("id", "42"), ("client_id", "x")]),
        ])];
        assert_eq!(request_ids_from_logs(&logs).unwrap(), vec![42]);
    }

    #[test]
    fn test_ids_in_log_order() {
        let logs = vec![
            log(vec![event("request", &[("id", "7")])]),
            log(vec![event("message", &[])]),
            log(vec![event("report", &[("id", "3")])]),
        ];
        assert_eq!(request_ids_from_logs(&logs).unwrap(), vec![7, 3]);
    }

    #[test]
    fn test_ambiguous_entries_are_skipped() {
        let logs = vec![
            // Two qualifying events in one entry.
            log(vec![
                event("request", &[("id", "1")]),
                event("report", &[("id", "2")]),
            ]),
            // Two id attributes on one event.
            log(vec![event("request", &[("id", "3"), ("id", "4")])]),
            log(vec![event("request", &[("id", "5")])]),
        ];
        assert_eq!(request_ids_from_logs(&logs).unwrap(), vec![5]);
    }

    #[test]
    fn test_non_integer_id_is_invalid_response() {
        let logs = vec![log(vec![event("request", &[("id", "abc")])])];
        assert!(matches!(
            request_ids_from_logs(&logs),
            Err(SdkError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_broadcast_modes_differ_only_in_mode() {
        let tx = vec![1u8, 2, 3];
        let sync = broadcast_request(tx.clone(), BroadcastMode::Sync);
        let async_ = broadcast_request(tx.clone(), BroadcastMode::Async);
        let block = broadcast_request(tx.clone(), BroadcastMode::Block);

        assert_eq!(sync.mode, BroadcastMode::Sync as i32);
        assert_eq!(async_.mode, BroadcastMode::Async as i32);
        assert_eq!(block.mode, BroadcastMode::Block as i32);
        for req in [&sync, &async_, &block] {
            assert_eq!(req.tx_bytes, tx);
        }
        assert_ne!(sync.mode, async_.mode);
        assert_ne!(async_.mode, block.mode);
    }

    #[test]
    fn test_chain_id_from_sdk_block() {
        use cosmos_sdk_proto::cosmos::base::tendermint::v1beta1::{Block, Header};

        let response = GetLatestBlockResponse {
            sdk_block: Some(Block {
                header: Some(Header {
                    chain_id: "injective-888".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(chain_id_of(&response).as_deref(), Some("injective-888"));
        assert_eq!(chain_id_of(&GetLatestBlockResponse::default()), None);
    }

    #[test]
    fn test_decode_base_account() {
        let account = BaseAccount {
            address: "inj1qqq".to_string(),
            account_number: 12,
            sequence: 4,
            ..Default::default()
        };
        let bytes = account.encode_to_vec();

        match decode_base_account(BASE_ACCOUNT_TYPE_URL, &bytes) {
            AccountLookup::Found(decoded) => assert_eq!(decoded, account),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_type_is_absent() {
        let lookup = decode_base_account("/injective.types.v1beta1.EthAccount", &[0x0a, 0x00]);
        assert!(matches!(
            lookup,
            AccountLookup::UnexpectedType(ref url) if url.contains("EthAccount")
        ));
        assert!(lookup.into_account().is_none());
    }

    #[test]
    fn test_malformed_payload_is_absent() {
        let lookup = decode_base_account(BASE_ACCOUNT_TYPE_URL, &[0xff, 0xff, 0xff]);
        assert!(matches!(lookup, AccountLookup::Malformed(_)));
        assert!(lookup.into_account().is_none());
    }

    #[test]
    fn test_lookup_from_response() {
        let missing = AccountLookup::from_response(Ok(QueryAccountResponse::default()));
        assert!(matches!(missing, AccountLookup::NotFound));

        let not_found =
            AccountLookup::from_response(Err(tonic::Status::not_found("no account").into()));
        assert!(matches!(not_found, AccountLookup::NotFound));

        let failed = AccountLookup::from_response(Err(tonic::Status::unavailable("down").into()));
        assert!(matches!(failed, AccountLookup::Failed(SdkError::Status(_))));
        assert!(failed.into_account().is_none());
    }

    const TX_HASH_HEX: &str = "5f3a9c0e1b2d4f6081a3c5e7092b4d6f8091a2b3c4d5e6f708192a3b4c5d6e7f";

    #[test]
    fn test_tx_request_encodes_raw_hash() {
        let raw = hex::decode(TX_HASH_HEX).unwrap();
        assert_eq!(tx_request(&raw).hash, TX_HASH_HEX.to_ascii_uppercase());
    }

    #[test]
    fn test_tx_request_from_hex_is_not_double_encoded() {
        let expected = TX_HASH_HEX.to_ascii_uppercase();
        assert_eq!(tx_request_from_hex(TX_HASH_HEX).unwrap().hash, expected);
        assert_eq!(tx_request_from_hex(&expected).unwrap().hash, expected);
        assert_eq!(
            tx_request_from_hex(&format!("0x{}", TX_HASH_HEX)).unwrap().hash,
            expected
        );
        // The ASCII bytes of the hex text are a different (longer) hash.
        assert_ne!(tx_request(TX_HASH_HEX.as_bytes()).hash, expected);
    }

    #[test]
    fn test_tx_request_from_hex_rejects_non_hex() {
        let err = tx_request_from_hex("not-a-hash").unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
        assert!(err.to_string().contains("not-a-hash"));
    }
}
