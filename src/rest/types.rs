//! Types for the Coinspaid REST API operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{empty_string_as_none, int_or_string};

/// Envelope wrapping every successful Coinspaid response body.
///
/// Decoding is an explicit two-step process: the body parses into the
/// envelope first and the inner value is projected out afterwards.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Request for a deposit address.
#[derive(Debug, Clone, Serialize)]
pub struct TakeAddressInput {
    /// Caller-supplied reference returned in [`Address`] responses,
    /// example: "user-id:2048".
    pub foreign_id: String,
    /// ISO code of the currency to receive funds in, example: "BTC".
    pub currency: String,
}

impl TakeAddressInput {
    /// Create a new take-address request.
    pub fn new(foreign_id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            foreign_id: foreign_id.into(),
            currency: currency.into(),
        }
    }
}

/// A deposit address assigned by Coinspaid.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    /// Server-assigned address identifier.
    pub id: i64,
    /// Currency the address accepts.
    pub currency: String,
    /// Currency deposits are converted to, when conversion was requested.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub convert_to: Option<String>,
    /// The deposit address itself.
    pub address: String,
    /// Tag or memo, for currencies that require one.
    #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
    pub tag: Option<String>,
    /// The foreign ID supplied when the address was taken.
    pub foreign_id: String,
}

/// Request to withdraw crypto to an external address.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawCryptoInput {
    /// Unique foreign ID in the caller's system, example: "122929".
    pub foreign_id: String,
    /// Amount of funds to withdraw.
    pub amount: Decimal,
    /// ISO code of the currency to send funds in, example: "BTC".
    pub currency: String,
    /// Cryptocurrency address to send the funds to.
    pub address: String,
    /// Tag (Ripple or BNB) or memo (Bitshares or EOS), when the currency
    /// requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl WithdrawCryptoInput {
    /// Create a new withdrawal request without a tag.
    pub fn new(
        foreign_id: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            foreign_id: foreign_id.into(),
            amount,
            currency: currency.into(),
            address: address.into(),
            tag: None,
        }
    }
}

/// An accepted withdrawal as registered by Coinspaid.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawCryptoPayload {
    /// Server-assigned withdrawal identifier.
    ///
    /// The API is inconsistent about the wire type and sends either a bare
    /// integer or a numeric string; both normalize to `i64`.
    #[serde(deserialize_with = "int_or_string::deserialize")]
    pub id: i64,
    /// The foreign ID supplied with the withdrawal request.
    pub foreign_id: String,
    /// Operation type, example: "withdrawal".
    #[serde(rename = "type")]
    pub kind: String,
    /// Processing status, example: "processing".
    pub status: String,
    /// Requested amount.
    pub amount: Decimal,
    /// Currency the funds are sent from.
    pub sender_currency: String,
    /// Amount debited from the sender.
    pub sender_amount: Decimal,
    /// Currency the receiver gets.
    pub receiver_currency: String,
    /// Amount credited to the receiver.
    pub receiver_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_address_input_serializes_snake_case() {
        let input = TakeAddressInput::new("user-id:2048", "EUR");
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"foreign_id":"user-id:2048","currency":"EUR"}"#);
    }

    #[test]
    fn test_withdraw_input_omits_missing_tag() {
        let input = WithdrawCryptoInput::new(
            "122929",
            "3500".parse().unwrap(),
            "BTC",
            "3P3QsMVK89JBNqZQv5zMAKG8FK3kJM4rjt",
        );
        let json = serde_json::to_string(&input).unwrap();
        assert!(!json.contains("tag"));
        assert!(json.contains(r#""amount":"3500""#));
    }

    #[test]
    fn test_withdraw_input_includes_tag_when_set() {
        let mut input = WithdrawCryptoInput::new("122929", "1".parse().unwrap(), "XRP", "rAddr");
        input.tag = Some("12345".to_string());
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""tag":"12345""#));
    }

    #[test]
    fn test_address_decodes_from_envelope() {
        let body = r#"{
            "data": {
                "id": 1,
                "currency": "EUR",
                "convert_to": "EUR",
                "address": "12983h13ro1hrt24it432t",
                "tag": "tag-123",
                "foreign_id": "user-id:2048"
            }
        }"#;

        let envelope: DataEnvelope<Address> = serde_json::from_str(body).unwrap();
        let address = envelope.data;
        assert_eq!(address.id, 1);
        assert_eq!(address.currency, "EUR");
        assert_eq!(address.convert_to.as_deref(), Some("EUR"));
        assert_eq!(address.address, "12983h13ro1hrt24it432t");
        assert_eq!(address.tag.as_deref(), Some("tag-123"));
        assert_eq!(address.foreign_id, "user-id:2048");
    }

    #[test]
    fn test_address_empty_tag_is_none() {
        let body = r#"{
            "data": {
                "id": 2,
                "currency": "BTC",
                "address": "3P3QsMVK89JBNqZQv5zMAKG8FK3kJM4rjt",
                "tag": "",
                "foreign_id": "user-id:2048"
            }
        }"#;

        let envelope: DataEnvelope<Address> = serde_json::from_str(body).unwrap();
        assert!(envelope.data.tag.is_none());
        assert!(envelope.data.convert_to.is_none());
    }

    #[test]
    fn test_withdraw_payload_decodes_string_amounts() {
        let body = r#"{
            "data": {
                "id": 1,
                "foreign_id": "user-id:2048",
                "type": "withdrawal",
                "status": "processing",
                "amount": "0.01000000",
                "sender_amount": "0.01000000",
                "sender_currency": "ETH",
                "receiver_amount": "0.01000000",
                "receiver_currency": "ETH"
            }
        }"#;

        let envelope: DataEnvelope<WithdrawCryptoPayload> = serde_json::from_str(body).unwrap();
        let payload = envelope.data;
        assert_eq!(payload.id, 1);
        assert_eq!(payload.kind, "withdrawal");
        assert_eq!(payload.amount, "0.01".parse().unwrap());
        assert_eq!(payload.sender_currency, "ETH");
    }

    #[test]
    fn test_withdraw_payload_accepts_string_id() {
        let body = r#"{
            "data": {
                "id": "17",
                "foreign_id": "122929",
                "type": "withdrawal",
                "status": "processing",
                "amount": "3500",
                "sender_amount": "3500",
                "sender_currency": "BTC",
                "receiver_amount": "3500",
                "receiver_currency": "BTC"
            }
        }"#;

        let envelope: DataEnvelope<WithdrawCryptoPayload> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data.id, 17);
    }

    #[test]
    fn test_partial_payload_fails_to_decode() {
        // A decode failure must never produce a partially populated result.
        let body = r#"{"data": {"id": 1, "foreign_id": "user-id:2048"}}"#;
        assert!(serde_json::from_str::<DataEnvelope<WithdrawCryptoPayload>>(body).is_err());
    }
}
