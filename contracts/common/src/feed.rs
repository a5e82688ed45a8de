//! Feed Document Model
//!
//! The upstream provider serves signed observations as a JSON document:
//!
//! ```json
//! {
//!   "data": { "price": "4200", "time": "1000000" },
//!   "signature": { "r": "<decimal>", "s": "<decimal>" }
//! }
//! ```
//!
//! All large integers travel as decimal strings. This module holds the serde
//! model of that shape and the checked decoding into core types. Transport
//! (HTTP, retries, caching) stays with the caller.

use serde::{Deserialize, Serialize};

use crate::errors::{AttestError, AttestResult};
use crate::types::{AttestationSignature, FieldElement, OracleUpdate};
use crate::String;

/// The observed values, as served by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedData {
    /// Price as a decimal integer string
    pub price: String,
    /// Observation timestamp as a decimal integer string
    pub time: String,
}

/// The provider's detached signature over `(price, time)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSignature {
    /// Compressed nonce point as a decimal integer string
    pub r: String,
    /// Scalar as a decimal integer string
    pub s: String,
}

/// One signed observation document from the price feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    /// The observed values
    pub data: FeedData,
    /// The signature binding them to the provider's identity
    pub signature: FeedSignature,
}

impl FeedResponse {
    /// Decodes the document into an in-domain update and its signature.
    ///
    /// # Errors
    /// `DomainError` naming the offending field when a value is not a valid
    /// decimal integer or (for `price`/`time`) not a canonical field element.
    pub fn decode(&self) -> AttestResult<(OracleUpdate, AttestationSignature)> {
        let value = parse_field("data.price", &self.data.price)?;
        let timestamp = parse_field("data.time", &self.data.time)?;
        let signature = AttestationSignature::from_decimal_parts(&self.signature.r, &self.signature.s)?;
        Ok((OracleUpdate::new(value, timestamp), signature))
    }
}

/// Parses a decimal field-element string, naming the document field on error.
fn parse_field(param: &'static str, s: &str) -> AttestResult<FieldElement> {
    FieldElement::from_decimal_str(s).map_err(|err| match err {
        AttestError::DomainError { reason, .. } => AttestError::DomainError { param, reason },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> &'static str {
        r#"{
            "data": { "price": "4200", "time": "1000000" },
            "signature": {
                "r": "26545513748775911233424851469484096799413741017006352456100547880447752952428",
                "s": "7381406986124079327199694038222605261248869991738054485116460354242251864564"
            }
        }"#
    }

    #[test]
    fn test_decode_sample_document() {
        let response: FeedResponse = serde_json::from_str(sample_document()).unwrap();
        let (update, signature) = response.decode().unwrap();

        assert_eq!(update.value, FieldElement::from_u64(4200));
        assert_eq!(update.timestamp, FieldElement::from_u64(1_000_000));
        assert_eq!(
            signature,
            AttestationSignature::from_decimal_parts(
                "26545513748775911233424851469484096799413741017006352456100547880447752952428",
                "7381406986124079327199694038222605261248869991738054485116460354242251864564",
            )
            .unwrap()
        );
    }

    #[test]
    fn test_decode_names_the_bad_field() {
        let mut response: FeedResponse = serde_json::from_str(sample_document()).unwrap();
        response.data.time = "not-a-number".into();

        assert_eq!(
            response.decode(),
            Err(AttestError::DomainError {
                param: "data.time",
                reason: "not a 256-bit decimal integer",
            })
        );
    }

    #[test]
    fn test_decode_rejects_out_of_domain_price() {
        let mut response: FeedResponse = serde_json::from_str(sample_document()).unwrap();
        // 2^255 - 19, one past the largest canonical element
        response.data.price =
            "57896044618658097711785492504343953926634992332820282019728792003956564819949"
                .into();

        assert!(matches!(
            response.decode(),
            Err(AttestError::DomainError {
                param: "data.price",
                ..
            })
        ));
    }

    #[test]
    fn test_signature_components_may_exceed_field_domain() {
        let mut response: FeedResponse = serde_json::from_str(sample_document()).unwrap();
        // 2^255, above the field modulus but a legal encoded point value
        response.signature.r =
            "57896044618658097711785492504343953926634992332820282019728792003956564819968"
                .into();

        assert!(response.decode().is_ok());
    }

    #[test]
    fn test_document_roundtrips_through_serde() {
        let response: FeedResponse = serde_json::from_str(sample_document()).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        let again: FeedResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, again);
    }
}
