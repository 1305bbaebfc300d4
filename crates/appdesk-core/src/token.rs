//! Optimistic role extraction from bearer tokens
//!
//! The payload segment of a JWT is decoded without verifying the signature.
//! The result is advisory only; the API remains the authorization boundary.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde_json::Value;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

/// JWTs use the URL-safe alphabet; some issuers emit the standard one.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Role claim of a token, if one can be read.
///
/// Looks at `role`, then the first element of `roles`. Any decoding problem
/// (missing segment, bad base64, bad JSON) yields `None`.
pub fn role_from_token(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;

    if let Some(role) = claims.get("role").and_then(Value::as_str) {
        return Some(role.to_string());
    }
    claims
        .get("roles")
        .and_then(Value::as_array)
        .and_then(|roles| roles.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    fn token_with(claims: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(claims))
    }

    #[test]
    fn test_role_claim() {
        let token = token_with(r#"{"sub":1,"role":"admin"}"#);
        assert_eq!(role_from_token(&token).as_deref(), Some("admin"));
    }

    #[test]
    fn test_roles_array_first_element() {
        let token = token_with(r#"{"roles":["employee","auditor"]}"#);
        assert_eq!(role_from_token(&token).as_deref(), Some("employee"));
    }

    #[test]
    fn test_empty_roles_array() {
        let token = token_with(r#"{"roles":[]}"#);
        assert_eq!(role_from_token(&token), None);
    }

    #[test]
    fn test_malformed_tokens_yield_none() {
        assert_eq!(role_from_token(""), None);
        assert_eq!(role_from_token("opaque-token"), None);
        assert_eq!(role_from_token("a.!!!not-base64!!!.c"), None);
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
        assert_eq!(role_from_token(&not_json), None);
    }

    #[test]
    fn test_padded_standard_alphabet_payload() {
        use base64::engine::general_purpose::STANDARD as PADDED;
        let token = format!("h.{}.s", PADDED.encode(r#"{"role":"admin??"}"#));
        assert_eq!(role_from_token(&token).as_deref(), Some("admin??"));
    }
}
