//! Reading a session token's expiry without verifying it.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use crate::error::AuthError;

/// Tokens expiring within this many seconds are treated as already expired.
pub const EXPIRY_BUFFER_SECS: i64 = 60;

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// The `exp` claim of a JWT-shaped token. The signature is not checked.
///
/// # Errors
///
/// Returns `AuthError::Other` if the token is not three dot-separated
/// segments, the payload is not base64url JSON, or `exp` is missing.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let mut segments = jwt.split('.');
    let (Some(_), Some(payload), Some(_), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(AuthError::Other("invalid JWT format".into()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes)
        .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;
    let exp = claim
        .exp
        .ok_or_else(|| AuthError::Other("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))
}

/// True when the token's `exp` is past or inside the buffer.
///
/// Opaque tokens are left for the backend to judge.
#[must_use]
pub fn is_expired(jwt: &str) -> bool {
    match decode_expiry(jwt) {
        Ok(expires_at) => expires_at <= Utc::now() + TimeDelta::seconds(EXPIRY_BUFFER_SECS),
        Err(error) => {
            tracing::debug!(%error, "token expiry unreadable");
            false
        }
    }
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    jwt_with_payload(&format!(r#"{{"sub":"user-1","exp":{exp}}}"#))
}

#[cfg(test)]
fn jwt_with_payload(payload: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode("sig")
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn reads_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        assert_eq!(decode_expiry(&make_jwt_with_exp(exp)).unwrap().timestamp(), exp);
    }

    #[rstest]
    #[case(-3600, true)]
    #[case(10, true)]
    #[case(3600, false)]
    fn expiry_respects_buffer(#[case] offset: i64, #[case] expired: bool) {
        let exp = Utc::now().timestamp() + offset;
        assert_eq!(is_expired(&make_jwt_with_exp(exp)), expired);
    }

    #[test]
    fn opaque_tokens_are_not_judged() {
        assert!(!is_expired("opaque-session-token"));
    }

    #[rstest]
    #[case("not-a-jwt", "invalid JWT format")]
    #[case("a.b.c.d", "invalid JWT format")]
    #[case("header.!!!invalid!!!.signature", "base64 decode failed")]
    fn malformed_tokens_are_rejected(#[case] token: &str, #[case] message: &str) {
        assert!(decode_expiry(token).unwrap_err().to_string().contains(message));
    }

    #[test]
    fn missing_exp_is_an_error() {
        let error = decode_expiry(&jwt_with_payload(r#"{"sub":"user-1"}"#)).unwrap_err();
        assert!(error.to_string().contains("missing exp claim"));
    }
}
