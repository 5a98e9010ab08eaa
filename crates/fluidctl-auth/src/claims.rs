//! Expiry extraction from cached bearer tokens.
//!
//! The claims payload is decoded without verifying the issuer signature:
//! the client holds no signing key, and every API call is verified
//! server-side over the issuer's TLS channel. Only the `exp` claim is
//! consulted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};

use crate::error::{AuthError, Result};

/// Decode the expiry claim of `token` without signature verification.
pub fn token_expiry(token: &str) -> Result<DateTime<Utc>> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => {
            return Err(AuthError::MalformedToken(
                "token is not a three-segment JWT".to_string(),
            ));
        }
    };

    let decoded = URL_SAFE_NO_PAD.decode(payload).map_err(|err| {
        AuthError::MalformedToken(format!("claims segment is not base64url: {err}"))
    })?;
    let claims: serde_json::Value = serde_json::from_slice(&decoded)
        .map_err(|err| AuthError::MalformedToken(format!("claims segment is not JSON: {err}")))?;

    let exp = claims
        .get("exp")
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| {
            AuthError::MalformedToken("token does not contain an expiration claim".to_string())
        })?;

    DateTime::from_timestamp(exp as i64, 0).ok_or_else(|| {
        AuthError::MalformedToken("expiration claim is out of range".to_string())
    })
}

/// A token is expired only once `now` is strictly past its expiry.
pub fn is_expired(expiry: DateTime<Utc>) -> bool {
    Utc::now() > expiry
}
