//! PKCE challenge, verifier and anti-CSRF state generation.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};

use crate::error::{AuthError, Result};

/// Random bytes drawn for the code verifier.
const VERIFIER_BYTES: usize = 32;
/// Random bytes drawn for the anti-CSRF state value.
const STATE_BYTES: usize = 24;

/// Single-use PKCE material for one login attempt.
///
/// Never persisted; discarded once the token exchange completes or fails.
#[derive(Debug)]
pub struct PkceExchange {
    /// Hex-encoded code verifier, revealed only during the token exchange.
    pub verifier: String,
    /// `base64url(SHA-256(verifier))`, no padding.
    pub challenge: String,
    /// Hex-encoded anti-CSRF state, round-tripped through the redirect.
    pub state: String,
}

impl PkceExchange {
    /// Draw fresh verifier and state values from the OS entropy source.
    pub fn generate() -> Result<Self> {
        let verifier = random_bytes_in_hex(VERIFIER_BYTES)?;
        let state = random_bytes_in_hex(STATE_BYTES)?;
        let challenge = code_challenge(&verifier);

        Ok(Self {
            verifier,
            challenge,
            state,
        })
    }
}

/// Compute the code challenge for a verifier.
pub fn code_challenge(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

fn random_bytes_in_hex(count: usize) -> Result<String> {
    let mut buf = vec![0u8; count];
    getrandom::fill(&mut buf).map_err(|_| AuthError::EntropyUnavailable)?;

    Ok(hex::encode(buf))
}
