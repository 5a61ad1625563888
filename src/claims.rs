//! Structural JWT decoding for the shell's permission display.
//!
//! This module never touches the browser, so it compiles and tests on the
//! host. The wasm-only `web` module feeds it the raw string read from
//! localStorage.
//!
//! Security note: only the payload segment is decoded. The signature is
//! never verified and expiry is never checked, so the result is suitable for
//! optimistic UI display and nothing else. Authorization decisions belong to
//! whatever wrote the token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// localStorage key the platform's authentication flow writes the token to.
pub const TOKEN_STORAGE_KEY: &str = "jwt_token";

/// Claims the shell cares about. Unknown payload fields are ignored.
///
/// `roles` is decoded but not rendered anywhere yet; the original portal
/// carried it the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 3 dot-separated token segments, found {found}")]
    SegmentCount { found: usize },
    #[error("payload segment is not valid base64url: {0}")]
    PayloadEncoding(#[from] base64::DecodeError),
    #[error("payload is not a valid JSON object: {0}")]
    PayloadJson(String),
}

/// Decode the payload segment of a compact JWT.
///
/// The token must have exactly three dot-separated segments. The payload is
/// base64url without padding per RFC 7515, but trailing `=` is tolerated
/// since some issuers pad anyway.
pub fn decode_token(token: &str) -> Result<TokenClaims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(DecodeError::SegmentCount {
            found: segments.len(),
        });
    }

    let payload = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
    serde_json::from_slice(&payload).map_err(|e| DecodeError::PayloadJson(e.to_string()))
}

/// Token Reader entry point: interpret whatever the storage lookup produced.
///
/// An absent value is the anonymous view, not an error; only a present but
/// undecodable value reports `Err`, and the caller degrades that to empty
/// claims after logging.
pub fn claims_from_stored(stored: Option<&str>) -> Result<TokenClaims, DecodeError> {
    match stored {
        Some(raw) => decode_token(raw),
        None => Ok(TokenClaims::default()),
    }
}
