//! Client-side decoding of identity tokens issued by the sign-in provider.
//!
//! **Nothing here verifies a signature, an audience or an expiry.** The
//! decoded claims are a display convenience for the browser session and
//! must never back a server-side trust decision.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::{DecodePaddingMode, GeneralPurposeConfig};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard-alphabet decoder that accepts padded and unpadded input and
/// non-canonical trailing bits, matching the browser's `atob`.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Unverified identity attributes carried in a token payload.
///
/// The well-known claims are typed; every other claim is kept verbatim in
/// `extra`, so serializing a decoded record reproduces the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IdentityClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// Returns `None` for any malformed input: wrong segment count, bad base64,
/// invalid UTF-8, invalid JSON, or a payload that is not a JSON object.
pub fn decode_identity_token(token: &str) -> Option<IdentityClaims> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return None;
    }

    let json = decode_segment(segments[1])?;
    match serde_json::from_str::<Value>(&json).ok()? {
        Value::Object(map) => serde_json::from_value(Value::Object(map)).ok(),
        _ => None,
    }
}

/// base64url → standard alphabet → bytes → UTF-8 text.
fn decode_segment(segment: &str) -> Option<String> {
    if segment.is_empty() {
        return None;
    }
    let normalized: String = segment
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = LENIENT_STANDARD.decode(normalized.as_bytes()).ok()?;
    String::from_utf8(bytes).ok()
}
