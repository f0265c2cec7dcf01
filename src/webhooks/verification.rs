//! Webhook signature verification.
//!
//! Stripe signs each webhook delivery with the endpoint's signing secret and
//! sends the result in the `Stripe-Signature` header:
//!
//! ```text
//! t=1492774577,v1=5257a869e7ecebeda32affa62cdca3fa51cad7e77a0e56ff536d0ce8e108d8bd
//! ```
//!
//! The signed payload is `"{t}.{body}"` and the scheme is HMAC-SHA256. A
//! header may carry several `v1` entries during secret rotation; any one
//! matching accepts the delivery. The timestamp is checked against a
//! tolerance window to reject replayed deliveries.

use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::rest::StripeError;
use crate::webhooks::Event;

type HmacSha256 = Hmac<Sha256>;

/// Default tolerance for the signature timestamp, in seconds.
pub const DEFAULT_TOLERANCE: i64 = 300;

/// The parsed `Stripe-Signature` header.
#[derive(Debug)]
struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<Vec<u8>>,
}

fn verification_error(reason: impl Into<String>) -> StripeError {
    StripeError::SignatureVerification {
        reason: reason.into(),
    }
}

fn parse_header(header: &str) -> Result<SignatureHeader, StripeError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let Some((key, value)) = part.trim().split_once('=') else {
            continue;
        };
        match key {
            "t" => {
                timestamp = Some(value.parse::<i64>().map_err(|_| {
                    verification_error("timestamp in signature header is not an integer")
                })?);
            }
            "v1" => {
                let decoded = hex::decode(value)
                    .ok_or_else(|| verification_error("signature is not valid hex"))?;
                signatures.push(decoded);
            }
            // Unknown schemes (v0 etc.) are ignored
            _ => {}
        }
    }

    let timestamp =
        timestamp.ok_or_else(|| verification_error("signature header has no timestamp"))?;
    if signatures.is_empty() {
        return Err(verification_error("signature header has no v1 signature"));
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
fn compute_signature(secret: &str, timestamp: i64, payload: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}

fn verify_at(
    payload: &str,
    header: &str,
    secret: &str,
    tolerance: i64,
    now: i64,
) -> Result<(), StripeError> {
    let parsed = parse_header(header)?;

    let expected = compute_signature(secret, parsed.timestamp, payload);
    let matched = parsed
        .signatures
        .iter()
        .any(|candidate| candidate.ct_eq(&expected).into());
    if !matched {
        return Err(verification_error("no signature matches the payload"));
    }

    // Signature first, then freshness: a bad secret should not be
    // distinguishable from a stale retry by error kind alone.
    if (now - parsed.timestamp).abs() > tolerance {
        return Err(verification_error(format!(
            "timestamp {} outside tolerance of {tolerance}s",
            parsed.timestamp
        )));
    }

    Ok(())
}

/// Verifies a webhook delivery against its `Stripe-Signature` header.
///
/// Checks the HMAC-SHA256 signature and the timestamp tolerance (in
/// seconds; [`DEFAULT_TOLERANCE`] when `None`).
///
/// # Errors
///
/// Returns [`StripeError::SignatureVerification`] for a malformed header, a
/// signature mismatch, or a timestamp outside the tolerance window.
pub fn verify_signature(
    payload: &str,
    header: &str,
    secret: &str,
    tolerance: Option<i64>,
) -> Result<(), StripeError> {
    verify_at(
        payload,
        header,
        secret,
        tolerance.unwrap_or(DEFAULT_TOLERANCE),
        unix_now(),
    )
}

/// Verifies a delivery and decodes it into an [`Event`].
///
/// # Errors
///
/// Returns [`StripeError::SignatureVerification`] for a bad signature, or
/// [`StripeError::MalformedResponse`] if the verified payload is not a valid
/// event object.
pub fn construct_event(
    payload: &str,
    header: &str,
    secret: &str,
    tolerance: Option<i64>,
) -> Result<Event, StripeError> {
    verify_signature(payload, header, secret, tolerance)?;
    serde_json::from_str(payload).map_err(|e| StripeError::MalformedResponse {
        status: 200,
        reason: format!("event payload did not decode: {e}"),
    })
}

mod hex {
    #[cfg(test)]
    pub fn encode(bytes: &[u8]) -> String {
        let mut out = String::with_capacity(bytes.len() * 2);
        for byte in bytes {
            out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0'));
            out.push(char::from_digit(u32::from(byte & 0xf), 16).unwrap_or('0'));
        }
        out
    }

    pub fn decode(input: &str) -> Option<Vec<u8>> {
        if input.len() % 2 != 0 {
            return None;
        }
        (0..input.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(input.get(i..i + 2)?, 16).ok())
            .collect()
    }
}
