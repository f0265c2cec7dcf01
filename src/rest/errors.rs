//! The typed error taxonomy and the status-to-kind translator.
//!
//! Every failure the pipeline can produce lands in exactly one
//! [`StripeError`] variant, so callers branch on kind rather than
//! string-matching messages. API-level variants preserve the original status
//! code, the machine-readable error code, the offending parameter name, and
//! the request id whenever the server supplied them.
//!
//! # Mapping
//!
//! | outcome | kind |
//! |---|---|
//! | template/arity misuse | [`StripeError::InvalidPath`] |
//! | empty identifier | [`StripeError::InvalidIdentifier`] |
//! | no HTTP response (connect, DNS, timeout) | [`StripeError::Connection`] |
//! | 401 | [`StripeError::Authentication`] |
//! | 403 | [`StripeError::PermissionDenied`] |
//! | 404 without an error code | [`StripeError::NotFound`] |
//! | 400, 404 with a code, other 4xx | [`StripeError::InvalidRequest`] |
//! | 409 | [`StripeError::IdempotencyConflict`] |
//! | 429 | [`StripeError::RateLimited`] |
//! | 5xx | [`StripeError::ApiInternal`] |
//! | unparseable 2xx body | [`StripeError::MalformedResponse`] |
//! | webhook signature mismatch | [`StripeError::SignatureVerification`] |
//!
//! The pipeline never retries and never swallows an error; retry policy
//! belongs to the caller. `Connection` and `RateLimited` are the usual
//! candidates for caller-driven retry.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::clients::TransportError;

/// Details of an API-level error, parsed from the error envelope.
///
/// Wire format: `{ "error": { "type": ..., "code"?: ..., "message": ...,
/// "param"?: ... } }` accompanying any non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    /// The original HTTP status code.
    pub status: u16,
    /// The server's error category, e.g. `invalid_request_error`.
    pub error_type: Option<String>,
    /// Machine-readable error code, when the server supplied one.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// The offending parameter name, when the server identified one.
    pub param: Option<String>,
    /// The `Request-Id` header value, for error reports.
    pub request_id: Option<String>,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}", self.status)?;
        if let Some(code) = &self.code {
            write!(f, ", code {code}")?;
        }
        if let Some(param) = &self.param {
            write!(f, ", param {param}")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

/// The body of the error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorPayload {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
    pub param: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorPayload,
}

/// Error type for all API operations.
///
/// The set is closed: every branch of the pipeline produces exactly one of
/// these variants. See the module docs for the full mapping.
#[derive(Debug, Error)]
pub enum StripeError {
    /// The path template and identifier count disagree. A programming error,
    /// surfaced before any network call and never retried.
    #[error("path template '{template}' expects {expected} identifier(s), {supplied} supplied")]
    InvalidPath {
        /// The offending template.
        template: String,
        /// Placeholders in the template.
        expected: usize,
        /// Identifiers supplied by the caller.
        supplied: usize,
    },

    /// An identifier was empty or whitespace-only. Surfaced before any
    /// network call.
    #[error("identifier {position} for path template '{template}' is empty")]
    InvalidIdentifier {
        /// The offending template.
        template: String,
        /// Zero-based position of the bad identifier.
        position: usize,
    },

    /// No HTTP response was obtained: connection refused, DNS failure, or
    /// timeout. Potentially transient; the caller decides whether to retry.
    #[error("connection error: {0}")]
    Connection(#[from] TransportError),

    /// The server rejected the credentials (HTTP 401).
    #[error("authentication failed: {0}")]
    Authentication(ErrorDetail),

    /// The credentials lack permission for this operation (HTTP 403).
    #[error("permission denied: {0}")]
    PermissionDenied(ErrorDetail),

    /// The resource does not exist (HTTP 404 without a specific error code).
    #[error("not found: {0}")]
    NotFound(ErrorDetail),

    /// The request was invalid (HTTP 400, 404 with a specific error code, or
    /// another 4xx outside the dedicated variants).
    #[error("invalid request: {0}")]
    InvalidRequest(ErrorDetail),

    /// An idempotency key was reused with different parameters (HTTP 409).
    #[error("idempotency conflict: {0}")]
    IdempotencyConflict(ErrorDetail),

    /// The request was rate limited (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimited(ErrorDetail),

    /// The API itself failed (HTTP 5xx).
    #[error("API internal error: {0}")]
    ApiInternal(ErrorDetail),

    /// A 2xx response carried a body that could not be decoded, or a body of
    /// the wrong shape for the operation. Fatal to the call; not retried by
    /// the pipeline.
    #[error("malformed response (status {status}): {reason}")]
    MalformedResponse {
        /// The HTTP status of the response.
        status: u16,
        /// Why decoding failed.
        reason: String,
    },

    /// A webhook payload failed signature verification.
    #[error("signature verification failed: {reason}")]
    SignatureVerification {
        /// Why verification failed.
        reason: String,
    },
}

impl StripeError {
    /// Returns the HTTP status code, for variants that carry one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication(d)
            | Self::PermissionDenied(d)
            | Self::NotFound(d)
            | Self::InvalidRequest(d)
            | Self::IdempotencyConflict(d)
            | Self::RateLimited(d)
            | Self::ApiInternal(d) => Some(d.status),
            Self::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the API error detail, for API-level variants.
    #[must_use]
    pub const fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Authentication(d)
            | Self::PermissionDenied(d)
            | Self::NotFound(d)
            | Self::InvalidRequest(d)
            | Self::IdempotencyConflict(d)
            | Self::RateLimited(d)
            | Self::ApiInternal(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the machine-readable error code, if the server supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.detail().and_then(|d| d.code.as_deref())
    }

    /// Returns the offending parameter name, if the server identified one.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.detail().and_then(|d| d.param.as_deref())
    }

    /// Returns the request id, for API-level variants.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.detail().and_then(|d| d.request_id.as_deref())
    }
}

/// Best-effort parse of the error envelope from a non-2xx body.
///
/// A missing or unparseable envelope is not itself an error here; the status
/// code alone still determines the kind.
pub(crate) fn parse_error_payload(body: &str) -> Option<ErrorPayload> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error)
}

/// Maps a non-2xx status plus the decoded error envelope to a typed error.
///
/// See the module docs for the full table. `payload` is whatever
/// [`parse_error_payload`] recovered from the body; `request_id` comes from
/// the `Request-Id` response header.
#[must_use]
pub(crate) fn translate_status(
    status: u16,
    payload: Option<ErrorPayload>,
    request_id: Option<&str>,
) -> StripeError {
    let payload = payload.unwrap_or_default();
    let has_code = payload.code.is_some();
    let detail = ErrorDetail {
        status,
        error_type: payload.error_type,
        code: payload.code,
        message: payload.message,
        param: payload.param,
        request_id: request_id.map(ToString::to_string),
    };

    match status {
        401 => StripeError::Authentication(detail),
        403 => StripeError::PermissionDenied(detail),
        404 if !has_code => StripeError::NotFound(detail),
        409 => StripeError::IdempotencyConflict(detail),
        429 => StripeError::RateLimited(detail),
        500..=599 => StripeError::ApiInternal(detail),
        // 400, 404 with a specific code, and any other 4xx
        _ => StripeError::InvalidRequest(detail),
    }
}

// Verify StripeError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeError>();
};
