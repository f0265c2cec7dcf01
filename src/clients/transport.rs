//! The transport boundary.
//!
//! Everything network-level lives behind the [`Transport`] trait: connection
//! pooling, TLS, timeouts, and the actual exchange. The request pipeline and
//! [`Collection`](crate::rest::Collection) only ever call
//! [`Transport::send`] and branch on its two outcomes: a well-formed
//! [`RawResponse`] (any status) or a [`TransportError`] when no response was
//! obtained at all.

use thiserror::Error;

use crate::clients::request::ApiRequest;
use crate::clients::response::RawResponse;

/// A failure below the HTTP layer: the request never produced a response.
///
/// Connection refusals, DNS failures, TLS problems, and timeouts all land
/// here. These are distinct from non-2xx responses, which arrive as
/// [`RawResponse`] values and are classified by the error translator.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A network-level error reported by the HTTP stack.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded its configured timeout.
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),
}

impl TransportError {
    /// Returns `true` if this failure was a timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// Classifies a reqwest error into the timeout or general network branch.
    #[must_use]
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Network(error)
        }
    }
}

/// Performs the network exchange for one API request.
///
/// Implementations must be safe to invoke concurrently; the pipeline places
/// no upper bound on in-flight calls and delegates connection-level limits to
/// the implementation. Every `send` is expected to honor the timeout carried
/// in the request's effective options, so no call blocks indefinitely.
///
/// The production implementation is
/// [`HttpClient`](crate::clients::HttpClient); tests substitute in-process
/// doubles to observe exactly which requests the pipeline issues.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no HTTP response was obtained;
    /// non-2xx statuses are returned as `Ok` and classified downstream.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}
