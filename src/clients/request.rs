//! HTTP request types handed to the transport.
//!
//! An [`ApiRequest`] is the fully-resolved description of one API call: the
//! verb, the rendered path, the caller's parameters, and the effective
//! per-call options after merging with process-wide defaults. The generated
//! resource layer produces these; it never talks to the network itself.

use std::fmt;

use crate::rest::{RequestOptions, RequestParams};

/// HTTP methods used by the Stripe API.
///
/// Stripe's REST surface uses GET for reads and list operations, POST for
/// creates and updates, and DELETE for removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving and listing resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A fully-resolved API request, ready for the transport.
///
/// The path has already been rendered (identifiers interpolated and
/// percent-encoded) and `options` are effective options: process-wide
/// defaults merged with any per-call overrides.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The rendered request path (e.g., `/v1/accounts/acct_123`).
    pub path: String,
    /// Caller-supplied parameters; query string for GET/DELETE, body for POST.
    pub params: Option<RequestParams>,
    /// Effective per-call options.
    pub options: RequestOptions,
}

impl ApiRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(
        method: HttpMethod,
        path: String,
        params: Option<RequestParams>,
        options: RequestOptions,
    ) -> Self {
        Self {
            method,
            path,
            params,
            options,
        }
    }
}

// Verify request types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<ApiRequest>();
};
