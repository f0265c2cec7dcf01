//! Raw HTTP response representation.
//!
//! A [`RawResponse`] is the status/headers/body triple returned by the
//! transport before any interpretation. It is owned by the call that produced
//! it and discarded once the response mapper has classified it; nothing in
//! the pipeline caches raw responses across calls.

use std::collections::HashMap;

/// A raw HTTP response from the Stripe API.
///
/// Header names are lowercased on construction; a header may carry multiple
/// values. The body is kept as unparsed text so the response mapper decides
/// how (and whether) to decode it.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// The lookup is by lowercase name, matching how headers are stored.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Request-Id` header value, if present.
    ///
    /// Stripe attaches a request id to every response; it should be included
    /// in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("request-id")
    }
}
