//! Per-call request options and their merge with process-wide defaults.
//!
//! Every field of [`RequestOptions`] is an optional override. The client
//! holds one defaults value (derived from configuration, read-only after
//! construction) and merges per-call overrides on top of it for each request.
//! The merge is right-biased and pure: the most specific value wins, and
//! neither input is mutated.

use std::collections::HashMap;
use std::time::Duration;

/// Optional per-call overrides layered on process-wide defaults.
///
/// # Merge semantics
///
/// [`RequestOptions::merge`] is right-biased per field; header maps are
/// merged key-wise (an override key replaces the same-named default key,
/// other default keys survive). Merging with an empty override returns the
/// defaults unchanged, and merging the same override twice is idempotent.
///
/// # Example
///
/// ```rust
/// use stripe_api::RequestOptions;
///
/// let opts = RequestOptions::new()
///     .with_idempotency_key("order-7421")
///     .with_header("X-Trace-Id", "trace-1");
/// assert_eq!(opts.idempotency_key.as_deref(), Some("order-7421"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the configured secret key for this call.
    pub api_key: Option<String>,
    /// Overrides the pinned `Stripe-Version` for this call.
    pub api_version: Option<String>,
    /// Idempotency key letting the server de-duplicate retried writes.
    pub idempotency_key: Option<String>,
    /// Extra headers; merged key-wise over the defaults' headers.
    pub headers: HashMap<String, String>,
    /// Overrides the request timeout for this call.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates an empty options value (no overrides).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-call API key override.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the per-call API version override.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the idempotency key for this call.
    #[must_use]
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Adds one extra header for this call.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the per-call timeout override.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Merges `overrides` over `defaults`, producing a new effective value.
    ///
    /// Every explicitly set field in `overrides` replaces the corresponding
    /// default; unset fields fall through. Headers are merged key-wise.
    /// Neither input is mutated.
    #[must_use]
    pub fn merge(defaults: &Self, overrides: &Self) -> Self {
        let mut headers = defaults.headers.clone();
        for (name, value) in &overrides.headers {
            headers.insert(name.clone(), value.clone());
        }

        Self {
            api_key: overrides.api_key.clone().or_else(|| defaults.api_key.clone()),
            api_version: overrides
                .api_version
                .clone()
                .or_else(|| defaults.api_version.clone()),
            idempotency_key: overrides
                .idempotency_key
                .clone()
                .or_else(|| defaults.idempotency_key.clone()),
            headers,
            timeout: overrides.timeout.or(defaults.timeout),
        }
    }
}

// Verify RequestOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestOptions>();
};
