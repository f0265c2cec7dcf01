//! Configuration types for the Stripe API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`StripeConfig`]: The main configuration struct holding all client settings
//! - [`StripeConfigBuilder`]: A builder for constructing [`StripeConfig`] instances
//! - [`SecretKey`]: A validated secret key newtype with masked debug output
//! - [`ApiBase`]: A validated API base URL
//! - [`ApiVersion`]: The Stripe API version to pin requests to
//!
//! # Example
//!
//! ```rust
//! use stripe_api::{StripeConfig, SecretKey, ApiVersion};
//!
//! let config = StripeConfig::builder()
//!     .secret_key(SecretKey::new("sk_test_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiBase, SecretKey};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

/// Default request timeout, matching Stripe's official client libraries.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(80);

/// Configuration for the Stripe API client.
///
/// Holds the credentials and process-wide request defaults: the secret key,
/// the API base URL, the pinned API version, and the request timeout. The
/// configuration is immutable once built; per-call overrides go through
/// [`RequestOptions`](crate::rest::RequestOptions) instead.
///
/// # Thread Safety
///
/// `StripeConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripeConfig {
    secret_key: SecretKey,
    api_base: ApiBase,
    api_version: ApiVersion,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StripeConfig {
    /// Returns a new builder for constructing a `StripeConfig`.
    #[must_use]
    pub fn builder() -> StripeConfigBuilder {
        StripeConfigBuilder::default()
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// Returns the pinned API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the default request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the optional User-Agent prefix.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for [`StripeConfig`].
///
/// Only the secret key is required; all other fields have sensible defaults.
#[derive(Debug, Default)]
pub struct StripeConfigBuilder {
    secret_key: Option<SecretKey>,
    api_base: Option<ApiBase>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StripeConfigBuilder {
    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the API base URL. Defaults to `https://api.stripe.com`.
    #[must_use]
    pub fn api_base(mut self, base: ApiBase) -> Self {
        self.api_base = Some(base);
        self
    }

    /// Sets the pinned API version. Defaults to [`ApiVersion::latest`].
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the default request timeout. Defaults to 80 seconds.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a User-Agent prefix prepended to the library identifier.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no secret key was set.
    pub fn build(self) -> Result<StripeConfig, ConfigError> {
        let secret_key = self
            .secret_key
            .ok_or(ConfigError::MissingRequiredField { field: "secret_key" })?;

        Ok(StripeConfig {
            secret_key,
            api_base: self.api_base.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

// Verify StripeConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StripeConfig>();
};
