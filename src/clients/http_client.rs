//! The production HTTP transport, backed by `reqwest`.
//!
//! [`HttpClient`] owns a pooled `reqwest` client and the process-wide
//! [`StripeConfig`]. For each request it resolves the effective credentials
//! and version (per-call overrides first, configuration second), attaches the
//! standard headers, and performs the exchange. Any non-response failure is
//! classified into [`TransportError`] for the pipeline to wrap.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::clients::request::{ApiRequest, HttpMethod};
use crate::clients::response::RawResponse;
use crate::clients::transport::{Transport, TransportError};
use crate::config::StripeConfig;
use crate::rest::RequestOptions;

/// The library identifier sent in the `User-Agent` header.
const USER_AGENT: &str = concat!("stripe-api-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for the Stripe API.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
/// Construct once per process and reuse it: each `HttpClient` maintains its
/// own pool, and per-request construction defeats connection reuse.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    config: StripeConfig,
}

impl HttpClient {
    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying HTTP client
    /// could not be constructed.
    pub fn new(config: StripeConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this transport was built with.
    #[must_use]
    pub const fn config(&self) -> &StripeConfig {
        &self.config
    }

    /// Resolves the headers for one request from the effective options.
    ///
    /// Per-call overrides win over configuration; extra headers come last and
    /// cannot displace `Authorization`.
    fn build_headers(&self, options: &RequestOptions) -> Vec<(String, String)> {
        let api_key = options
            .api_key
            .as_deref()
            .unwrap_or_else(|| self.config.secret_key().as_ref());
        let api_version = options
            .api_version
            .as_deref()
            .unwrap_or_else(|| self.config.api_version().as_ref());
        let user_agent = match self.config.user_agent_prefix() {
            Some(prefix) => format!("{prefix} {USER_AGENT}"),
            None => USER_AGENT.to_string(),
        };

        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {api_key}")),
            ("Stripe-Version".to_string(), api_version.to_string()),
            ("User-Agent".to_string(), user_agent),
        ];
        if let Some(key) = &options.idempotency_key {
            headers.push(("Idempotency-Key".to_string(), key.clone()));
        }
        for (name, value) in &options.headers {
            if !name.eq_ignore_ascii_case("authorization") {
                headers.push((name.clone(), value.clone()));
            }
        }
        headers
    }

    fn effective_timeout(&self, options: &RequestOptions) -> Duration {
        options.timeout.unwrap_or_else(|| self.config.timeout())
    }
}

/// Lowers reqwest's header map into the owned, lowercase-keyed form.
///
/// Values that are not valid UTF-8 are skipped; the API does not emit any.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut parsed: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            parsed
                .entry(name.as_str().to_ascii_lowercase())
                .or_default()
                .push(value.to_string());
        }
    }
    parsed
}

impl Transport for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = format!("{}{}", self.config.api_base(), request.path);
        debug!(method = %request.method, %url, "sending request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        for (name, value) in self.build_headers(&request.options) {
            builder = builder.header(name, value);
        }
        builder = builder.timeout(self.effective_timeout(&request.options));

        if let Some(params) = &request.params {
            if !params.is_empty() {
                builder = match request.method {
                    HttpMethod::Post => builder.json(&params.to_value()),
                    HttpMethod::Get | HttpMethod::Delete => builder.query(&params.query_pairs()),
                };
            }
        }

        let response = builder.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status().as_u16();
        let headers = parse_response_headers(response.headers());
        let body = response
            .text()
            .await
            .map_err(TransportError::from_reqwest)?;

        if status >= 400 {
            warn!(status, path = %request.path, "request failed");
        } else {
            debug!(status, bytes = body.len(), "received response");
        }
        Ok(RawResponse::new(status, headers, body))
    }
}
