//! The API client tying configuration, transport, and pipeline together.
//!
//! [`Client`] is the entry point for all API calls. It holds one transport
//! and the process-wide default [`RequestOptions`], both read-only after
//! construction; per-call overrides are merged on top for each request. The
//! resource services borrow the client and route every operation through
//! [`Client::execute`], so path rendering, option merging, and response
//! classification happen in exactly one place.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::clients::http_client::HttpClient;
use crate::clients::request::ApiRequest;
use crate::clients::response::RawResponse;
use crate::clients::transport::Transport;
use crate::config::StripeConfig;
use crate::rest::resources::AccountService;
use crate::rest::response::{decode_response, DecodedResult};
use crate::rest::{build_path, Collection, Operation, RequestOptions, RequestParams, StripeError};

/// A Stripe API client.
///
/// Generic over the transport so tests can substitute in-process doubles;
/// production code uses the default [`HttpClient`].
///
/// # Example
///
/// ```rust,no_run
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use stripe_api::{Client, SecretKey, StripeConfig};
///
/// let config = StripeConfig::builder()
///     .secret_key(SecretKey::new("sk_test_123")?)
///     .build()?;
/// let client = Client::new(config)?;
///
/// let account = client.accounts().retrieve(None, None, None).await?;
/// println!("{:?}", account.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<C: Transport = HttpClient> {
    transport: C,
    defaults: RequestOptions,
}

impl Client<HttpClient> {
    /// Creates a client with the production HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Connection`] if the HTTP transport could not be
    /// constructed.
    pub fn new(config: StripeConfig) -> Result<Self, StripeError> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(transport))
    }
}

impl<C: Transport> Client<C> {
    /// Creates a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(transport: C) -> Self {
        Self {
            transport,
            defaults: RequestOptions::new(),
        }
    }

    /// Replaces the process-wide default options.
    ///
    /// Per-call options are merged over these; see [`RequestOptions::merge`].
    #[must_use]
    pub fn with_default_options(mut self, defaults: RequestOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Returns the account service.
    #[must_use]
    pub const fn accounts(&self) -> AccountService<'_, C> {
        AccountService::new(self)
    }

    /// Renders the path, merges options, and performs the exchange, returning
    /// the raw response for the caller to classify.
    async fn dispatch(
        &self,
        operation: &Operation,
        ids: &[&str],
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<RawResponse, StripeError> {
        let path = build_path(operation.template, ids)?;
        let effective = RequestOptions::merge(&self.defaults, &options.unwrap_or_default());
        debug!(operation = operation.name, %path, "executing operation");

        let request = ApiRequest::new(operation.method, path, params, effective);
        Ok(self.transport.send(request).await?)
    }

    /// Executes one operation through the shared pipeline.
    ///
    /// Renders the path, merges options, performs the exchange, and
    /// classifies the response. An arity or identifier error is returned
    /// before any network activity.
    ///
    /// # Errors
    ///
    /// Any variant of [`StripeError`] except `SignatureVerification`.
    pub async fn execute(
        &self,
        operation: &Operation,
        ids: &[&str],
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<DecodedResult, StripeError> {
        let response = self.dispatch(operation, ids, params, options).await?;
        decode_response(&response)
    }

    /// Executes an operation expected to return a single object.
    ///
    /// # Errors
    ///
    /// In addition to [`execute`](Self::execute) errors, returns
    /// [`StripeError::MalformedResponse`] if the body decoded to a list
    /// envelope or did not match `T`.
    pub async fn execute_object<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        ids: &[&str],
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<T, StripeError> {
        let response = self.dispatch(operation, ids, params, options).await?;
        match decode_response(&response)? {
            DecodedResult::Object(value) => {
                serde_json::from_value(value).map_err(|e| StripeError::MalformedResponse {
                    status: response.status,
                    reason: format!("object did not decode: {e}"),
                })
            }
            DecodedResult::Page(_) => Err(StripeError::MalformedResponse {
                status: response.status,
                reason: "expected a single object, got a list envelope".to_string(),
            }),
        }
    }

    /// Prepares a lazy collection for a list operation.
    ///
    /// No request is issued here; the first
    /// [`next_page`](Collection::next_page) call fetches the first page.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::InvalidPath`] or
    /// [`StripeError::InvalidIdentifier`] if the template and identifiers
    /// disagree.
    pub fn list<T: DeserializeOwned>(
        &self,
        operation: &Operation,
        ids: &[&str],
        params: Option<RequestParams>,
        options: Option<RequestOptions>,
    ) -> Result<Collection<'_, C, T>, StripeError> {
        let path = build_path(operation.template, ids)?;
        let effective = RequestOptions::merge(&self.defaults, &options.unwrap_or_default());
        Ok(Collection::new(&self.transport, path, params, effective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, RawResponse, TransportError};
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize)]
    struct Stub {
        id: String,
    }

    struct RecordingTransport {
        requests: Mutex<Vec<ApiRequest>>,
        status: u16,
        body: &'static str,
    }

    impl RecordingTransport {
        fn returning(body: &'static str) -> Self {
            Self::with_status(200, body)
        }

        fn with_status(status: u16, body: &'static str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                status,
                body,
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> ApiRequest {
            self.requests.lock().unwrap().last().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(RawResponse::new(
                self.status,
                HashMap::new(),
                self.body.to_string(),
            ))
        }
    }

    const RETRIEVE: Operation = Operation::get("retrieve", "/v1/accounts/{}", 1);

    #[tokio::test]
    async fn test_arity_mismatch_never_reaches_transport() {
        let transport = RecordingTransport::returning("{}");
        let client = Client::with_transport(transport);

        let result = client.execute(&RETRIEVE, &[], None, None).await;
        assert!(matches!(result, Err(StripeError::InvalidPath { .. })));
        assert_eq!(client.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_identifier_never_reaches_transport() {
        let transport = RecordingTransport::returning("{}");
        let client = Client::with_transport(transport);

        let result = client.execute(&RETRIEVE, &[" "], None, None).await;
        assert!(matches!(result, Err(StripeError::InvalidIdentifier { .. })));
        assert_eq!(client.transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_default_options_reach_transport_merged() {
        let transport = RecordingTransport::returning(r#"{"id":"acct_1"}"#);
        let client = Client::with_transport(transport)
            .with_default_options(RequestOptions::new().with_api_version("2023-10-16"));

        let options = RequestOptions::new().with_idempotency_key("k-1");
        client
            .execute(&RETRIEVE, &["acct_1"], None, Some(options))
            .await
            .unwrap();

        let sent = client.transport.last_request();
        assert_eq!(sent.options.api_version.as_deref(), Some("2023-10-16"));
        assert_eq!(sent.options.idempotency_key.as_deref(), Some("k-1"));
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.path, "/v1/accounts/acct_1");
    }

    #[tokio::test]
    async fn test_execute_object_decodes_into_type() {
        let transport = RecordingTransport::returning(r#"{"id":"acct_1"}"#);
        let client = Client::with_transport(transport);

        let stub: Stub = client
            .execute_object(&RETRIEVE, &["acct_1"], None, None)
            .await
            .unwrap();
        assert_eq!(stub.id, "acct_1");
    }

    #[tokio::test]
    async fn test_execute_object_rejects_list_envelope() {
        let transport =
            RecordingTransport::returning(r#"{"object":"list","data":[],"has_more":false}"#);
        let client = Client::with_transport(transport);

        let result: Result<Stub, _> = client.execute_object(&RETRIEVE, &["acct_1"], None, None).await;
        assert!(matches!(
            result,
            Err(StripeError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_execute_object_decode_failure_reports_real_status() {
        // Valid JSON on a 201, but the shape does not match Stub
        let transport = RecordingTransport::with_status(201, r#"{"identifier":"acct_1"}"#);
        let client = Client::with_transport(transport);

        let result: Result<Stub, _> = client.execute_object(&RETRIEVE, &["acct_1"], None, None).await;
        assert!(matches!(
            result,
            Err(StripeError::MalformedResponse { status: 201, .. })
        ));
    }

    #[tokio::test]
    async fn test_list_is_lazy() {
        let transport = RecordingTransport::returning("{}");
        let client = Client::with_transport(transport);

        const ALL: Operation = Operation::get("all", "/v1/accounts", 0);
        let _collection = client.list::<Stub>(&ALL, &[], None, None).unwrap();
        assert_eq!(client.transport.request_count(), 0);
    }
}
