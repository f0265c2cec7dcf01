//! Integration tests for the account service against a mock HTTP server.
//!
//! These tests verify path construction, header handling, request bodies,
//! and error translation end-to-end through the production transport.

use stripe_api::{ApiBase, Client, RequestOptions, RequestParams, SecretKey, StripeConfig, StripeError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn test_client(server: &MockServer) -> Client {
    let config = StripeConfig::builder()
        .secret_key(SecretKey::new("sk_test_abc").unwrap())
        .api_base(ApiBase::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn account_body(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "account",
        "type": "custom",
        "charges_enabled": true
    })
}

// ============================================================================
// Path Construction Tests
// ============================================================================

#[tokio::test]
async fn test_retrieve_without_id_hits_singular_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct_self")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let account = client.accounts().retrieve(None, None, None).await.unwrap();

    assert_eq!(account.id, "acct_self");
}

#[tokio::test]
async fn test_retrieve_with_id_hits_plural_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct_1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let account = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap();

    assert_eq!(account.id, "acct_1");
}

#[tokio::test]
async fn test_nested_delete_renders_both_identifiers() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/accounts/acct_1/external_accounts/ba_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ba_9",
            "object": "bank_account",
            "deleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let deleted = client
        .accounts()
        .delete_external_account("acct_1", "ba_9", None, None)
        .await
        .unwrap();

    assert_eq!(deleted.id, "ba_9");
    assert_eq!(deleted.deleted, Some(true));
}

#[tokio::test]
async fn test_identifier_is_percent_encoded_in_path() {
    let server = MockServer::start().await;
    // The slash in the identifier must not create an extra path segment
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct/1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .accounts()
        .retrieve(Some("acct/1"), None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_identifier_fails_without_network_call() {
    let server = MockServer::start().await;
    // No mocks mounted; any request would 404 and the error kind would differ
    let client = test_client(&server);

    let result = client.accounts().retrieve(Some(""), None, None).await;
    assert!(matches!(
        result,
        Err(StripeError::InvalidIdentifier { .. })
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Header and Body Tests
// ============================================================================

#[tokio::test]
async fn test_standard_headers_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .and(header("Authorization", "Bearer sk_test_abc"))
        .and(header(
            "Stripe-Version",
            stripe_api::ApiVersion::latest().as_ref(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct_self")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.accounts().retrieve(None, None, None).await.unwrap();
}

#[tokio::test]
async fn test_idempotency_key_header_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts"))
        .and(header("Idempotency-Key", "signup-7421"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct_new")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .accounts()
        .create(
            None,
            Some(RequestOptions::new().with_idempotency_key("signup-7421")),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_sends_params_as_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts/acct_1/persons"))
        .and(body_json(serde_json::json!({
            "first_name": "Jenny",
            "last_name": "Rosen"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "person_1",
            "object": "person",
            "first_name": "Jenny"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let person = client
        .accounts()
        .create_person(
            "acct_1",
            Some(
                RequestParams::new()
                    .with("first_name", "Jenny")
                    .with("last_name", "Rosen"),
            ),
            None,
        )
        .await
        .unwrap();

    assert_eq!(person.first_name.as_deref(), Some("Jenny"));
}

#[tokio::test]
async fn test_per_call_api_key_overrides_configured_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .and(header("Authorization", "Bearer sk_test_other"))
        .respond_with(ResponseTemplate::new(200).set_body_json(account_body("acct_self")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .accounts()
        .retrieve(
            None,
            None,
            Some(RequestOptions::new().with_api_key("sk_test_other")),
        )
        .await
        .unwrap();
}

// ============================================================================
// Error Translation Tests
// ============================================================================

fn error_body(error_type: &str, code: Option<&str>, message: &str) -> serde_json::Value {
    let mut error = serde_json::json!({
        "type": error_type,
        "message": message
    });
    if let Some(code) = code {
        error["code"] = serde_json::json!(code);
    }
    serde_json::json!({ "error": error })
}

async fn mock_status(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_1"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(body)
                .insert_header("Request-Id", "req_test_1"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_401_is_authentication_error() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        401,
        error_body("invalid_request_error", None, "Invalid API Key provided"),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::Authentication(_)));
    assert_eq!(error.request_id(), Some("req_test_1"));
}

#[tokio::test]
async fn test_404_without_code_is_not_found() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        404,
        error_body("invalid_request_error", None, "Unrecognized request URL"),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::NotFound(_)));
}

#[tokio::test]
async fn test_404_with_code_is_invalid_request() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        404,
        error_body(
            "invalid_request_error",
            Some("resource_missing"),
            "No such account: 'acct_1'",
        ),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::InvalidRequest(_)));
    assert_eq!(error.code(), Some("resource_missing"));
}

#[tokio::test]
async fn test_409_is_idempotency_conflict() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        409,
        error_body(
            "idempotency_error",
            None,
            "Keys for idempotent requests can only be used with the same parameters",
        ),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::IdempotencyConflict(_)));
}

#[tokio::test]
async fn test_429_is_rate_limited() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        429,
        error_body("rate_limit_error", Some("rate_limit"), "Too many requests"),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::RateLimited(_)));
    assert_eq!(error.status(), Some(429));
}

#[tokio::test]
async fn test_500_is_api_internal() {
    let server = MockServer::start().await;
    mock_status(
        &server,
        500,
        error_body("api_error", None, "Something went wrong on Stripe's end"),
    )
    .await;

    let client = test_client(&server);
    let error = client
        .accounts()
        .retrieve(Some("acct_1"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, StripeError::ApiInternal(_)));
}

#[tokio::test]
async fn test_html_body_on_2xx_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let error = client.accounts().retrieve(None, None, None).await.unwrap_err();

    assert!(matches!(
        error,
        StripeError::MalformedResponse { status: 200, .. }
    ));
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    // Start a server only to learn a free port, then drop it. An unpooled
    // server is required: pooled servers keep listening after drop.
    let server = MockServer::builder().start().await;
    let base = server.uri();
    drop(server);

    let config = StripeConfig::builder()
        .secret_key(SecretKey::new("sk_test_abc").unwrap())
        .api_base(ApiBase::new(base).unwrap())
        .build()
        .unwrap();
    let client = Client::new(config).unwrap();

    let error = client.accounts().retrieve(None, None, None).await.unwrap_err();
    assert!(matches!(error, StripeError::Connection(_)));
}
