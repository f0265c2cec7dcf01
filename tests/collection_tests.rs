//! Integration tests for lazy pagination against a mock HTTP server.

use stripe_api::{ApiBase, Client, RequestParams, SecretKey, StripeConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    let config = StripeConfig::builder()
        .secret_key(SecretKey::new("sk_test_abc").unwrap())
        .api_base(ApiBase::new(server.uri()).unwrap())
        .build()
        .unwrap();
    Client::new(config).unwrap()
}

fn list_body(ids: &[&str], has_more: bool) -> serde_json::Value {
    let data: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| serde_json::json!({"id": id, "object": "account"}))
        .collect();
    serde_json::json!({
        "object": "list",
        "data": data,
        "has_more": has_more,
        "url": "/v1/accounts"
    })
}

#[tokio::test]
async fn test_final_page_exhausts_with_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["acct_1"], false)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut accounts = client.accounts().all(None, None).unwrap();

    let page = accounts.next_page().await.unwrap().unwrap();
    assert_eq!(page.len(), 1);
    assert!(accounts.is_exhausted());

    // Further calls return None without another request; expect(1) verifies
    assert!(accounts.next_page().await.unwrap().is_none());
}

#[tokio::test]
async fn test_second_page_requested_with_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("starting_after", "acct_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["acct_3"], false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_body(&["acct_1", "acct_2"], true)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut accounts = client
        .accounts()
        .all(Some(RequestParams::new().with("limit", 2)), None)
        .unwrap();

    let first = accounts.next_page().await.unwrap().unwrap();
    assert_eq!(first.len(), 2);
    assert!(!accounts.is_exhausted());

    let second = accounts.next_page().await.unwrap().unwrap();
    assert_eq!(second[0].id, "acct_3");
    assert!(accounts.is_exhausted());
}

#[tokio::test]
async fn test_construction_is_lazy() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    let _accounts = client.accounts().all(None, None).unwrap();
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_nested_list_paginates_under_parent_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/acct_1/persons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [{"id": "person_1", "object": "person"}],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut persons = client.accounts().all_persons("acct_1", None, None).unwrap();

    let page = persons.next_page().await.unwrap().unwrap();
    assert_eq!(page[0].id, "person_1");
}

#[tokio::test]
async fn test_failed_page_fetch_is_retryable_from_same_position() {
    let server = MockServer::start().await;
    // First page succeeds; limited to one use so later requests fall through
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["acct_1"], true)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // Second fetch rate limited once, then succeeds on retry
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("starting_after", "acct_1"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"type": "rate_limit_error", "message": "Too many requests"}
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut accounts = client.accounts().all(None, None).unwrap();
    accounts.next_page().await.unwrap();

    let error = accounts.next_page().await.unwrap_err();
    assert!(matches!(error, stripe_api::StripeError::RateLimited(_)));
    assert!(!accounts.is_exhausted());

    // Retry resumes from the same cursor
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("starting_after", "acct_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["acct_2"], false)))
        .expect(1)
        .mount(&server)
        .await;

    let page = accounts.next_page().await.unwrap().unwrap();
    assert_eq!(page[0].id, "acct_2");
}

#[tokio::test]
async fn test_collect_all_walks_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("starting_after", "acct_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_body(&["acct_3"], false)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(list_body(&["acct_1", "acct_2"], true)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let all = client
        .accounts()
        .all(None, None)
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["acct_1", "acct_2", "acct_3"]);
}
