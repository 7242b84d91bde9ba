//! Integration tests for `ShoppingClient` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pricescout_search::{SearchError, ShoppingClient};

fn test_client(base_url: &str) -> ShoppingClient {
    ShoppingClient::with_base_url("test-key", 5, "pricescout-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_sends_pinned_parameters_and_returns_records() {
    let server = MockServer::start().await;

    let body = json!({
        "shopping_results": [
            {"title": "iPhone 15", "price": "$799.00", "link": "https://store.example.com/iphone"},
            {"title": "iPhone 15 case", "price": "$19.99", "link": "https://store.example.com/case"}
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_shopping"))
        .and(query_param("q", "iphone 15"))
        .and(query_param("hl", "en"))
        .and(query_param("gl", "us"))
        .and(query_param("num", "20"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.search("iphone 15").await.expect("should parse results");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"].as_str(), Some("iPhone 15"));
}

#[tokio::test]
async fn search_tolerates_alternate_envelope_field() {
    let server = MockServer::start().await;

    let body = json!({
        "inline_shopping_results": [
            {"title": "Widget", "price": "$5", "link": "https://store.example.com/widget"}
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.search("widget").await.expect("should parse results");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"].as_str(), Some("Widget"));
}

#[tokio::test]
async fn search_returns_empty_list_when_envelope_has_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"search_metadata": {"status": "Success"}})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client.search("nothing").await.expect("empty envelope is not an error");

    assert!(results.is_empty());
}

#[tokio::test]
async fn search_surfaces_non_success_status_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search("iphone").await.expect_err("429 should fail");

    match err {
        SearchError::UpstreamStatus { status, body } => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit exceeded");
        }
        other => panic!("expected UpstreamStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn search_surfaces_invalid_json_as_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search("iphone").await.expect_err("html body should fail");

    assert!(matches!(err, SearchError::Deserialize { .. }), "got: {err:?}");
}
