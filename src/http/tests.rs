//! Tests for the HTTP client module

use super::*;
use crate::auth::Credential;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(ApiClientConfig::new(base_url)).unwrap()
}

#[test]
fn test_api_client_config_defaults() {
    let config = ApiClientConfig::new("https://api.example.com");
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.user_agent.starts_with("airbyte-status/"));
}

#[test]
fn test_api_client_config_builder() {
    let config = ApiClientConfig::new("https://api.example.com")
        .timeout(Duration::from_secs(5))
        .user_agent("test-agent/1.0");

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_get_json_sends_bearer_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("workspaceIds", "ws-1"))
        .and(header("Authorization", "Bearer tok-1"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let credential = Credential::new("tok-1");

    let body: serde_json::Value = client
        .get_json("/connections", &[("workspaceIds", "ws-1")], &credential)
        .await
        .unwrap();

    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_post_json_sends_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connections/get"))
        .and(wiremock::matchers::body_json(serde_json::json!({
            "connectionId": "conn-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "connectionId": "conn-1",
            "status": "active"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let credential = Credential::new("tok-1");

    let body: serde_json::Value = client
        .post_json(
            "/connections/get",
            serde_json::json!({"connectionId": "conn-1"}),
            &credential,
        )
        .await
        .unwrap();

    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn test_error_status_captures_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden workspace"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let credential = Credential::new("tok-1");

    let err = client
        .get_json::<serde_json::Value>("/connections", &[], &credential)
        .await
        .unwrap_err();

    match err {
        crate::error::Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden workspace");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_build_url_joins_and_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    // Trailing slash on base, leading slash on path
    let client = test_client(&format!("{}/", mock_server.uri()));
    let credential = Credential::new("tok-1");
    let body: serde_json::Value = client.get_json("/health", &[], &credential).await.unwrap();
    assert_eq!(body["ok"], true);

    // Full URL bypasses the base
    let client = test_client("https://unused.example.com");
    let body: serde_json::Value = client
        .get_json(&format!("{}/health", mock_server.uri()), &[], &credential)
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
}
