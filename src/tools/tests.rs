//! Tests for the tool surface

use super::*;
use crate::checker::Checkers;
use crate::config::Config;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checkers_for(server: &MockServer) -> Checkers {
    let config = Config::from_lookup(|var| match var {
        "AIRBYTE_WORKSPACE_ID" => Some("ws-1".to_string()),
        "AIRBYTE_API_KEY" => Some("tok".to_string()),
        "AIRBYTE_API_URL" => Some(server.uri()),
        _ => None,
    })
    .unwrap();
    Checkers::from_config(&config).unwrap()
}

#[test]
fn test_definitions_list_both_tools() {
    let defs = definitions();
    let tools = defs["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec![CHECK_CONNECTION_TOOL, CHECK_SOURCE_TOOL]);

    // Both arguments are optional strings
    for tool in tools {
        let schema = &tool["inputSchema"];
        assert_eq!(schema["type"], "object");
        assert!(schema.get("required").is_none());
    }
}

#[tokio::test]
async fn test_dispatch_routes_connection_tool() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("workspaceIds", "ws-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let checkers = checkers_for(&server);
    let envelope = dispatch(CHECK_CONNECTION_TOOL, &json!({}), &checkers).await;

    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["connections"], json!([]));
}

#[tokio::test]
async fn test_dispatch_passes_source_name_argument() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let checkers = checkers_for(&server);
    let envelope = dispatch(
        CHECK_SOURCE_TOOL,
        &json!({"source_name": "Stripe"}),
        &checkers,
    )
    .await;

    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["message"], "❌ Source 'Stripe' not found");
}

#[tokio::test]
async fn test_dispatch_treats_empty_name_as_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let checkers = checkers_for(&server);
    let envelope = dispatch(CHECK_SOURCE_TOOL, &json!({"source_name": ""}), &checkers).await;

    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["sources"], json!([]));
}

#[tokio::test]
async fn test_dispatch_unknown_tool_yields_error_envelope() {
    let server = MockServer::start().await;
    let checkers = checkers_for(&server);

    let envelope = dispatch("no_such_tool", &json!({}), &checkers).await;

    assert_eq!(envelope["status"], "error");
    assert!(envelope["message"]
        .as_str()
        .unwrap()
        .contains("no_such_tool"));
}
