//! Integration tests for the TestRail client against a mock server

use serde_json::json;
use testrail_client::{ClientError, TestRailClient};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_returns_upstream_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 123, "status": "active"})),
        )
        .mount(&server)
        .await;

    let client = TestRailClient::new(server.uri(), "user", "key");
    let run = client.get_run(123).await.unwrap();
    assert_eq!(run, json!({"id": 123, "status": "active"}));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/index.php");
    assert_eq!(requests[0].url.query(), Some("/api/v2/get_run/123"));
}

#[tokio::test]
async fn sends_basic_auth_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = TestRailClient::new(server.uri(), "user", "key");
    client.get_projects().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    // base64("user:key")
    assert_eq!(headers.get("authorization").unwrap(), "Basic dXNlcjprZXk=");
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
}

#[tokio::test]
async fn non_success_status_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&server)
        .await;

    let client = TestRailClient::new(server.uri(), "user", "key");
    let err = client.get_case(9).await.unwrap_err();

    match &err {
        ClientError::Api { status, body } => {
            assert_eq!(*status, 404);
            assert_eq!(body, "Not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert_eq!(err.to_string(), "TestRail API error (404): Not found");
}

#[tokio::test]
async fn invalid_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = TestRailClient::new(server.uri(), "user", "key");
    let err = client.get_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn cases_request_carries_suite_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = TestRailClient::new(server.uri(), "user", "key");
    client.get_cases(5, Some(7)).await.unwrap();
    client.get_cases(5, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("/api/v2/get_cases/5&suite_id=7"));
    assert_eq!(requests[1].url.query(), Some("/api/v2/get_cases/5"));
}
