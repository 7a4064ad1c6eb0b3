//! Integration tests for the awaitable send path.
//!
//! These tests run the client against a wiremock server and verify URL
//! construction, header injection, response classification, and error
//! body parsing.

use serde_json::json;
use td_postback::{Endpoint, PostbackClient, SendError, WriteKey, WRITE_KEY_HEADER};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given mock server.
fn create_test_client(server: &MockServer, write_key: &str) -> PostbackClient {
    PostbackClient::with_endpoint(
        WriteKey::new(write_key).unwrap(),
        Endpoint::new(server.uri()).unwrap(),
    )
}

#[tokio::test]
async fn test_send_posts_to_event_path_with_auth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/postback/v3/event/mydb/events"))
        .and(header(WRITE_KEY_HEADER, "secret-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"event": "signup", "count": 1})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "secret-key");
    let result = client
        .send("mydb", "events", &json!({"event": "signup", "count": 1}))
        .await;

    assert_ok!(result);
}

#[tokio::test]
async fn test_send_succeeds_for_all_2xx_statuses() {
    for code in [200_u16, 201, 202, 204] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;

        let client = create_test_client(&server, "key");
        let result = client.send("mydb", "events", &json!({})).await;
        assert!(result.is_ok(), "expected success for status {code}");
    }
}

#[tokio::test]
async fn test_send_accepts_empty_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    assert!(client.send("mydb", "events", &json!({})).await.is_ok());
}

#[tokio::test]
async fn test_404_with_empty_body_yields_empty_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    let error = client
        .send("missing-db", "events", &json!({"a": 1}))
        .await
        .unwrap_err();

    match error {
        SendError::Api(e) => {
            assert_eq!(e.http_status, 404);
            assert_eq!(e.http_response, Some(json!({})));
        }
        SendError::Network(e) => panic!("expected API error, got network error: {e}"),
    }
}

#[tokio::test]
async fn test_500_with_unparsable_body_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    let error = client.send("mydb", "events", &json!({})).await.unwrap_err();

    match error {
        SendError::Api(e) => {
            assert_eq!(e.http_status, 500);
            assert!(e.http_response.is_none());
        }
        SendError::Network(e) => panic!("expected API error, got network error: {e}"),
    }
}

#[tokio::test]
async fn test_error_body_is_parsed_into_the_error_value() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "invalid table name"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    let error = client.send("mydb", "bad table", &json!({})).await.unwrap_err();

    match error {
        SendError::Api(e) => {
            assert_eq!(e.http_status, 400);
            assert_eq!(e.http_response, Some(json!({"error": "invalid table name"})));
        }
        SendError::Network(e) => panic!("expected API error, got network error: {e}"),
    }
}

#[tokio::test]
async fn test_redirects_are_treated_as_failure() {
    let server = MockServer::start().await;

    // The client must classify the redirect itself rather than follow it.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(307).insert_header("Location", "/elsewhere"))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    let error = client.send("mydb", "events", &json!({})).await.unwrap_err();

    match error {
        SendError::Api(e) => assert_eq!(e.http_status, 307),
        SendError::Network(e) => panic!("expected API error, got network error: {e}"),
    }
}

#[tokio::test]
async fn test_path_segments_are_not_url_encoded() {
    let server = MockServer::start().await;

    // Identifiers are substituted verbatim; a name with a slash addresses
    // a different path entirely and the server answers 404.
    Mock::given(method("POST"))
        .and(path("/postback/v3/event/analytics/pageviews"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    assert!(client
        .send("analytics", "pageviews", &json!({"url": "/home"}))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_network_error() {
    // Nothing listens on this port.
    let client = PostbackClient::with_endpoint(
        WriteKey::new("key").unwrap(),
        Endpoint::new("http://127.0.0.1:1").unwrap(),
    );

    let error = client.send("mydb", "events", &json!({})).await.unwrap_err();
    assert!(matches!(error, SendError::Network(_)));
}

#[tokio::test]
async fn test_concurrent_sends_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/postback/v3/event/mydb/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/postback/v3/event/mydb/broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_test_client(&server, "key");
    let ok_record = json!({"n": 1});
    let broken_record = json!({"n": 2});
    let (ok, broken) = tokio::join!(
        client.send("mydb", "ok", &ok_record),
        client.send("mydb", "broken", &broken_record),
    );

    assert!(ok.is_ok());
    match broken.unwrap_err() {
        SendError::Api(e) => assert_eq!(e.http_status, 503),
        SendError::Network(e) => panic!("expected API error, got network error: {e}"),
    }
}
