//! End-to-end tests for the webhook endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use webhook_tester::ServerConfig;

mod common;

#[tokio::test]
async fn test_any_method_any_path_is_acknowledged() {
    let server = common::start_server().await;
    let client = common::client();

    for (method, path) in [
        ("GET", "/"),
        ("POST", "/webhook"),
        ("PUT", "/a/b/c"),
        ("PATCH", "/items/1"),
        ("DELETE", "/items/1?hard=true"),
    ] {
        let method = reqwest::Method::from_bytes(method.as_bytes()).unwrap();
        let res = client
            .request(method.clone(), server.url(path))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );

        let json: Value = res.json().await.unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Webhook received successfully");
        assert_eq!(json["method"], method.as_str());
        assert_eq!(json["url"], path);
        assert_eq!(json["timestamp"], json["receivedAt"]);
    }

    assert_eq!(server.reports().len(), 5);
}

#[tokio::test]
async fn test_head_request_is_acknowledged() {
    let server = common::start_server().await;

    let res = common::client().head(server.url("/status")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(server.reports().len(), 1);
}

#[tokio::test]
async fn test_query_parameters_reported() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/hook?a=1&b=2"))
        .send()
        .await
        .unwrap();
    let json: Value = res.json().await.unwrap();
    assert_eq!(json["url"], "/hook?a=1&b=2");

    let report = &server.reports()[0];
    assert!(report.contains("URL: /hook?a=1&b=2"));
    assert!(report.contains("\"a\": \"1\""));
    assert!(report.contains("\"b\": \"2\""));
    assert!(!report.contains("No query parameters"));
}

#[tokio::test]
async fn test_missing_query_marker() {
    let server = common::start_server().await;

    common::client().get(server.url("/hook")).send().await.unwrap();

    let report = &server.reports()[0];
    assert!(report.contains("Query String:\nNo query parameters"));
}

#[tokio::test]
async fn test_json_body_reported() {
    let server = common::start_server().await;

    common::client()
        .post(server.url("/hook"))
        .header("content-type", "application/json")
        .body(r#"{"x":1}"#)
        .send()
        .await
        .unwrap();

    let report = &server.reports()[0];
    assert!(report.contains("JSON Body:\n{\n  \"x\": 1\n}"));
}

#[tokio::test]
async fn test_empty_json_object_reported_as_no_content() {
    let server = common::start_server().await;

    common::client()
        .put(server.url("/hook"))
        .header("content-type", "application/json")
        .body("{}")
        .send()
        .await
        .unwrap();

    let report = &server.reports()[0];
    assert!(report.contains("No body content"));
    assert!(!report.contains("JSON Body:"));
}

#[tokio::test]
async fn test_bare_post_reported_as_no_content() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/hook"))
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let report = &server.reports()[0];
    assert!(report.contains("No query parameters\nNo body content"));
}

#[tokio::test]
async fn test_get_with_json_body_omits_body_section() {
    let server = common::start_server().await;

    let res = common::client()
        .get(server.url("/hook"))
        .header("content-type", "application/json")
        .body(r#"{"x":1}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let report = &server.reports()[0];
    assert!(!report.contains("JSON Body:"));
    assert!(!report.contains("Body ("));
    assert!(!report.contains("No body content"));
}

#[tokio::test]
async fn test_malformed_json_still_acknowledged() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/hook"))
        .header("content-type", "application/json")
        .body("{\"unterminated\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let report = &server.reports()[0];
    assert!(report.contains("Body (application/json):\n{\"unterminated\": "));
}

#[tokio::test]
async fn test_form_body_reported() {
    let server = common::start_server().await;

    common::client()
        .post(server.url("/form"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("event=push&repo=demo")
        .send()
        .await
        .unwrap();

    let report = &server.reports()[0];
    assert!(report.contains("Body (application/x-www-form-urlencoded):"));
    assert!(report.contains(r#"{"event":"push","repo":"demo"}"#));
}

#[tokio::test]
async fn test_nested_form_keys_expanded() {
    let server = common::start_server().await;

    common::client()
        .post(server.url("/form"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("order%5Bid%5D=42&order%5Bitems%5D%5B%5D=a&order%5Bitems%5D%5B%5D=b")
        .send()
        .await
        .unwrap();

    let report = &server.reports()[0];
    assert!(report.contains(r#"{"order":{"id":"42","items":["a","b"]}}"#));
}

#[tokio::test]
async fn test_filtered_headers() {
    let server = common::start_server().await;

    common::client()
        .get(server.url("/hook"))
        .header("Authorization", "x")
        .header("X-Test", "y")
        .header("Accept", "z")
        .send()
        .await
        .unwrap();

    let report = &server.reports()[0];
    assert!(report.contains("Headers:"));
    assert!(report.contains("\"authorization\": \"x\""));
    assert!(report.contains("\"x-test\": \"y\""));
    assert!(!report.contains("\"accept\""));
}

#[tokio::test]
async fn test_repeat_requests_have_same_shape() {
    let server = common::start_server().await;
    let client = common::client();

    let mut payloads = Vec::new();
    for _ in 0..2 {
        let mut json: Value = client
            .post(server.url("/same?k=v"))
            .header("content-type", "application/json")
            .body(r#"{"id":7}"#)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("timestamp");
        obj.remove("receivedAt");
        payloads.push(json);
    }

    assert_eq!(payloads[0], payloads[1]);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = common::start_server().await;

    let res = common::client()
        .post(server.url("/hook"))
        .header("origin", "https://sender.example")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["access-control-allow-origin"].to_str().unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_request_id_assigned_and_propagated() {
    let server = common::start_server().await;
    let client = common::client();

    let res = client.get(server.url("/")).send().await.unwrap();
    let generated = res.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());

    let res = client
        .get(server.url("/"))
        .header("x-request-id", "caller-chosen")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "caller-chosen");
}

#[tokio::test]
async fn test_oversized_body_rejected_before_logging() {
    let mut config = ServerConfig::default();
    config.limits.max_body_bytes = 16;
    let server = common::start_server_with(config).await;

    let res = common::client()
        .post(server.url("/hook"))
        .header("content-type", "text/plain")
        .body("x".repeat(64))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(server.reports().is_empty());
}
