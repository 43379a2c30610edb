//! End-to-end tests against a live gateway.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_instance_qualified_address() {
    let gateway = common::start_gateway().await;
    let res = common::client()
        .get(gateway.url("/app_direct_i/myapp/session1/plots/1.png"))
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "app_name": "myapp",
            "app_instance_name": "session1",
            "app_instance_display_name": "session1",
            "sub_path": "/plots/1.png",
            "proxy_id_hint": null,
        })
    );
}

#[tokio::test]
async fn test_default_instance_display_name() {
    let gateway = common::start_gateway().await;
    let body: Value = common::client()
        .get(gateway.url("/app/myapp/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["app_instance_name"], "_");
    assert_eq!(body["app_instance_display_name"], "Default");
    assert_eq!(body["sub_path"], "/");
}

#[tokio::test]
async fn test_query_hint_beats_header() {
    let gateway = common::start_gateway().await;
    let body: Value = common::client()
        .post(gateway.url("/app/myapp?shinyproxy_proxy_id_hint=abc"))
        .header("X-ShinyProxy-Proxy-Id-Hint", "xyz")
        .body("payload that must not be read")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["proxy_id_hint"], "abc");
}

#[tokio::test]
async fn test_empty_query_hint_is_present() {
    let gateway = common::start_gateway().await;
    let body: Value = common::client()
        .get(gateway.url("/app/myapp?shinyproxy_proxy_id_hint="))
        .header("X-ShinyProxy-Proxy-Id-Hint", "xyz")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["proxy_id_hint"], "");
}

#[tokio::test]
async fn test_header_hint() {
    let gateway = common::start_gateway().await;
    let body: Value = common::client()
        .get(gateway.url("/app_i/myapp/one"))
        .header("x-shinyproxy-proxy-id-hint", "xyz")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["proxy_id_hint"], "xyz");
    assert_eq!(body["sub_path"], Value::Null);
}

#[tokio::test]
async fn test_malformed_urls_are_bad_requests() {
    let gateway = common::start_gateway().await;
    let client = common::client();

    let cases = [
        ("/static/foo.js", "Error parsing URL."),
        ("/app/", "Error parsing URL: name of app not found in URL."),
        ("/app_i/myapp//x", "Error parsing URL: name of instance not found in URL."),
        (
            "/app_i/myapp/bad%20name/x",
            "Error parsing URL: name of instance contains invalid characters or is too long.",
        ),
    ];

    for (path, message) in cases {
        let res = client.get(gateway.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(res.text().await.unwrap(), message, "{path}");
    }
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let gateway = common::start_gateway().await;
    let client = common::client();

    let res = client.get(gateway.url("/app/myapp")).send().await.unwrap();
    let generated = res.headers().get("x-request-id").expect("request id missing");
    assert!(uuid_like(generated.to_str().unwrap()));

    let res = client
        .get(gateway.url("/static/foo.js"))
        .header("x-request-id", "client-chosen")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "client-chosen");
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let gateway = common::start_gateway().await;
    gateway.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), gateway.handle)
        .await
        .expect("server did not stop")
        .expect("server task panicked");
    assert!(result.is_ok());
}

fn uuid_like(value: &str) -> bool {
    value.len() == 36 && value.chars().filter(|c| *c == '-').count() == 4
}
