mod common;

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use linkdrop::api::middleware::cors;
use linkdrop::routes::app_router;
use serde_json::{Value, json};

const FRONTEND: &str = "http://front.test";

fn create_server() -> TestServer {
    let (state, _stores) = common::create_test_state();
    let app = app_router(state, cors::layer(FRONTEND).unwrap());

    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

#[tokio::test]
async fn test_preflight_from_frontend_origin() {
    let server = create_server();

    let response = server
        .method(Method::OPTIONS, "/shorten")
        .add_header("origin", FRONTEND)
        .add_header("access-control-request-method", "POST")
        .add_header("access-control-request-headers", "content-type")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin").to_str().unwrap(),
        FRONTEND
    );

    let methods = response.header("access-control-allow-methods");
    let methods = methods.to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
    assert!(!methods.contains("PATCH"));

    let headers = response.header("access-control-allow-headers");
    let headers = headers.to_str().unwrap().to_ascii_lowercase();
    assert!(headers.contains("content-type"));
    assert!(headers.contains("authorization"));
}

#[tokio::test]
async fn test_preflight_from_other_origin_is_not_allowed() {
    let server = create_server();

    let response = server
        .method(Method::OPTIONS, "/shorten")
        .add_header("origin", "http://evil.test")
        .add_header("access-control-request-method", "POST")
        .await;

    assert!(response.maybe_header("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_simple_request_carries_allow_origin() {
    let server = create_server();

    let response = server
        .post("/clipboard")
        .add_header("origin", FRONTEND)
        .json(&json!({ "clipboard_text": "hello" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin").to_str().unwrap(),
        FRONTEND
    );
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let server = create_server();

    let created = server
        .post("/clipboard")
        .json(&json!({ "clipboard_text": "slash" }))
        .await;
    created.assert_status_ok();
    let code = created.json::<Value>()["clipboard_short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/clipboard/{code}/")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["clipboard_text"], "slash");
}

#[tokio::test]
async fn test_redirect_through_full_router() {
    let server = create_server();

    let created = server
        .post("/shorten")
        .json(&json!({ "original_url": "https://example.com", "expiry": "1d" }))
        .await;
    let code = created.json::<Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}/")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com"
    );
}
