//! Integration tests for the authentication gate.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use jsonwebtoken::get_current_timestamp;
use serde_json::json;

use helpers::{BROKEN_USER, TEST_SECRET, TestApp, event_form, sign};

#[tokio::test]
async fn test_missing_header_is_rejected_before_any_handler() {
    let app = TestApp::new().await;

    let response = app
        .multipart(
            "POST",
            "/api/v1/event/create",
            &event_form("7", "Launch", Some(("logo.png", &b"png"[..]))),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(app.identity.calls(), 0);
    assert!(app.store.is_empty().await);
    assert_eq!(app.image_count(), 0);
}

#[tokio::test]
async fn test_every_route_requires_auth() {
    let app = TestApp::new().await;

    for (method, path) in [
        ("GET", "/"),
        ("GET", "/api/v1/event/all"),
        ("GET", "/api/v1/event/1"),
        ("GET", "/api/v1/event/all/user/1"),
        ("DELETE", "/api/v1/event/1"),
        ("DELETE", "/api/v1/event/user"),
    ] {
        let response = app.request(method, path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}

#[tokio::test]
async fn test_malformed_headers_are_rejected() {
    let app = TestApp::new().await;
    let token = app.token_for(json!(7));

    for header in [
        token.clone(),
        format!("Token {token}"),
        format!("bearer {token}"),
        format!("Bearer  {token}"),
        format!("Bearer {token} extra"),
    ] {
        let req = Request::builder()
            .method("GET")
            .uri("/api/v1/event/all")
            .header("Authorization", header)
            .body(Body::empty())
            .unwrap();
        let response = app.send(req).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(app.identity.calls(), 0);
}

#[tokio::test]
async fn test_invalid_tokens_are_rejected() {
    let app = TestApp::new().await;
    let expired = sign(
        json!({"user_id": 7, "exp": get_current_timestamp() - 3600}),
        TEST_SECRET,
    );
    let wrong_secret = sign(json!({"user_id": 7}), "some-other-secret");
    let unsigned = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0.eyJ1c2VyX2lkIjoiNyJ9.".to_string();
    let no_user = sign(json!({"sub": "7"}), TEST_SECRET);

    for token in [expired, wrong_secret, unsigned, no_user, "garbage".to_string()] {
        let response = app
            .request("GET", "/api/v1/event/all", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{token}");
        assert_eq!(response.body["error"], "UNAUTHORIZED");
    }
    assert_eq!(app.identity.calls(), 0);
}

#[tokio::test]
async fn test_unknown_user_is_rejected() {
    let app = TestApp::new().await;
    let token = app.token_for(json!(99));

    let response = app
        .request("GET", "/api/v1/event/all", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.identity.calls(), 1);
}

#[tokio::test]
async fn test_numeric_and_string_user_ids_are_accepted() {
    let app = TestApp::new().await;

    for user_id in [json!(7), json!("7"), json!(1)] {
        let token = app.token_for(user_id.clone());
        let response = app
            .request("GET", "/api/v1/event/all", None, Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{user_id}");
    }
}

#[tokio::test]
async fn test_unexpired_token_is_accepted() {
    let app = TestApp::new().await;
    let token = sign(
        json!({"user_id": 7, "exp": get_current_timestamp() + 3600}),
        TEST_SECRET,
    );

    let response = app.request("GET", "/", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unreadable_profile_is_server_error() {
    let app = TestApp::new().await;
    let token = app.token_for(json!(BROKEN_USER));

    let response = app.request("GET", "/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "EXTERNAL_SERVICE_ERROR");
}

#[tokio::test]
async fn test_cors_preflight_skips_auth() {
    let app = TestApp::new().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/v1/event/all")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["access-control-allow-origin"],
        "*"
    );
    assert_eq!(app.identity.calls(), 0);
}
