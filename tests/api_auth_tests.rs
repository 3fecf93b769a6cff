// SPDX-License-Identifier: MIT

//! Authentication and role-gating tests for the HTTP surface.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_health_is_public() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::read_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_coach_success() {
    let (app, _) = common::create_test_app();
    let token = common::login_coach(&app).await;
    assert!(!token.is_empty());

    let response = common::send_json(&app, "GET", "/api/me", &token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = common::read_json(response).await;
    assert_eq!(me["id"], "coach_rushi");
    assert_eq!(me["role"], "COACH");
}

#[tokio::test]
async fn test_login_client_success_reduced_identity() {
    let (app, _) = common::create_test_app();
    let token = common::login_client(&app).await;

    let response = common::send_json(&app, "GET", "/api/me", &token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = common::read_json(response).await;
    assert_eq!(me["id"], "c1");
    assert_eq!(me["role"], "CLIENT");
    // Reduced view: no passport code or coaching fields
    assert!(me.get("passport_code").is_none());
    assert!(me.get("daily_macro_targets").is_none());
}

#[tokio::test]
async fn test_login_wrong_secret_is_401() {
    let (app, _) = common::create_test_app();

    let body = json!({
        "role": "COACH",
        "identifier": "rushi",
        "secret": "wrong",
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::read_json(response).await;
    assert_eq!(body["error"], "invalid_credentials");
    // No detail that would distinguish bad user from bad secret
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/food-logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/food-logs")
                .header(header::AUTHORIZATION, "Bearer not.a.jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_client_token_rejected_on_coach_surface() {
    let (app, _) = common::create_test_app();
    let token = common::login_client(&app).await;

    let response = common::send_json(&app, "GET", "/api/clients", &token, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = common::send_json(
        &app,
        "POST",
        "/api/ai/diet-plan",
        &token,
        Some(json!({ "client_id": "c1" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/food-logs")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_security_headers_on_responses() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("X-Content-Type-Options").unwrap(), "nosniff");
    assert_eq!(headers.get("X-Frame-Options").unwrap(), "DENY");
}
