// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use titanfit::config::Config;
use titanfit::db::Store;
use titanfit::routes::create_router;
use titanfit::services::{CatalogService, GeminiClient};
use titanfit::AppState;
use tower::ServiceExt;

/// Create a test app over a seeded in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();

    let store = Store::in_memory();
    store.initialize().expect("seeding an in-memory store");

    let gemini = GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
    );

    let state = Arc::new(AppState {
        config,
        store,
        catalog: CatalogService::builtin(),
        gemini,
    });

    (create_router(state.clone()), state)
}

/// Create a test app whose Gemini client targets the given base URL,
/// typically a local stub started with `spawn_model_stub`.
#[allow(dead_code)]
pub fn create_test_app_with_model(base_url: String) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        gemini_base_url: base_url,
        ..Config::default()
    };

    let store = Store::in_memory();
    store.initialize().expect("seeding an in-memory store");

    let gemini = GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_api_key.clone(),
    );

    let state = Arc::new(AppState {
        config,
        store,
        catalog: CatalogService::builtin(),
        gemini,
    });

    (create_router(state.clone()), state)
}

/// Start a local HTTP stub that answers every request with a
/// `generateContent`-shaped reply carrying the given text part.
/// Returns the stub's base URL.
#[allow(dead_code)]
pub async fn spawn_model_stub(reply_text: String) -> String {
    let handler = move || {
        let text = reply_text.clone();
        async move {
            axum::Json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": text }] }
                }]
            }))
        }
    };
    let stub = axum::Router::new().fallback(handler);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, stub).await.expect("serve stub");
    });

    format!("http://{}", addr)
}

/// Log in via the HTTP surface and return the bearer token.
#[allow(dead_code)]
pub async fn login(app: &axum::Router, role: &str, identifier: &str, secret: &str) -> String {
    let body = json!({
        "role": role,
        "identifier": identifier,
        "secret": secret,
    });

    let response = app
        .clone()
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

    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let json = read_json(response).await;
    json["token"].as_str().expect("token in response").to_string()
}

/// Convenience: coach session token for the seeded coach account.
#[allow(dead_code)]
pub async fn login_coach(app: &axum::Router) -> String {
    login(app, "COACH", "rushi", "rushi9001").await
}

/// Convenience: client session token for the seeded client Jane Doe.
#[allow(dead_code)]
pub async fn login_client(app: &axum::Router) -> String {
    login(app, "CLIENT", "janedoe_fit", "JD-2024-X9Y").await
}

/// Send an authenticated JSON request and return the raw response.
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Option<Value>,
) -> axum::http::Response<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn read_json(response: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
