//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use automir_api::config::{LogFormat, ServerConfig};
use automir_api::router::build_app_router;
use automir_api::state::AppState;
use automir_core::documents::DocumentRenderer;
use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        run_migrations: false,
        document_font_path: None,
        static_dir: None,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router, backed by `pool`, through the same
/// builder the binary uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, &test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: &ServerConfig) -> Router {
    let state = AppState {
        pool,
        documents: Arc::new(DocumentRenderer::default()),
    };
    build_app_router(state, config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn manufacturer_body(name: &str) -> serde_json::Value {
    serde_json::json!({"name": name, "country": "USA", "year_founded": 1990})
}

pub fn model_body(manufacturer_id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "manufacturer_id": manufacturer_id,
        "year": 2020,
        "body_type": "Coupe",
    })
}

pub fn car_body(model_id: i64) -> serde_json::Value {
    serde_json::json!({
        "model_id": model_id,
        "color": "Red",
        "price": 1234567.5,
        "year": 2021,
        "engine_type": "Petrol",
        "transmission": "Manual",
        "mileage": 15000,
        "status": "available",
    })
}

/// POST `body` to `uri` and return the generated id.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create Acme / Roadster / one car and return the car id.
pub async fn seed_car(pool: &PgPool) -> i64 {
    let manufacturer_id = create(pool, "/api/manufacturers", manufacturer_body("Acme")).await;
    let model_id = create(pool, "/api/models", model_body(manufacturer_id, "Roadster")).await;
    create(pool, "/api/cars", car_body(model_id)).await
}
