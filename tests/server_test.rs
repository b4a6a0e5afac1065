// ABOUTME: Integration tests for full router assembly
// ABOUTME: Verifies health endpoints, route precedence, and static frontend fallback

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_test_resources, scripted_generator};
use flavormind::config::ServerConfig;
use flavormind::server::{self, ServerResources};
use flavormind::store::MemoryStore;
use helpers::axum_test::AxumTestRequest;

use axum::http::StatusCode;
use serde_json::json;
use std::fs;
use std::sync::Arc;

#[tokio::test]
async fn test_health_and_ready_endpoints() {
    let resources = create_test_resources(scripted_generator("true"));
    let app = server::router(resources);

    let response = AxumTestRequest::get("/health").send(app.clone()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");

    // The scripted generator runs through `sh`, which is on PATH, so every
    // readiness check passes.
    let response = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["generator_command"], true);
    assert_eq!(body["checks"]["store"], true);
}

#[tokio::test]
async fn test_ready_reports_unresolvable_generator_command() {
    let config = ServerConfig {
        http_port: 0,
        jwt_secret: "test-secret".to_owned(),
        generator: flavormind::config::GeneratorConfig {
            command: "/nonexistent/recipe-generator".to_owned(),
            args: Vec::new(),
            working_dir: None,
            timeout: None,
        },
        static_dir: None,
    };
    let resources = Arc::new(ServerResources::new(config, Arc::new(MemoryStore::new())));
    let app = server::router(resources);

    let response = AxumTestRequest::get("/ready").send(app).await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "not_ready");
    assert_eq!(body["checks"]["generator_command"], false);
}

#[tokio::test]
async fn test_generation_endpoint_reachable_through_full_router() {
    let resources = create_test_resources(scripted_generator(
        r#"printf '%s\n' '{"recipe_name":"Stew","details":{"ingredients":[]}}'"#,
    ));
    let app = server::router(resources);

    let response = AxumTestRequest::post("/generate-recipe")
        .json(&json!({"preference": "stew"}))
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_static_fallback_serves_index_for_unknown_paths() {
    let static_dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        static_dir.path().join("index.html"),
        "<html>FlavorMind</html>",
    )
    .expect("index written");

    let config = ServerConfig {
        http_port: 0,
        jwt_secret: "test-secret".to_owned(),
        generator: scripted_generator("true"),
        static_dir: Some(static_dir.path().to_path_buf()),
    };
    let resources = Arc::new(ServerResources::new(config, Arc::new(MemoryStore::new())));
    let app = server::router(resources);

    // Unknown paths fall through to the frontend entry point.
    let response = AxumTestRequest::get("/some/client/route").send(app.clone()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("FlavorMind"));

    // API routes keep priority over the static fallback.
    let response = AxumTestRequest::get("/health").send(app).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
