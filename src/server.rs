// ABOUTME: Shared resource container and HTTP server assembly
// ABOUTME: Builds the axum router, static asset fallback, and serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Server Resources and Assembly
//!
//! Centralized resource container for dependency injection. Expensive shared
//! handles (store, generator, auth) are created once at startup and shared via
//! `Arc`; no core logic depends on mutating them during a request.

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::generator::RecipeGenerator;
use crate::routes::{health::HealthRoutes, recipes::RecipeRoutes, users::UserRoutes};
use crate::store::DocumentStore;
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    pub store: Arc<dyn DocumentStore>,
    pub generator: Arc<RecipeGenerator>,
    pub auth: Arc<AuthManager>,
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources from configuration and a store implementation
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn DocumentStore>) -> Self {
        let auth = Arc::new(AuthManager::new(&config.jwt_secret));
        let generator = Arc::new(RecipeGenerator::new(config.generator.clone()));
        Self {
            store,
            generator,
            auth,
            config: Arc::new(config),
        }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let mut app = Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(UserRoutes::routes(resources.clone()));

    // The built frontend is served as a fallback so API routes keep priority;
    // unknown paths land on index.html for client-side routing.
    if let Some(static_dir) = &resources.config.static_dir {
        let index = ServeFile::new(static_dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(static_dir).fallback(index));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until shutdown
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// loop fails.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], resources.config.http_port));
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("FlavorMind server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
