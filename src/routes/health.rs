// ABOUTME: Health and readiness route handlers for service monitoring
// ABOUTME: Readiness inspects the generator command, static assets, and store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Health Routes
//!
//! `/health` is liveness only. `/ready` checks the pieces a request actually
//! needs: the generator command must be resolvable, the static asset
//! directory (when configured) must exist, and the store must answer. A
//! failed check turns the response into 503 so load balancers stop routing
//! here before requests start failing.

use crate::server::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

/// Health and readiness routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health and readiness routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    /// Liveness: the process is up and serving
    async fn health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": "flavormind",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Readiness: every dependency a generation request touches
    async fn ready(State(resources): State<Arc<ServerResources>>) -> (StatusCode, Json<Value>) {
        let generator_ok = command_resolvable(&resources.config.generator.command);
        let static_ok = resources
            .config
            .static_dir
            .as_ref()
            .is_none_or(|dir| dir.is_dir());
        let store_ok = resources.store.get_profile("readiness-check").await.is_ok();

        let ready = generator_ok && static_ok && store_ok;
        let status = if ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (
            status,
            Json(json!({
                "status": if ready { "ready" } else { "not_ready" },
                "checks": {
                    "generator_command": generator_ok,
                    "static_assets": static_ok,
                    "store": store_ok,
                },
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
    }
}

/// Whether the configured generator command would launch
///
/// A command with a path separator must exist at that path; a bare name is
/// searched for on `PATH` the way `spawn` would.
fn command_resolvable(command: &str) -> bool {
    let path = Path::new(command);
    if path.components().count() > 1 {
        return path.exists();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_command_found_on_path() {
        assert!(command_resolvable("sh"));
    }

    #[test]
    fn test_unknown_command_is_unresolvable() {
        assert!(!command_resolvable("no-such-generator-binary"));
        assert!(!command_resolvable("/nonexistent/recipe-generator"));
    }

    #[test]
    fn test_absolute_path_resolves_by_existence() {
        assert!(command_resolvable("/bin/sh"));
    }
}
