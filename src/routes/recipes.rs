// ABOUTME: Recipe generation route handler
// ABOUTME: Validates requests, delegates to the generator invoker, and maps failures to HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Recipe Generation Endpoint
//!
//! `POST /generate-recipe` validates the inbound request, delegates to the
//! subprocess invoker, normalizes the result, and maps each failure kind to
//! its HTTP status. Upstream-reported failures surface verbatim as client
//! errors; infrastructure failures return a generic message with diagnostics
//! confined to the operator-facing `details` field.

use crate::errors::{AppError, ErrorCode};
use crate::generator::InvocationError;
use crate::models::{DisplayRecipe, GenerationRequest};
use crate::normalize::normalize;
use crate::server::ServerResources;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// Inbound generation request body; every field optional so validation can
/// produce a 400 instead of a deserialization rejection
#[derive(Debug, Deserialize)]
pub struct GenerateRecipeBody {
    #[serde(default)]
    pub preference: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,
    #[serde(default)]
    pub budget_preference: Option<String>,
}

/// Recipe generation routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create the generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/generate-recipe", post(Self::generate_recipe))
            .with_state(resources)
    }

    /// Handle one generation request
    async fn generate_recipe(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GenerateRecipeBody>,
    ) -> Result<Json<DisplayRecipe>, AppError> {
        let preference = body
            .preference
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::missing_field("Preference"))?
            .to_owned();

        let request = GenerationRequest {
            preference,
            dietary_restrictions: body.dietary_restrictions,
            budget_preference: body.budget_preference,
        };

        let raw = resources
            .generator
            .invoke(&request)
            .await
            .map_err(map_invocation_error)?;

        let recipe = normalize(&raw).map_err(|e| {
            error!("generator returned a structurally invalid recipe: {e}");
            AppError::new(ErrorCode::GeneratorFailed, "Recipe generation failed")
                .with_details(json!({"reason": "contract_violation", "violation": e.to_string()}))
        })?;

        info!("generated recipe: {}", recipe.recipe_name);
        Ok(Json(recipe))
    }
}

/// Map invoker failures to HTTP-facing errors
///
/// Upstream failures are user-visible and carried verbatim; everything else
/// gets a generic message with diagnostics for operators only.
fn map_invocation_error(err: InvocationError) -> AppError {
    match err {
        InvocationError::Upstream(message) => {
            AppError::new(ErrorCode::GeneratorRejected, message)
        }
        InvocationError::Launch(source) => {
            error!("failed to launch recipe generator: {source}");
            AppError::new(ErrorCode::GeneratorFailed, "Recipe generation failed")
                .with_details(json!({"reason": "launch_failed", "error": source.to_string()}))
        }
        InvocationError::NoOutput { stderr } => {
            error!("recipe generator produced no output");
            AppError::new(ErrorCode::GeneratorFailed, "Recipe generation failed")
                .with_details(json!({"reason": "no_output", "stderr": stderr}))
        }
        InvocationError::MalformedOutput { source, raw_output } => {
            error!("recipe generator emitted malformed output: {source}");
            AppError::new(ErrorCode::GeneratorFailed, "Recipe generation failed")
                .with_details(json!({
                    "reason": "malformed_output",
                    "parse_error": source.to_string(),
                    "raw_output": raw_output,
                }))
        }
        InvocationError::Timeout(limit) => {
            error!("recipe generator exceeded its deadline");
            AppError::new(ErrorCode::GeneratorTimeout, "Recipe generation timed out")
                .with_details(json!({"timeout_secs": limit.as_secs()}))
        }
    }
}
