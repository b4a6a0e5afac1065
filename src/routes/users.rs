// ABOUTME: User data route handlers for profiles, favorites, and cooking history
// ABOUTME: Bearer-token protected CRUD over the opaque document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # User Data Routes
//!
//! All routes under `/api/user` require a verified bearer token. The handlers
//! consume the document store as plain CRUD keyed by user id; no logic here
//! depends on the store's internals.

use crate::errors::AppError;
use crate::models::{FavoriteRecipe, UserProfile};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Profile upsert request
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub email: Option<String>,
}

/// A recipe submitted for saving
#[derive(Debug, Deserialize)]
pub struct RecipeSubmission {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Favorite-recipe request
#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(default)]
    pub recipe: Option<RecipeSubmission>,
}

/// Cooking-history request
#[derive(Debug, Deserialize)]
pub struct CookingHistoryRequest {
    #[serde(default)]
    pub recipe_id: Option<String>,
}

/// Profile upsert response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub message: String,
    pub profile: UserProfile,
}

/// Favorite-recipe response
#[derive(Debug, Serialize, Deserialize)]
pub struct AddFavoriteResponse {
    pub message: String,
    pub recipe_id: String,
}

/// User data routes
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user data routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/user/profile", post(Self::update_profile))
            .route("/api/user/profile/:uid", get(Self::get_profile))
            .route("/api/user/profile/:uid", delete(Self::delete_profile))
            .route("/api/user/favorites", post(Self::add_favorite))
            .route("/api/user/saved-recipes/:uid", get(Self::list_saved_recipes))
            .route(
                "/api/user/saved-recipes/:uid/:recipe_id",
                delete(Self::delete_saved_recipe),
            )
            .route("/api/user/cooking-history", post(Self::add_cooking_history))
            .with_state(resources)
    }

    /// Upsert the authenticated user's profile
    async fn update_profile(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<UpdateProfileRequest>,
    ) -> Result<Json<ProfileResponse>, AppError> {
        let user = resources.auth.authenticate(&headers)?;
        let email = body
            .email
            .or(user.email)
            .ok_or_else(|| AppError::missing_field("Email"))?;

        let profile = resources.store.upsert_profile(&user.user_id, &email).await?;
        Ok(Json(ProfileResponse {
            message: "Profile updated successfully".to_owned(),
            profile,
        }))
    }

    /// Fetch a profile, creating a default document when absent
    async fn get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(uid): Path<String>,
        headers: HeaderMap,
    ) -> Result<Json<UserProfile>, AppError> {
        resources.auth.authenticate(&headers)?;

        let profile = match resources.store.get_profile(&uid).await? {
            Some(profile) => profile,
            None => {
                info!("creating default profile for {uid}");
                resources.store.upsert_profile(&uid, "").await?
            }
        };
        Ok(Json(profile))
    }

    /// Delete the authenticated user's own profile and sub-collections
    async fn delete_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(uid): Path<String>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        let user = resources.auth.authenticate(&headers)?;
        if user.user_id != uid {
            return Err(AppError::permission_denied(
                "Unauthorized to delete this profile",
            ));
        }

        if !resources.store.delete_user(&uid).await? {
            return Err(AppError::not_found("User"));
        }
        Ok(Json(json!({"message": "Profile deleted successfully"})))
    }

    /// Save a recipe to the authenticated user's favorites
    async fn add_favorite(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<AddFavoriteRequest>,
    ) -> Result<Json<AddFavoriteResponse>, AppError> {
        let user = resources.auth.authenticate(&headers)?;
        let recipe = body
            .recipe
            .ok_or_else(|| AppError::missing_field("Recipe data"))?;
        let (Some(title), Some(content)) = (recipe.title, recipe.content) else {
            return Err(AppError::invalid_input(
                "Recipe must include title and content",
            ));
        };
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Recipe must include title and content",
            ));
        }

        let saved = resources
            .store
            .add_favorite(&user.user_id, &title, &content)
            .await?;
        info!("saved favorite {} for {}", saved.id, user.user_id);
        Ok(Json(AddFavoriteResponse {
            message: "Recipe added to favorites".to_owned(),
            recipe_id: saved.id,
        }))
    }

    /// List a user's saved recipes, newest first
    async fn list_saved_recipes(
        State(resources): State<Arc<ServerResources>>,
        Path(uid): Path<String>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<FavoriteRecipe>>, AppError> {
        resources.auth.authenticate(&headers)?;
        let favorites = resources.store.list_favorites(&uid).await?;
        Ok(Json(favorites))
    }

    /// Remove a saved recipe
    async fn delete_saved_recipe(
        State(resources): State<Arc<ServerResources>>,
        Path((uid, recipe_id)): Path<(String, String)>,
        headers: HeaderMap,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.auth.authenticate(&headers)?;
        if !resources.store.delete_favorite(&uid, &recipe_id).await? {
            return Err(AppError::not_found("Saved recipe"));
        }
        Ok(Json(json!({"message": "Recipe removed from favorites"})))
    }

    /// Append a cooking-history entry for the authenticated user
    async fn add_cooking_history(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CookingHistoryRequest>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        let user = resources.auth.authenticate(&headers)?;
        let recipe_id = body
            .recipe_id
            .ok_or_else(|| AppError::missing_field("Recipe ID"))?;

        resources.store.add_history(&user.user_id, &recipe_id).await?;
        Ok(Json(json!({"message": "Cooking history updated"})))
    }
}
