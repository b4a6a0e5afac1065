// ABOUTME: Document-store abstraction for user profiles, favorites, and cooking history
// ABOUTME: Trait seam over an opaque external document database plus factory exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # User Document Store
//!
//! The production document database is an opaque external collaborator; route
//! handlers consume it only as plain CRUD keyed by user id with server-assigned
//! timestamps. The [`DocumentStore`] trait is that seam. The handle is created
//! once at startup and shared for the life of the process.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{FavoriteRecipe, HistoryEntry, UserProfile};
use async_trait::async_trait;

/// CRUD operations over user documents and their sub-collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a user's profile, if one exists
    async fn get_profile(&self, uid: &str) -> AppResult<Option<UserProfile>>;

    /// Create or update a user's profile, returning the stored document
    async fn upsert_profile(&self, uid: &str, email: &str) -> AppResult<UserProfile>;

    /// Delete a user and all sub-collections; `Ok(false)` when absent
    async fn delete_user(&self, uid: &str) -> AppResult<bool>;

    /// Append a recipe to a user's favorites, returning the stored record
    async fn add_favorite(
        &self,
        uid: &str,
        title: &str,
        content: &str,
    ) -> AppResult<FavoriteRecipe>;

    /// List a user's favorites, newest first
    async fn list_favorites(&self, uid: &str) -> AppResult<Vec<FavoriteRecipe>>;

    /// Remove one favorite; `Ok(false)` when absent
    async fn delete_favorite(&self, uid: &str, recipe_id: &str) -> AppResult<bool>;

    /// Append a cooking-history entry with a server-assigned timestamp
    async fn add_history(&self, uid: &str, recipe_id: &str) -> AppResult<HistoryEntry>;
}
