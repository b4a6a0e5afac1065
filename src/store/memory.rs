// ABOUTME: In-memory document store implementation over concurrent maps
// ABOUTME: Default backing store for development and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! In-memory [`DocumentStore`] backed by `DashMap`

use super::DocumentStore;
use crate::errors::AppResult;
use crate::models::{FavoriteRecipe, HistoryEntry, UserProfile};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

/// One user's documents and sub-collections
#[derive(Debug, Clone)]
struct UserDocument {
    profile: UserProfile,
    favorites: Vec<FavoriteRecipe>,
    history: Vec<HistoryEntry>,
}

/// In-memory document store
///
/// Suitable for development and tests; state does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, UserDocument>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_profile(&self, uid: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.users.get(uid).map(|doc| doc.profile.clone()))
    }

    async fn upsert_profile(&self, uid: &str, email: &str) -> AppResult<UserProfile> {
        let now = Utc::now();
        let mut entry = self.users.entry(uid.to_owned()).or_insert_with(|| {
            UserDocument {
                profile: UserProfile {
                    email: String::new(),
                    created_at: now,
                    updated_at: now,
                },
                favorites: Vec::new(),
                history: Vec::new(),
            }
        });
        entry.profile.email = email.to_owned();
        entry.profile.updated_at = now;
        Ok(entry.profile.clone())
    }

    async fn delete_user(&self, uid: &str) -> AppResult<bool> {
        Ok(self.users.remove(uid).is_some())
    }

    async fn add_favorite(
        &self,
        uid: &str,
        title: &str,
        content: &str,
    ) -> AppResult<FavoriteRecipe> {
        let favorite = FavoriteRecipe {
            id: Uuid::new_v4().to_string(),
            title: title.to_owned(),
            content: content.to_owned(),
            added_at: Utc::now(),
        };
        let mut entry = self
            .users
            .get_mut(uid)
            .ok_or_else(|| crate::errors::AppError::not_found("User"))?;
        entry.favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn list_favorites(&self, uid: &str) -> AppResult<Vec<FavoriteRecipe>> {
        let mut favorites = self
            .users
            .get(uid)
            .map(|doc| doc.favorites.clone())
            .unwrap_or_default();
        favorites.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(favorites)
    }

    async fn delete_favorite(&self, uid: &str, recipe_id: &str) -> AppResult<bool> {
        let Some(mut entry) = self.users.get_mut(uid) else {
            return Ok(false);
        };
        let before = entry.favorites.len();
        entry.favorites.retain(|f| f.id != recipe_id);
        Ok(entry.favorites.len() < before)
    }

    async fn add_history(&self, uid: &str, recipe_id: &str) -> AppResult<HistoryEntry> {
        let record = HistoryEntry {
            recipe_id: recipe_id.to_owned(),
            cooked_at: Utc::now(),
        };
        if let Some(mut entry) = self.users.get_mut(uid) {
            entry.history.push(record.clone());
        }
        Ok(record)
    }
}
