// ABOUTME: Core data models for the FlavorMind recipe service
// ABOUTME: Defines generation requests, normalized recipes, and user data records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! Common data structures shared across the generator, store, and routes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe generation request, passed by value into the subprocess boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// User's recipe preference or craving
    pub preference: String,
    /// Dietary restrictions (e.g. vegetarian, gluten-free)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    /// Preferred budget category: budget-friendly, moderate, or premium
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_preference: Option<String>,
}

/// A single ingredient after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    /// Amount needed, `"as needed"` when the generator gave none
    pub quantity: String,
    /// Unit of measurement, empty when unspecified
    pub unit: String,
    /// Ingredient name and preparation notes
    pub item: String,
}

/// Recipe detail sections after normalization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub ingredients: Vec<NormalizedIngredient>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub equipment: Vec<String>,
    pub nutritional_info: Vec<String>,
}

/// A fully normalized recipe ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayRecipe {
    pub recipe_name: String,
    pub recommendation: String,
    pub budget_category: String,
    pub difficulty: String,
    pub details: RecipeDetails,
}

/// A user profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A recipe saved to a user's favorites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRecipe {
    /// Server-assigned identifier
    pub id: String,
    pub title: String,
    pub content: String,
    /// Server-assigned save timestamp
    pub added_at: DateTime<Utc>,
}

/// A single cooking-history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recipe_id: String,
    /// Server-assigned timestamp
    pub cooked_at: DateTime<Utc>,
}
