// ABOUTME: Normalization of heterogeneous generator output into display-ready recipes
// ABOUTME: Total, defaulting reshaper tolerant of schema drift in the external generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavorMind

//! # Recipe Normalizer
//!
//! The external generator is not under this system's control and its output
//! shape drifts: ingredients arrive as bare strings or partial objects,
//! `instructions` may be a single string instead of a list, optional sections
//! may be missing entirely. [`normalize`] is a pure, total function over any
//! structurally valid generation result; it never fails on missing optional
//! fields. Only an absent mandatory shape is an error, signaling a contract
//! violation by the upstream stage rather than silently corrupting output.

use crate::models::{DisplayRecipe, NormalizedIngredient, RecipeDetails};
use serde_json::Value;
use thiserror::Error;

/// Quantity used when the generator gave none
const DEFAULT_QUANTITY: &str = "as needed";

/// Contract violation by the upstream stage
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("generation result is missing recipe_name")]
    MissingRecipeName,
    #[error("generation result is missing details.ingredients")]
    MissingIngredients,
}

/// Reshape a raw generation result into a [`DisplayRecipe`]
///
/// # Errors
///
/// Fails only when `recipe_name` is absent or `details.ingredients` is not an
/// iterable sequence; every optional field defaults instead of failing.
pub fn normalize(raw: &Value) -> Result<DisplayRecipe, NormalizeError> {
    let recipe_name = raw
        .get("recipe_name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or(NormalizeError::MissingRecipeName)?
        .to_owned();

    let details = raw.get("details").unwrap_or(&Value::Null);

    let ingredients = details
        .get("ingredients")
        .and_then(Value::as_array)
        .ok_or(NormalizeError::MissingIngredients)?
        .iter()
        .map(normalize_ingredient)
        .collect();

    Ok(DisplayRecipe {
        recipe_name,
        recommendation: string_or(raw.get("recommendation"), "A delicious recipe just for you!"),
        budget_category: string_or(raw.get("budget_category"), "moderate"),
        difficulty: string_or(raw.get("difficulty"), "medium"),
        details: RecipeDetails {
            ingredients,
            instructions: sequence_or_wrap(details.get("instructions")),
            tips: string_sequence(details.get("tips")),
            equipment: string_sequence(details.get("equipment")),
            nutritional_info: string_sequence(details.get("nutritional_info")),
        },
    })
}

/// Normalize one ingredient entry, object or bare string
fn normalize_ingredient(entry: &Value) -> NormalizedIngredient {
    match entry {
        Value::Object(fields) => {
            // Explicit nulls default the same way as absent fields.
            let field = |name: &str| fields.get(name).filter(|v| !v.is_null());
            let item = field("item")
                .map(display_form)
                .unwrap_or_else(|| display_form(entry));
            NormalizedIngredient {
                quantity: field("quantity")
                    .map_or_else(|| DEFAULT_QUANTITY.to_owned(), display_form),
                unit: field("unit").map_or_else(String::new, display_form),
                item,
            }
        }
        other => NormalizedIngredient {
            quantity: DEFAULT_QUANTITY.to_owned(),
            unit: String::new(),
            item: display_form(other),
        },
    }
}

/// A value's own string form: unquoted for strings, JSON text otherwise
fn display_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract a string field, defaulting when absent or empty
fn string_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map_or_else(|| default.to_owned(), str::to_owned)
}

/// An ordered sequence of strings; a lone value is wrapped as one element
fn sequence_or_wrap(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_form).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(single) => vec![display_form(single)],
    }
}

/// A sequence of strings, empty when absent or not a sequence
fn string_sequence(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_form).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_ingredient_becomes_item() {
        let raw = json!({
            "recipe_name": "Flatbread",
            "details": {"ingredients": ["2 cups flour"]}
        });
        let recipe = normalize(&raw).expect("normalizes");
        assert_eq!(
            recipe.details.ingredients[0],
            NormalizedIngredient {
                quantity: "as needed".to_owned(),
                unit: String::new(),
                item: "2 cups flour".to_owned(),
            }
        );
    }

    #[test]
    fn test_object_ingredient_defaults_missing_fields() {
        let raw = json!({
            "recipe_name": "Stew",
            "details": {"ingredients": [{"item": "lentils", "quantity": "1 cup"}]}
        });
        let recipe = normalize(&raw).expect("normalizes");
        let ingredient = &recipe.details.ingredients[0];
        assert_eq!(ingredient.quantity, "1 cup");
        assert_eq!(ingredient.unit, "");
        assert_eq!(ingredient.item, "lentils");
    }

    #[test]
    fn test_single_instruction_wrapped_as_sequence() {
        let raw = json!({
            "recipe_name": "Vegan Stew",
            "details": {"ingredients": ["lentils"], "instructions": "Simmer 30 min"}
        });
        let recipe = normalize(&raw).expect("normalizes");
        assert_eq!(recipe.details.instructions, vec!["Simmer 30 min".to_owned()]);
        assert!(recipe.details.tips.is_empty());
        assert!(recipe.details.equipment.is_empty());
        assert!(recipe.details.nutritional_info.is_empty());
    }

    #[test]
    fn test_optional_top_level_fields_default() {
        let raw = json!({
            "recipe_name": "Soup",
            "details": {"ingredients": []}
        });
        let recipe = normalize(&raw).expect("normalizes");
        assert_eq!(recipe.budget_category, "moderate");
        assert_eq!(recipe.difficulty, "medium");
        assert!(!recipe.recommendation.is_empty());
    }

    #[test]
    fn test_non_sequence_tips_default_empty() {
        let raw = json!({
            "recipe_name": "Soup",
            "details": {"ingredients": [], "tips": "just one tip", "equipment": 7}
        });
        let recipe = normalize(&raw).expect("normalizes");
        assert!(recipe.details.tips.is_empty());
        assert!(recipe.details.equipment.is_empty());
    }

    #[test]
    fn test_missing_recipe_name_is_contract_violation() {
        let raw = json!({"details": {"ingredients": []}});
        let err = normalize(&raw).expect_err("must reject missing name");
        assert_eq!(err, NormalizeError::MissingRecipeName);
    }

    #[test]
    fn test_missing_ingredients_is_contract_violation() {
        let raw = json!({"recipe_name": "Soup", "details": {}});
        let err = normalize(&raw).expect_err("must reject missing ingredients");
        assert_eq!(err, NormalizeError::MissingIngredients);
    }
}
