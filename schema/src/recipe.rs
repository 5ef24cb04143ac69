//! AI recipe request and response.
//!
//! The generator answers `200 {"recipe": {...}}` even when generation failed
//! softly, in which case the inner object is `{"error": "..."}`. Both shapes
//! are modelled so the failure becomes an [`ApiError::Validation`] and never
//! reaches the recipe modal.

#[cfg(test)]
#[path = "recipe_test.rs"]
mod recipe_test;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, decode_json};
use crate::number::deserialize_f64_lenient;

/// `POST /api/ai/generate-recipes` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub meal_name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeMacros {
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub calories: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub protein: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub carbs: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub fat: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prep_time: String,
    pub ingredients: Vec<String>,
    /// Steps in order; rendered numbered from 1.
    pub instructions: Vec<String>,
    #[serde(default)]
    pub macros: RecipeMacros,
}

/// Inner `recipe` object: either a recipe or a soft failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipePayload {
    Failed { error: String },
    Generated(GeneratedRecipe),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub recipe: RecipePayload,
}

impl RecipeResponse {
    /// Unwrap the recipe, turning an embedded failure into a validation error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] carrying the generator's message, or a
    /// generic message when the recipe has no name.
    pub fn into_recipe(self) -> Result<GeneratedRecipe, ApiError> {
        match self.recipe {
            RecipePayload::Failed { error } => Err(ApiError::Validation(error)),
            RecipePayload::Generated(recipe) if recipe.name.trim().is_empty() => {
                Err(ApiError::Validation("generated recipe has no name".to_owned()))
            }
            RecipePayload::Generated(recipe) => Ok(recipe),
        }
    }
}

/// Decode a successful generate-recipes body straight to a recipe.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed bodies and soft failures.
pub fn decode_recipe(body: &[u8]) -> Result<GeneratedRecipe, ApiError> {
    decode_json::<RecipeResponse>(body)?.into_recipe()
}
