use serde::Serialize;
use std::fmt;

/// Step shown when the upstream recipe carries no instructions.
pub const MISSING_STEPS_PLACEHOLDER: &str =
    "Langkah detail tidak tersedia, silakan cek URL sumber.";

/// Opaque identifier returned by the recipe search service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recipe data as extracted from the detail endpoint, still in English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub title: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
    /// Empty when the source has no analyzed instructions
    pub steps: Vec<String>,
}

/// A localized recipe ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    source_url: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
}

impl Recipe {
    /// Build a recipe. An empty step list is replaced by the placeholder step.
    pub fn new(
        name: String,
        source_url: String,
        ingredients: Vec<String>,
        mut steps: Vec<String>,
    ) -> Self {
        if steps.is_empty() {
            steps.push(MISSING_STEPS_PLACEHOLDER.to_string());
        }
        Self {
            name,
            source_url,
            ingredients,
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}
