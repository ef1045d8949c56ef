//! The Recipe data model and its view state.
//!
//! A recipe is whatever the backend returns. Fields are lenient on
//! deserialization so a partial backend payload still renders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A structured cooking result returned by the backend.
///
/// `id` is absent until the recipe has been persisted by a save request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Persisted recipe id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Recipe title.
    #[serde(default)]
    pub title: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Cooking time, as display text (e.g., "35 min").
    #[serde(default)]
    pub time: String,
    /// Servings, as display text (e.g., "4 servings").
    #[serde(default)]
    pub servings: String,
    /// Attribution for the recipe, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Ingredients, in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps, in display order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Nutrient name -> display value, if the backend provided any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<BTreeMap<String, String>>,
}

/// View state for a rendered recipe card.
///
/// Owns the save action's stored id explicitly: the id starts as the
/// recipe's own id (empty for a freshly generated recipe) and is advanced
/// by re-rendering the view after a successful save, never by mutating
/// the rendered markup in place.
#[derive(Debug, Clone)]
pub struct RecipeView {
    /// The recipe being displayed.
    pub recipe: Recipe,
    /// The id the save action will post. `None` routes the save to the
    /// generated-recipe endpoint with the full payload.
    pub saved_id: Option<String>,
}

impl RecipeView {
    /// Build the view for a recipe fresh from the backend.
    pub fn new(recipe: Recipe) -> Self {
        let saved_id = recipe.id.clone().filter(|id| !id.is_empty());
        Self { recipe, saved_id }
    }

    /// Rebuild the view with a new stored id after a successful save.
    pub fn with_saved_id(mut self, id: Option<String>) -> Self {
        self.saved_id = id.filter(|id| !id.is_empty());
        self
    }

    /// The stored id as rendered into `data-recipe-id` (empty when absent).
    pub fn saved_id_attr(&self) -> &str {
        self.saved_id.as_deref().unwrap_or("")
    }
}
