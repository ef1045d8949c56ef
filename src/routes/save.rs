//! Save flow handler.
//!
//! Handles `POST /save`, dispatching on the stored recipe id carried by the
//! save form: a non-empty id saves the existing recipe, an empty id posts
//! the full generated payload to the save-new endpoint. Either way the
//! recipe card is re-rendered with the outcome notice above it; on a
//! successful generated save the card carries the server-assigned id as
//! the stored id, so the next save targets the existing-recipe endpoint.

use axum::extract::{Form, State};
use maud::{Markup, html};
use serde::Deserialize;

use crate::api::GenerateRequest;
use crate::error::UiError;
use crate::recipe::{Recipe, RecipeView};
use crate::render;
use crate::render::components::{NoticeKind, notice};
use crate::render::recipe::recipe_card;
use crate::state::AppState;

/// Fields posted by the save form on the recipe card.
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    /// The stored recipe id; empty for a recipe not yet persisted.
    #[serde(default)]
    pub recipe_id: String,
    /// The full recipe as JSON, used to re-render the card and, when the
    /// id is empty, as the body of the save-new call.
    #[serde(default)]
    pub recipe: String,
}

/// Handle a save submission.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<Markup, UiError> {
    let site_name = &state.config.site_name;

    // Existing recipe: post the id, then re-render the card unchanged with
    // the outcome notice above it.
    if !form.recipe_id.is_empty() {
        let note = match state.api.save_existing(&form.recipe_id).await {
            Ok(()) => {
                tracing::info!(recipe_id = %form.recipe_id, "recipe saved");
                notice(NoticeKind::Success, "Recipe saved to your collection!")
            }
            Err(err) => {
                tracing::error!(error = %err, recipe_id = %form.recipe_id, "recipe save failed");
                notice(NoticeKind::Error, &format!("Error: {}", err.user_message()))
            }
        };

        // The card survives as long as the form carried a readable payload;
        // without one there is nothing to re-render.
        return Ok(match serde_json::from_str::<Recipe>(&form.recipe) {
            Ok(recipe) => {
                let view = RecipeView::new(recipe).with_saved_id(Some(form.recipe_id));
                let result = html! { (note) (recipe_card(&view)) };
                render::generator_page(site_name, &GenerateRequest::default(), Some(result))
            }
            Err(_) => render::notice_page(site_name, "Save Recipe", note),
        });
    }

    // Generated recipe: decode the payload and post it whole. A payload the
    // card itself produced should always decode; failure escapes to the
    // error page.
    let recipe: Recipe = serde_json::from_str(&form.recipe).map_err(|err| {
        UiError::Internal(anyhow::anyhow!("invalid recipe payload in save form: {err}"))
    })?;

    Ok(match state.api.save_generated(&recipe).await {
        Ok(new_id) => {
            tracing::info!(recipe_id = new_id.as_deref().unwrap_or(""), "generated recipe saved");
            let view = RecipeView::new(recipe).with_saved_id(new_id);
            let result = html! {
                (notice(NoticeKind::Success, "Recipe saved to your collection!"))
                (recipe_card(&view))
            };
            render::generator_page(site_name, &GenerateRequest::default(), Some(result))
        }
        Err(err) => {
            tracing::error!(error = %err, "generated recipe save failed");
            let view = RecipeView::new(recipe);
            let result = html! {
                (notice(NoticeKind::Error, &format!("Error: {}", err.user_message())))
                (recipe_card(&view))
            };
            render::generator_page(site_name, &GenerateRequest::default(), Some(result))
        }
    })
}
