//! Generation flow handler.
//!
//! Handles `POST /generate`: one backend call per submission, then either
//! the recipe card or an inline error block in the result container. The
//! submitted form values are preserved in the re-rendered form either way.

use axum::extract::{Form, State};
use maud::Markup;

use crate::api::GenerateRequest;
use crate::recipe::RecipeView;
use crate::render;
use crate::render::components::error_block;
use crate::render::recipe::recipe_card;
use crate::state::AppState;

/// Handle a recipe generation submission.
pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<GenerateRequest>,
) -> Markup {
    let site_name = &state.config.site_name;

    match state.api.generate(&input).await {
        Ok(recipe) => {
            tracing::info!(title = %recipe.title, "recipe generated");
            let view = RecipeView::new(recipe);
            render::generator_page(site_name, &input, Some(recipe_card(&view)))
        }
        Err(err) => {
            tracing::error!(error = %err, "recipe generation failed");
            render::generator_page(site_name, &input, Some(error_block(&err.user_message())))
        }
    }
}
