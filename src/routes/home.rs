//! Generator page - the application landing page.

use axum::extract::State;
use maud::Markup;

use crate::api::GenerateRequest;
use crate::render;
use crate::state::AppState;

/// Render the generator page with an empty, hidden result container.
pub async fn home_page(State(state): State<AppState>) -> Markup {
    render::generator_page(&state.config.site_name, &GenerateRequest::default(), None)
}
