//! Route definitions for the UI service.
//!
//! ## Routes
//!
//! - `GET /` - Generator page (recipe form + result container)
//! - `POST /generate` - Generation flow
//! - `POST /save` - Save flow (dispatch on the stored recipe id)
//! - `GET /contact` - Contact page
//! - `POST /contact` - Contact flow (multipart)
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod contact;
mod generate;
mod health;
mod home;
mod save;

#[cfg(test)]
pub(crate) mod testutil;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete UI service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/generate", post(generate::submit))
        .route("/save", post(save::submit))
        .route("/contact", get(contact::page).post(contact::submit))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
