//! Error types for the UI service.
//!
//! Handlers normally convert these into inline notices; errors that escape
//! a handler are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// UI service error type.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The backend accepted the request but reported a failure
    /// (`success: false` or an `error` field in the response body).
    #[error("backend reported failure: {0}")]
    Backend(String),

    /// The backend could not be reached, or returned a non-2xx status.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal error (payload decoding, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl UiError {
    /// The message shown to the user in inline notices.
    ///
    /// Backend-reported failures surface the server's own message; everything
    /// else collapses to a generic retry prompt, matching the single-attempt,
    /// no-retry error model.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend(msg) => msg.clone(),
            Self::Upstream(_) => {
                "The recipe service could not be reached. Please try again.".to_string()
            }
            Self::Internal(_) => "An internal error occurred. Please try again.".to_string(),
        }
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let (status, title) = match &self {
            Self::Backend(msg) => {
                tracing::warn!(message = %msg, "backend reported failure");
                (StatusCode::BAD_GATEWAY, "Recipe Service Error")
            }
            Self::Upstream(err) => {
                tracing::error!(error = %err, "backend request failed");
                (StatusCode::BAD_GATEWAY, "Service Unavailable")
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error")
            }
        };

        let message = self.user_message();

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) " - SmartChef" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to SmartChef" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}
