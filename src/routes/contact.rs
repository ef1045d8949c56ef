//! Contact page and submission handler.
//!
//! `GET /contact` renders the form; `POST /contact` forwards the fields to
//! the backend as multipart form data. A successful submission clears the
//! form; a failure re-renders it with the entered values intact.

use axum::extract::{Multipart, State};
use maud::Markup;

use crate::api::ContactMessage;
use crate::render;
use crate::render::components::{NoticeKind, notice};
use crate::state::AppState;

/// Render the contact page with an empty form.
pub async fn page(State(state): State<AppState>) -> Markup {
    render::contact_page(&state.config.site_name, &ContactMessage::default(), None)
}

/// Handle a contact submission.
pub async fn submit(State(state): State<AppState>, mut multipart: Multipart) -> Markup {
    let site_name = &state.config.site_name;

    let mut message = ContactMessage::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await.unwrap_or_default();
        match name.as_str() {
            "name" => message.name = value,
            "email" => message.email = value,
            "message" => message.message = value,
            _ => {}
        }
    }

    match state.api.submit_contact(&message).await {
        Ok(()) => {
            tracing::info!(email = %message.email, "contact message sent");
            render::contact_page(
                site_name,
                &ContactMessage::default(),
                Some(notice(
                    NoticeKind::Success,
                    "Thank you for your message! We will get back to you soon.",
                )),
            )
        }
        Err(err) => {
            tracing::error!(error = %err, "contact submission failed");
            render::contact_page(
                site_name,
                &message,
                Some(notice(NoticeKind::Error, &format!("Error: {}", err.user_message()))),
            )
        }
    }
}
