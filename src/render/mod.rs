//! HTML rendering for the SmartChef UI.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection: backend-supplied text is treated
//! as untrusted and escaped on interpolation.

pub mod components;
pub mod forms;
pub mod recipe;

use maud::{Markup, html};

use crate::api::{ContactMessage, GenerateRequest};
use components::page_shell;

/// Render the generator page: the recipe form plus the result container.
///
/// `result` is the content of the `recipeResult` container - a recipe card,
/// an inline error block, or nothing (hidden) on first load.
pub fn generator_page(site_name: &str, input: &GenerateRequest, result: Option<Markup>) -> Markup {
    let title = format!("{site_name} - Recipe Generator");
    let body = html! {
        section class="generator" {
            h2 { "Generate a Recipe" }
            p { "Tell us what you have on hand and we'll cook something up." }
            (forms::generator_form(input))
        }
        @if let Some(inner) = result {
            section id="recipeResult" { (inner) }
        } @else {
            section id="recipeResult" class="hidden" {}
        }
    };
    page_shell(&title, site_name, body)
}

/// Render the contact page, with an optional notice above the form.
pub fn contact_page(site_name: &str, message: &ContactMessage, notice: Option<Markup>) -> Markup {
    let title = format!("{site_name} - Contact");
    let body = html! {
        section class="contact" {
            h2 { "Contact Us" }
            @if let Some(n) = notice { (n) }
            (forms::contact_form(message))
        }
    };
    page_shell(&title, site_name, body)
}

/// Render a standalone outcome page for the save flow.
pub fn notice_page(site_name: &str, heading: &str, notice: Markup) -> Markup {
    let title = format!("{site_name} - {heading}");
    let body = html! {
        section class="notice-page" {
            h2 { (heading) }
            (notice)
            a href="/" { "Back to the generator" }
        }
    };
    page_shell(&title, site_name, body)
}
