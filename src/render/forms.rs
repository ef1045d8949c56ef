//! Form fragments for the generator and contact pages.
//!
//! Element identifiers (`recipeForm`, `ingredients`, `cuisine`, `diet`,
//! `contactForm`) are a fixed contract between markup and any page script.

use maud::{Markup, html};

use super::components::LOADING_SCRIPT;
use crate::api::{ContactMessage, GenerateRequest};

/// Cuisine options offered by the generator form.
pub const CUISINES: &[&str] = &[
    "Any",
    "Italian",
    "Mexican",
    "Indian",
    "Chinese",
    "American",
    "Mediterranean",
];

/// Diet options offered by the generator form.
pub const DIETS: &[&str] = &["None", "Vegetarian", "Vegan", "Gluten-Free", "Keto"];

/// Render the recipe generator form, preserving the submitted values.
pub fn generator_form(input: &GenerateRequest) -> Markup {
    html! {
        form id="recipeForm" method="post" action="/generate" onsubmit=(LOADING_SCRIPT) {
            label for="ingredients" { "Ingredients" }
            textarea id="ingredients" name="ingredients" rows="3"
                placeholder="e.g. tomatoes, basil, pasta" {
                (input.ingredients)
            }

            div class="form-row" {
                div {
                    label for="cuisine" { "Cuisine" }
                    select id="cuisine" name="cuisine" {
                        @for cuisine in CUISINES {
                            option value=(cuisine) selected[*cuisine == input.cuisine] {
                                (cuisine)
                            }
                        }
                    }
                }
                div {
                    label for="diet" { "Diet" }
                    select id="diet" name="diet" {
                        @for diet in DIETS {
                            option value=(diet) selected[*diet == input.diet] {
                                (diet)
                            }
                        }
                    }
                }
            }

            button type="submit" { "Generate Recipe" }
        }
    }
}

/// Render the contact form, preserving the submitted values.
pub fn contact_form(message: &ContactMessage) -> Markup {
    html! {
        form id="contactForm" method="post" action="/contact" enctype="multipart/form-data" {
            label for="name" { "Name" }
            input id="name" name="name" type="text" value=(message.name) required;

            label for="email" { "Email" }
            input id="email" name="email" type="email" value=(message.email) required;

            label for="message" { "Message" }
            textarea id="message" name="message" rows="5" required {
                (message.message)
            }

            button type="submit" { "Send Message" }
        }
    }
}
