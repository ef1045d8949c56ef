//! Recipe card renderer.
//!
//! Renders a generated or persisted recipe into the result container:
//! title, image, timing, servings, optional source, ingredient list,
//! numbered instructions, optional nutrition grid, and the save action.

use maud::{Markup, html};

use super::components::is_safe_url;
use crate::recipe::RecipeView;

/// Render a recipe card.
///
/// The save action is a form carrying the view's stored id plus the full
/// recipe payload, so the save handler can dispatch without any page state:
/// a non-empty id saves the existing recipe, an empty id saves the
/// generated payload. The id is also exposed as `data-recipe-id` on the
/// button, the markup contract for page scripts.
pub fn recipe_card(view: &RecipeView) -> Markup {
    let recipe = &view.recipe;
    // Serializing the model we just deserialized cannot realistically fail;
    // an empty payload degrades to a backend validation error on save.
    let payload = serde_json::to_string(recipe).unwrap_or_default();

    html! {
        div class="recipe-card" {
            h3 id="recipeTitle" { (recipe.title) }

            div class="recipe-layout" {
                div class="recipe-media" {
                    @if is_safe_url(&recipe.image) {
                        img id="recipeImage" src=(recipe.image) alt=(recipe.title) loading="lazy";
                    }
                    div class="recipe-meta" {
                        span { "Time: " span id="cookTime" { (recipe.time) } }
                        span { "Serves: " span id="servings" { (recipe.servings) } }
                    }
                    @if let Some(source) = recipe.source.as_deref() {
                        div class="recipe-source" { "Source: " (source) }
                    }
                }

                div class="recipe-body" {
                    h4 { "Ingredients" }
                    ul id="ingredientsList" {
                        @for ingredient in &recipe.ingredients {
                            li { (ingredient) }
                        }
                    }

                    h4 { "Instructions" }
                    ol id="instructionsList" {
                        @for step in &recipe.instructions {
                            li { (step) }
                        }
                    }
                }
            }

            @if let Some(nutrition) = &recipe.nutrition {
                h4 { "Nutrition Information" }
                div class="nutrition-grid" {
                    @for (name, value) in nutrition {
                        div class="nutrition-cell" {
                            div class="nutrition-value" { (value) }
                            div class="nutrition-label" { (name) }
                        }
                    }
                }
            }

            form class="save-form" method="post" action="/save" {
                input type="hidden" name="recipe_id" value=(view.saved_id_attr());
                input type="hidden" name="recipe" value=(payload);
                button id="saveRecipe" type="submit" data-recipe-id=(view.saved_id_attr()) {
                    "Save Recipe"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use std::collections::BTreeMap;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: None,
            title: "Italian Dinner with Tomatoes".to_string(),
            image: "https://example.com/r.jpg".to_string(),
            time: "35 min".to_string(),
            servings: "4".to_string(),
            source: None,
            ingredients: vec![
                "Tomatoes".to_string(),
                "Basil".to_string(),
                "Pasta".to_string(),
            ],
            instructions: vec![
                "Boil water.".to_string(),
                "Cook the pasta.".to_string(),
                "Serve hot.".to_string(),
            ],
            nutrition: None,
        }
    }

    #[test]
    fn card_contains_title_time_servings() {
        let html = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        assert!(html.contains("Italian Dinner with Tomatoes"));
        assert!(html.contains(r#"id="cookTime""#));
        assert!(html.contains("35 min"));
        assert!(html.contains(r#"id="servings""#));
    }

    #[test]
    fn card_lists_ingredients_in_order() {
        let html = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        let tomatoes = html.find("<li>Tomatoes</li>").unwrap();
        let basil = html.find("<li>Basil</li>").unwrap();
        let pasta = html.find("<li>Pasta</li>").unwrap();
        assert!(tomatoes < basil && basil < pasta);
    }

    #[test]
    fn card_numbers_instructions_in_order() {
        let html = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        assert!(html.contains(r#"<ol id="instructionsList">"#));
        let boil = html.find("Boil water.").unwrap();
        let cook = html.find("Cook the pasta.").unwrap();
        let serve = html.find("Serve hot.").unwrap();
        assert!(boil < cook && cook < serve);
    }

    #[test]
    fn save_button_stored_id_empty_for_generated_recipe() {
        let html = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        assert!(html.contains(r#"id="saveRecipe""#));
        assert!(html.contains(r#"data-recipe-id="""#));
        assert!(html.contains(r#"name="recipe_id" value="""#));
    }

    #[test]
    fn save_button_stored_id_from_persisted_recipe() {
        let mut recipe = sample_recipe();
        recipe.id = Some("17".to_string());
        let html = recipe_card(&RecipeView::new(recipe)).into_string();
        assert!(html.contains(r#"data-recipe-id="17""#));
        assert!(html.contains(r#"name="recipe_id" value="17""#));
    }

    #[test]
    fn save_form_carries_full_recipe_payload() {
        let html = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        // The JSON payload is attribute-escaped; quotes become entities.
        assert!(html.contains("&quot;title&quot;:&quot;Italian Dinner with Tomatoes&quot;"));
    }

    #[test]
    fn source_rendered_only_when_present() {
        let without = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        assert!(!without.contains("Source:"));

        let mut recipe = sample_recipe();
        recipe.source = Some("SmartChef Community".to_string());
        let with = recipe_card(&RecipeView::new(recipe)).into_string();
        assert!(with.contains("Source: SmartChef Community"));
    }

    #[test]
    fn nutrition_grid_rendered_only_when_present() {
        let without = recipe_card(&RecipeView::new(sample_recipe())).into_string();
        assert!(!without.contains("Nutrition Information"));

        let mut recipe = sample_recipe();
        let mut nutrition = BTreeMap::new();
        nutrition.insert("Calories".to_string(), "420".to_string());
        nutrition.insert("Protein".to_string(), "12g".to_string());
        recipe.nutrition = Some(nutrition);
        let with = recipe_card(&RecipeView::new(recipe)).into_string();
        assert!(with.contains("Nutrition Information"));
        assert!(with.contains("420"));
        assert!(with.contains("Protein"));
    }

    #[test]
    fn unsafe_image_url_is_not_rendered() {
        let mut recipe = sample_recipe();
        recipe.image = "javascript:alert(1)".to_string();
        let html = recipe_card(&RecipeView::new(recipe)).into_string();
        assert!(!html.contains("javascript:alert(1)"));
        assert!(!html.contains(r#"id="recipeImage""#));
    }

    #[test]
    fn backend_text_is_escaped() {
        let mut recipe = sample_recipe();
        recipe.title = "<script>steal()</script>".to_string();
        recipe.ingredients = vec!["<b>Tomatoes</b>".to_string()];
        let html = recipe_card(&RecipeView::new(recipe)).into_string();
        assert!(!html.contains("<script>steal()</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>Tomatoes</b>"));
    }
}
