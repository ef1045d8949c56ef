//! HTTP client for the SmartChef backend API.
//!
//! Every user action maps to exactly one backend call: no retries, no
//! backoff, no request timeout. The backend is trusted; its responses are
//! decoded leniently and rendered after HTML escaping.

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::UiError;
use crate::recipe::Recipe;

/// Anti-forgery token header expected by the backend on state-changing
/// JSON calls. The contact flow does not carry it.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Generation request fields, read once per form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text ingredients entered by the user.
    #[serde(default)]
    pub ingredients: String,
    /// Selected cuisine.
    #[serde(default)]
    pub cuisine: String,
    /// Selected diet.
    #[serde(default)]
    pub diet: String,
}

/// Contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response of the generation endpoint: either a recipe or an error message.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    recipe: Option<Recipe>,
    #[serde(default)]
    error: Option<String>,
}

/// Response shape shared by the save and contact endpoints.
#[derive(Debug, Deserialize)]
struct OutcomeResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    recipe_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Client for the SmartChef backend API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    backend_url: String,
    csrf_token: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_url: config.backend_url.clone(),
            csrf_token: config.csrf_token.clone(),
        }
    }

    /// Build a POST to a backend path, attaching the anti-forgery header
    /// when a token is configured.
    fn post(&self, path: &str) -> RequestBuilder {
        let mut builder = self.http.post(format!("{}/{}", self.backend_url, path));
        if !self.csrf_token.is_empty() {
            builder = builder.header(CSRF_HEADER, &self.csrf_token);
        }
        builder
    }

    /// Request a generated recipe for the submitted form values.
    ///
    /// An `error` field in an otherwise successful response is a backend
    /// failure and never yields a recipe.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<Recipe, UiError> {
        let response = self
            .post("generate-recipe")
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;

        if let Some(message) = body.error {
            return Err(UiError::Backend(message));
        }

        body.recipe
            .ok_or_else(|| UiError::Backend("The backend returned no recipe.".to_string()))
    }

    /// Save an already-persisted recipe to the user's collection.
    pub async fn save_existing(&self, recipe_id: &str) -> Result<(), UiError> {
        let response = self
            .post("save-recipe")
            .json(&serde_json::json!({ "recipe_id": recipe_id }))
            .send()
            .await?
            .error_for_status()?;

        let body: OutcomeResponse = response.json().await?;

        if body.success {
            Ok(())
        } else {
            Err(UiError::Backend(body.message.unwrap_or_else(|| {
                "The recipe could not be saved.".to_string()
            })))
        }
    }

    /// Save a freshly generated recipe; on success the backend assigns an id.
    ///
    /// Returns the assigned id, or `None` if the backend omitted one.
    pub async fn save_generated(&self, recipe: &Recipe) -> Result<Option<String>, UiError> {
        let response = self
            .post("save-generated-recipe")
            .json(&serde_json::json!({ "recipe": recipe }))
            .send()
            .await?
            .error_for_status()?;

        let body: OutcomeResponse = response.json().await?;

        if body.success {
            Ok(body.recipe_id.filter(|id| !id.is_empty()))
        } else {
            Err(UiError::Backend(body.message.unwrap_or_else(|| {
                "The recipe could not be saved.".to_string()
            })))
        }
    }

    /// Forward a contact message as multipart form data.
    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), UiError> {
        let form = reqwest::multipart::Form::new()
            .text("name", message.name.clone())
            .text("email", message.email.clone())
            .text("message", message.message.clone());

        let response = self
            .http
            .post(format!("{}/contact-submit", self.backend_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let body: OutcomeResponse = response.json().await?;

        if body.success {
            Ok(())
        } else {
            Err(UiError::Backend(body.message.unwrap_or_else(|| {
                "An error occurred. Please try again.".to_string()
            })))
        }
    }
}
