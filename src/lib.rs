//! SmartChef UI - server-rendered interaction layer for the SmartChef
//! recipe application.
//!
//! This crate provides a lightweight HTTP server that wires the recipe
//! generator, recipe save, and contact forms to the trusted SmartChef
//! backend API and renders the returned recipe data into HTML.
//!
//! # Architecture
//!
//! - **Api**: Single-shot JSON/multipart calls against the backend endpoints
//! - **Render**: Generates HTML with maud (compile-time templates)
//! - **Routes**: Form handlers that drive one backend call per submission
//!
//! # Flows
//!
//! ```text
//! POST /generate  -> backend generate-recipe          -> recipe card or inline error
//! POST /save      -> backend save-recipe or
//!                    save-generated-recipe (dispatch
//!                    on the stored recipe id)         -> re-rendered card with notice
//! POST /contact   -> backend contact-submit           -> cleared or preserved form
//! ```
//!
//! # Security
//!
//! - All backend-supplied content is HTML-escaped by maud
//! - Image and source URLs are validated (HTTPS/HTTP only) before use in attributes
//! - State-changing backend calls carry the configured anti-forgery token header

pub mod api;
pub mod config;
pub mod error;
pub mod recipe;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
