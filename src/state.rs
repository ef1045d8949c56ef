//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the SmartChef backend API.
    pub api: ApiClient,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config);

        tracing::info!(backend_url = %config.backend_url, "application state initialized");

        Self {
            api,
            config: Arc::new(config),
        }
    }
}
