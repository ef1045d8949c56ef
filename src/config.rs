//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL of the SmartChef backend API (no trailing slash).
    pub backend_url: String,

    /// Site name shown in page titles and headers.
    pub site_name: String,

    /// Anti-forgery token sent as `X-CSRFToken` on state-changing backend
    /// calls. The backend issues this value out of band; the contact flow
    /// does not carry it.
    pub csrf_token: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `SMARTCHEF_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `SMARTCHEF_BACKEND_URL`: Backend API base URL (default: "http://localhost:5000")
    /// - `SMARTCHEF_SITE_NAME`: Site name (default: "SmartChef")
    /// - `SMARTCHEF_CSRF_TOKEN`: Anti-forgery token value (default: empty,
    ///   header omitted)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("SMARTCHEF_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let backend_url = std::env::var("SMARTCHEF_BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("SMARTCHEF_SITE_NAME").unwrap_or_else(|_| "SmartChef".to_string());

        let csrf_token = std::env::var("SMARTCHEF_CSRF_TOKEN").unwrap_or_default();

        tracing::info!(
            bind_addr = %bind_addr,
            backend_url = %backend_url,
            site_name = %site_name,
            csrf_configured = !csrf_token.is_empty(),
            "ui configuration loaded"
        );

        Ok(Self {
            bind_addr,
            backend_url,
            site_name,
            csrf_token,
        })
    }
}
