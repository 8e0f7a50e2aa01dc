use crate::error::{CompentubeError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Environment-driven configuration, read once at startup.
///
/// A missing Google client id is not a startup failure: the application
/// still constructs and renders a configuration-error view instead.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub google_client_id: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend_url = std::env::var("COMPENTUBE_BACKEND_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let google_client_id = std::env::var("GOOGLE_CLIENT_ID")
            .ok()
            .filter(|v| !v.is_empty());
        Self::new(backend_url, google_client_id)
    }

    pub fn new(backend_url: impl Into<String>, google_client_id: Option<String>) -> Self {
        let mut backend_url = backend_url.into();
        while backend_url.ends_with('/') {
            backend_url.pop();
        }
        Self {
            backend_url,
            google_client_id,
        }
    }

    pub fn require_client_id(&self) -> Result<&str> {
        self.google_client_id
            .as_deref()
            .ok_or(CompentubeError::MissingClientId)
    }
}
