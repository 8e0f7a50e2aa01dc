//! HTTP client for the Compentube backend plus the Google OAuth URL builder.
//!
//! Session credentials are cookies; the client keeps a cookie store so every
//! request carries them, matching the browser's `credentials: 'include'`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{CompentubeError, Result},
    types::{SummaryLength, User, VideoDetails},
};

const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Scopes requested during login. The summarizer backend needs YouTube data
/// access and the generative-language API on the user's behalf.
const OAUTH_SCOPES: &str = "openid email profile \
    https://www.googleapis.com/auth/youtube \
    https://www.googleapis.com/auth/cloud-platform \
    https://www.googleapis.com/auth/generative-language.retriever";

#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    #[serde(rename = "loggedIn")]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl AuthStatus {
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            user: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    #[serde(rename = "youtubeLink")]
    pub youtube_link: &'a str,
    /// Human-readable language name (e.g. "French"), as the backend expects.
    pub language: &'a str,
    pub length: SummaryLength,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    #[serde(rename = "videoDetails")]
    pub video_details: VideoDetails,
}

#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    /// One-shot session check, issued exactly once per application load.
    /// A non-success response means "not logged in", not an error.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        let url = format!("{}/api/auth/status", self.base_url);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "auth status check was not ok");
            return Ok(AuthStatus::logged_out());
        }
        Ok(response.json().await?)
    }

    /// Ends the backend session. Callers clear local state regardless of
    /// the outcome, so only completion matters here.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/api/auth/logout", self.base_url);
        self.http.post(&url).send().await?;
        Ok(())
    }

    pub async fn summarize(&self, request: &SummarizeRequest<'_>) -> Result<SummarizeResponse> {
        let url = format!("{}/api/summarize", self.base_url);
        debug!(link = request.youtube_link, "requesting summary");
        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("request failed");
            let body = response.text().await.unwrap_or_default();
            return Err(CompentubeError::Backend {
                message: backend_error_message(&body, status_text),
            });
        }

        Ok(response.json().await?)
    }
}

/// Pull the application error out of a non-2xx body, falling back to the
/// transport status text when the body carries no `message`.
pub fn backend_error_message(body: &str, status_text: &str) -> String {
    serde_json::from_str::<BackendMessage>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("An error occurred: {status_text}"))
}

/// Authorization URL for the external Google OAuth flow. Login is a full
/// page navigation to this URL; the app resumes via the status check after
/// the backend callback redirects back.
pub fn google_auth_url(backend_url: &str, client_id: &str) -> String {
    let redirect_uri = format!("{}/api/auth/google/callback", backend_url.trim_end_matches('/'));
    let scope = OAUTH_SCOPES.split_whitespace().collect::<Vec<_>>().join(" ");
    let url = reqwest::Url::parse_with_params(
        GOOGLE_AUTH_ENDPOINT,
        &[
            ("client_id", client_id),
            ("redirect_uri", redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ],
    )
    .expect("static auth endpoint is a valid base url");
    url.into()
}
