use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompentubeError {
    #[error("Please sign in to generate a summary")]
    SignInRequired,

    #[error("Please paste a YouTube link first")]
    MissingLink,

    #[error("{message}")]
    Backend { message: String },

    #[error("The Google Client ID is missing: set GOOGLE_CLIENT_ID in the environment")]
    MissingClientId,

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CompentubeError>;
