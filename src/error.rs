use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlbarError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("GitLab returned 404 for {0}")]
    NotFound(String),

    #[error("Connection failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GlbarError>;
