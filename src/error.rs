//! Error types for the Course2CEO client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'course2ceo init' first.")]
    ConfigNotFound,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A non-2xx response, normalized to a display-ready message.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not logged in. Run 'course2ceo login' first.")]
    NotAuthenticated,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this is a 401 from the backend, i.e. the session is invalid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
