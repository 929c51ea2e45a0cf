//! Structured error types for the generation layer.
//!
//! Designed to be displayable in both CLI and TUI contexts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("no API key: set GEMINI_API_KEY or api_key in config.toml")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    #[error("model returned no usable candidates")]
    EmptyResponse,

    #[error("model returned malformed plan JSON: {0}")]
    MalformedPlan(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
