use thiserror::Error;

/// Errors that can occur while searching, fetching or translating recipes
#[derive(Error, Debug)]
pub enum ResepError {
    /// The ingredient query was empty
    #[error("Ingredient query is empty")]
    EmptyQuery,

    /// No API key is configured for the named service
    #[error("Missing API key for {0}")]
    MissingCredentials(&'static str),

    /// Network or transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("{service} responded with status {status}")]
    Status {
        service: &'static str,
        status: reqwest::StatusCode,
    },

    /// Upstream quota for the named service is exhausted
    #[error("Quota exceeded for {0}")]
    QuotaExceeded(&'static str),

    /// Upstream answered with a body we could not use
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Translation of the ingredient query failed
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Every recipe detail request failed
    #[error("Failed to fetch details for all {attempted} recipes")]
    NoRecipeDetails { attempted: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResepError>;
