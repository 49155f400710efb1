use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Groq completion error: {0}")]
    Completion(String),

    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),

    #[error("GitHub response missing field: {0}")]
    MissingField(&'static str),
}

pub type PostResult<T> = Result<T, PostError>;
