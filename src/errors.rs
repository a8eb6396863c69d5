use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to reach the business search API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from {endpoint}: {message}")]
    MalformedResponse {
        endpoint: &'static str,
        message: String,
    },

    #[error("no business found for {0:?}")]
    NotFound(String),
}
