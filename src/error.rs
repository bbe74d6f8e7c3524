//! API Error Taxonomy

use thiserror::Error;

/// Failure of one HTTP call, as surfaced to the UI
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
