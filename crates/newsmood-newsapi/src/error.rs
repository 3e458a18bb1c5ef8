use newsmood_core::FetchError;
use thiserror::Error;

/// Errors returned by the NewsAPI client.
#[derive(Debug, Error)]
pub enum NewsApiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP 401: the API key is missing, invalid or disabled.
    #[error("NewsAPI rejected the API key: {0}")]
    Unauthorized(String),

    /// HTTP 429: the account's request quota is exhausted.
    #[error("NewsAPI rate limit reached: {0}")]
    RateLimited(String),

    /// The API returned `"status": "error"` with a code and message.
    #[error("NewsAPI error ({code}): {message}")]
    ApiError { code: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl From<NewsApiError> for FetchError {
    fn from(err: NewsApiError) -> Self {
        match err {
            NewsApiError::Http(e) if e.is_timeout() => FetchError::Network(format!("request timed out: {e}")),
            NewsApiError::Http(e) => FetchError::Network(e.to_string()),
            NewsApiError::Unauthorized(msg) => FetchError::Unauthorized(msg),
            NewsApiError::RateLimited(msg) => FetchError::RateLimited(msg),
            NewsApiError::ApiError { code, message } => FetchError::Provider { code, message },
            e @ NewsApiError::Deserialize { .. } => FetchError::InvalidResponse(e.to_string()),
            e @ NewsApiError::InvalidBaseUrl { .. } => FetchError::Network(e.to_string()),
        }
    }
}
