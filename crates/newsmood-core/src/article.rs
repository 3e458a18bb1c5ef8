//! Raw article records and the news-provider contract.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::query::QueryParameters;

/// One article as returned by a news provider, before classification.
///
/// `title` is optional because providers occasionally omit it; such
/// articles cannot be classified and are skipped by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub source_name: String,
    pub url: String,
}

impl RawArticle {
    #[must_use]
    pub fn new(title: impl Into<String>, source_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            source_name: source_name.into(),
            url: url.into(),
        }
    }

    /// The trimmed headline, or `None` when it is missing or blank.
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Failure reported by a news provider. Never retried by the pipeline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("provider rejected the credentials: {0}")]
    Unauthorized(String),

    #[error("provider rate limit reached: {0}")]
    RateLimited(String),

    #[error("provider error ({code}): {message}")]
    Provider { code: String, message: String },

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("fetch timed out after {after:?}")]
    Timeout { after: Duration },
}

/// Source of raw articles for a query.
///
/// Implementations return at most `params.limit()` articles in the order
/// requested by `params.sort_order()`. An empty `Vec` means the provider had
/// nothing for the keyword, which is not an error.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch_articles(&self, params: &QueryParameters) -> Result<Vec<RawArticle>, FetchError>;
}
