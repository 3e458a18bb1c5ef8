//! Validated search parameters for one pipeline run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest article count a run may request.
pub const MIN_LIMIT: u32 = 1;
/// Largest article count a run may request (the provider's page-size cap).
pub const MAX_LIMIT: u32 = 100;
/// Article count used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 15;

/// Errors raised while building [`QueryParameters`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search keyword must not be empty")]
    EmptyKeyword,

    #[error("article limit {limit} is outside the accepted range {min}..={max}")]
    LimitOutOfRange { limit: u32, min: u32, max: u32 },

    #[error("unknown sort order '{0}' (expected relevancy, publishedAt or popularity)")]
    UnknownSortOrder(String),
}

/// Ordering applied by the news provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "relevancy")]
    Relevancy,
    #[serde(rename = "publishedAt")]
    PublishedAt,
    #[serde(rename = "popularity")]
    Popularity,
}

impl SortOrder {
    /// Name the provider expects on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevancy => "relevancy",
            SortOrder::PublishedAt => "publishedAt",
            SortOrder::Popularity => "popularity",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevancy" | "relevance" => Ok(SortOrder::Relevancy),
            "publishedat" | "published_at" | "published-at" => Ok(SortOrder::PublishedAt),
            "popularity" => Ok(SortOrder::Popularity),
            _ => Err(QueryError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Keyword, article limit and sort order for one run.
///
/// Fields are private so every instance has passed [`QueryParameters::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    keyword: String,
    limit: u32,
    sort_order: SortOrder,
}

impl QueryParameters {
    /// Validate and build the parameters. The keyword is stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyKeyword`] for an empty or whitespace-only
    /// keyword and [`QueryError::LimitOutOfRange`] when `limit` falls outside
    /// `MIN_LIMIT..=MAX_LIMIT`.
    pub fn new(
        keyword: impl AsRef<str>,
        limit: u32,
        sort_order: SortOrder,
    ) -> Result<Self, QueryError> {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            return Err(QueryError::EmptyKeyword);
        }
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(QueryError::LimitOutOfRange {
                limit,
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            });
        }
        Ok(Self {
            keyword: keyword.to_string(),
            limit,
            sort_order,
        })
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }
}
