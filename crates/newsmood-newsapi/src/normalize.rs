//! Normalization of NewsAPI articles into [`RawArticle`]s.

use newsmood_core::RawArticle;

use crate::types::ApiArticle;

/// Source label used when NewsAPI omits the source name.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Converts an [`ApiArticle`] into the provider-neutral [`RawArticle`].
///
/// The title is passed through untouched (including `None`); deciding what
/// to do with untitled articles belongs to the pipeline. A missing source
/// name becomes [`UNKNOWN_SOURCE`] and a missing URL becomes an empty string.
#[must_use]
pub fn normalize_article(article: ApiArticle) -> RawArticle {
    let source_name = article
        .source
        .and_then(|s| s.name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

    RawArticle {
        title: article.title,
        source_name,
        url: article.url.unwrap_or_default(),
    }
}

/// Normalizes a page of articles, keeping provider order and at most `limit` items.
#[must_use]
pub fn normalize_articles(articles: Vec<ApiArticle>, limit: usize) -> Vec<RawArticle> {
    articles
        .into_iter()
        .take(limit)
        .map(normalize_article)
        .collect()
}
