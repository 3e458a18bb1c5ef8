//! NewsAPI response types.
//!
//! Successful responses carry `"status": "ok"` with an `articles` array;
//! failures carry `"status": "error"` with a machine-readable `code` and a
//! human-readable `message`.

use serde::Deserialize;

/// Envelope for `/v2/everything`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<ApiArticle>,
}

/// Error envelope returned with `"status": "error"`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One article as NewsAPI reports it. Every field may be `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiArticle {
    #[serde(default)]
    pub source: Option<ApiSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
