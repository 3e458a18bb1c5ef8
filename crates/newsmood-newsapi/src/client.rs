//! HTTP client for the NewsAPI REST API.
//!
//! Wraps `reqwest` with NewsAPI-specific error handling, API key management,
//! and typed response deserialization. The key travels in the `X-Api-Key`
//! header so it never appears in logged URLs.

use std::time::Duration;

use async_trait::async_trait;
use newsmood_core::{ArticleFetcher, FetchError, QueryParameters, RawArticle};
use reqwest::{Client, StatusCode, Url};

use crate::error::NewsApiError;
use crate::normalize::normalize_articles;
use crate::types::{ApiErrorBody, EverythingResponse};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/";
const DEFAULT_USER_AGENT: &str = "newsmood/0.1 (headline-sentiment)";
const EVERYTHING_PATH: &str = "v2/everything";
/// Headlines are only scored in English.
const LANGUAGE: &str = "en";

/// Client for the NewsAPI REST API.
///
/// Use [`NewsApiClient::new`] for production or
/// [`NewsApiClient::with_base_url`] to point at a mock server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL, DEFAULT_USER_AGENT)
    }

    /// Creates a new client with a custom base URL and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsApiError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| NewsApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches all articles matching the query keyword.
    ///
    /// Calls `/v2/everything` with `language=en` and `pageSize` set to
    /// `params.limit()`, returning the decoded page as-is.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Unauthorized`] on HTTP 401.
    /// - [`NewsApiError::RateLimited`] on HTTP 429.
    /// - [`NewsApiError::ApiError`] on any other non-2xx status or an error
    ///   envelope; the code falls back to the HTTP status when absent.
    /// - [`NewsApiError::Http`] on network failure.
    /// - [`NewsApiError::Deserialize`] if the body does not match the expected shape.
    pub async fn everything(
        &self,
        params: &QueryParameters,
    ) -> Result<EverythingResponse, NewsApiError> {
        let page_size = params.limit().to_string();
        let url = self.build_url(
            EVERYTHING_PATH,
            &[
                ("q", params.keyword()),
                ("language", LANGUAGE),
                ("sortBy", params.sort_order().as_str()),
                ("pageSize", &page_size),
            ],
        )?;

        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| NewsApiError::Deserialize {
            context: format!("everything(q={})", params.keyword()),
            source: e,
        })
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, NewsApiError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| NewsApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and parses the response body as JSON.
    ///
    /// 401 and 429 are mapped to their dedicated variants. Other non-2xx
    /// statuses surface the error envelope when the body carries one.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, NewsApiError> {
        let response = self
            .client
            .get(url.clone())
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let envelope = serde_json::from_str::<ApiErrorBody>(&text).ok();
            let message = envelope
                .as_ref()
                .and_then(|b| b.message.clone())
                .unwrap_or_else(|| format!("HTTP {status}"));

            return Err(match status {
                StatusCode::UNAUTHORIZED => NewsApiError::Unauthorized(message),
                StatusCode::TOO_MANY_REQUESTS => NewsApiError::RateLimited(message),
                _ => match envelope.and_then(|b| b.code) {
                    Some(code) => NewsApiError::ApiError { code, message },
                    None => NewsApiError::ApiError {
                        code: status.as_u16().to_string(),
                        message,
                    },
                },
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NewsApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(body: &serde_json::Value) -> Result<(), NewsApiError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("error") {
            let field = |name: &str| {
                body.get(name)
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string)
            };
            return Err(NewsApiError::ApiError {
                code: field("code").unwrap_or_else(|| "unknown".to_string()),
                message: field("message").unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleFetcher for NewsApiClient {
    async fn fetch_articles(&self, params: &QueryParameters) -> Result<Vec<RawArticle>, FetchError> {
        let response = self.everything(params).await.map_err(|e| {
            tracing::warn!(keyword = %params.keyword(), error = %e, "NewsAPI request failed");
            FetchError::from(e)
        })?;

        tracing::debug!(
            keyword = %params.keyword(),
            total_results = response.total_results,
            returned = response.articles.len(),
            "NewsAPI page received"
        );

        let limit = usize::try_from(params.limit()).unwrap_or(usize::MAX);
        Ok(normalize_articles(response.articles, limit))
    }
}
