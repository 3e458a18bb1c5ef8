//! Client for the NewsAPI `/v2/everything` endpoint.
//!
//! [`NewsApiClient`] implements [`newsmood_core::ArticleFetcher`] so the
//! sentiment pipeline can consume it without knowing about HTTP.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use types::{ApiArticle, ApiSource, EverythingResponse};
