//! Shared domain types and configuration for newsmood.
//!
//! Holds the validated query value, the raw article record produced by a
//! news provider, the [`ArticleFetcher`] contract, and the environment-driven
//! [`AppConfig`].

pub mod app_config;
pub mod article;
pub mod config;
pub mod query;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use article::{ArticleFetcher, FetchError, RawArticle};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{QueryError, QueryParameters, SortOrder, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
