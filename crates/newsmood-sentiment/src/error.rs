use newsmood_core::{FetchError, QueryError};
use thiserror::Error;

/// Per-headline failure. The pipeline skips the article and keeps going.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClassificationError {
    #[error("article has no headline to classify")]
    MissingTitle,

    #[error("polarity model returned a non-finite score: {0}")]
    NonFiniteScore(f64),

    #[error("polarity model error: {0}")]
    Model(String),
}

/// Run-level failure. No aggregation result is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("failed to fetch articles: {0}")]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
