//! Headline sentiment pipeline for newsmood.
//!
//! Fetches headlines through an [`newsmood_core::ArticleFetcher`], scores each
//! one with a rule-based polarity model, buckets the scores into
//! Positive/Neutral/Negative and aggregates the run into counts, a dominant
//! label and an ordered reporting table that can be exported as CSV.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use aggregate::aggregate;
pub use classifier::Classifier;
pub use error::{ClassificationError, ExportError, PipelineError};
pub use export::{export_report, report_file_name, to_csv_bytes, write_csv};
pub use pipeline::{Pipeline, RunOutcome, RunState};
pub use scorer::{lexicon_score, LexiconModel, PolarityModel, PolarityScores};
pub use types::{AggregationResult, ClassifiedArticle, SentimentCounts, SentimentLabel};
