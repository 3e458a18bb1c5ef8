//! Sentiment pipeline orchestration.

use std::fmt;
use std::time::Duration;

use newsmood_core::{ArticleFetcher, FetchError, QueryParameters, RawArticle, SortOrder};

use crate::aggregate::aggregate;
use crate::classifier::Classifier;
use crate::error::PipelineError;
use crate::scorer::PolarityModel;
use crate::types::{AggregationResult, ClassifiedArticle};

/// Upper bound on the fetch step when the caller does not set one.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(45);

/// Stage of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Fetching,
    Classifying,
    Aggregating,
    Ready,
    Failed,
}

impl RunState {
    /// Terminal state reached by a finished run.
    #[must_use]
    pub fn of(result: &Result<RunOutcome, PipelineError>) -> Self {
        match result {
            Ok(_) => RunState::Ready,
            Err(_) => RunState::Failed,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Fetching => "fetching",
            RunState::Classifying => "classifying",
            RunState::Aggregating => "aggregating",
            RunState::Ready => "ready",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Successful end of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The provider returned articles and they were aggregated.
    Ready(AggregationResult),
    /// The provider returned zero articles; the caller should suggest a
    /// broader keyword.
    Empty,
}

impl RunOutcome {
    #[must_use]
    pub fn aggregation(&self) -> Option<&AggregationResult> {
        match self {
            RunOutcome::Ready(result) => Some(result),
            RunOutcome::Empty => None,
        }
    }
}

/// One-shot fetch → classify → aggregate pipeline over injected collaborators.
///
/// Holds only borrowed handles and a timeout, so separate runs never share
/// state.
pub struct Pipeline<'a, F: ?Sized, M> {
    fetcher: &'a F,
    classifier: &'a Classifier<M>,
    fetch_timeout: Duration,
}

impl<'a, F, M> Pipeline<'a, F, M>
where
    F: ArticleFetcher + ?Sized,
    M: PolarityModel,
{
    pub fn new(fetcher: &'a F, classifier: &'a Classifier<M>) -> Self {
        Self {
            fetcher,
            classifier,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Validate raw inputs and run the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Query`] before any network call when the
    /// inputs are invalid, otherwise the errors of [`Pipeline::run`].
    pub async fn run_query(
        &self,
        keyword: &str,
        limit: u32,
        sort_order: SortOrder,
    ) -> Result<RunOutcome, PipelineError> {
        let params = QueryParameters::new(keyword, limit, sort_order)?;
        self.run(&params).await
    }

    /// Run the full pipeline for one query.
    ///
    /// 1. Fetch articles, bounded by the fetch timeout. Never retried.
    /// 2. Classify each headline in fetch order, skipping articles that
    ///    cannot be classified.
    /// 3. Aggregate into counts, rows and a dominant label.
    ///
    /// Zero fetched articles yields [`RunOutcome::Empty`].
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Fetch`] if the fetcher fails or times out.
    /// No partial result is produced in that case.
    pub async fn run(&self, params: &QueryParameters) -> Result<RunOutcome, PipelineError> {
        let keyword = params.keyword();
        tracing::debug!(keyword, state = %RunState::Idle, "pipeline run starting");

        tracing::debug!(
            keyword,
            limit = params.limit(),
            sort = %params.sort_order(),
            state = %RunState::Fetching,
            "fetching articles"
        );
        let articles = match self.fetch(params).await {
            Ok(articles) => articles,
            Err(e) => {
                tracing::warn!(keyword, error = %e, state = %RunState::Failed, "article fetch failed");
                return Err(PipelineError::Fetch(e));
            }
        };

        if articles.is_empty() {
            tracing::info!(keyword, state = %RunState::Ready, "no articles returned for keyword");
            return Ok(RunOutcome::Empty);
        }

        tracing::debug!(
            keyword,
            count = articles.len(),
            state = %RunState::Classifying,
            "classifying headlines"
        );
        let fetched = articles.len();
        let (classified, skipped) = self.classify_all(&articles);

        if skipped > 0 {
            tracing::warn!(
                keyword,
                fetched,
                skipped,
                "some articles could not be classified and were skipped"
            );
        }

        tracing::debug!(keyword, state = %RunState::Aggregating, "aggregating results");
        let result = aggregate(classified).with_skipped(skipped);

        tracing::info!(
            keyword,
            total = result.total(),
            positive = result.counts().positive,
            neutral = result.counts().neutral,
            negative = result.counts().negative,
            dominant = ?result.dominant(),
            state = %RunState::Ready,
            "pipeline run complete"
        );
        Ok(RunOutcome::Ready(result))
    }

    /// Classify articles in order. Returns the classified rows and the
    /// number of articles that were skipped.
    pub fn classify_all(&self, articles: &[RawArticle]) -> (Vec<ClassifiedArticle>, usize) {
        let mut classified = Vec::with_capacity(articles.len());
        let mut skipped = 0usize;

        for (index, article) in articles.iter().enumerate() {
            match self.classifier.classify_article(article) {
                Ok(row) => classified.push(row),
                Err(e) => {
                    tracing::debug!(index, url = %article.url, error = %e, "skipping article");
                    skipped += 1;
                }
            }
        }

        (classified, skipped)
    }

    async fn fetch(&self, params: &QueryParameters) -> Result<Vec<RawArticle>, FetchError> {
        match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch_articles(params)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                after: self.fetch_timeout,
            }),
        }
    }
}
