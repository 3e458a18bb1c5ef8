//! `newsmood analyze` command handler.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use newsmood_core::{AppConfig, SortOrder};
use newsmood_newsapi::NewsApiClient;
use newsmood_sentiment::{Classifier, LexiconModel, Pipeline, PipelineError, RunOutcome};

use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnalyzeOptions {
    pub keyword: String,
    pub limit: u32,
    pub sort: SortOrder,
    /// `Some` when a CSV report should be written into this directory.
    pub export_dir: Option<PathBuf>,
    pub show_links: bool,
}

/// Run one analysis against NewsAPI and print the report to stdout.
///
/// An empty provider response prints a hint and succeeds.
///
/// # Errors
///
/// Returns an error if the query is invalid, the client cannot be built, the
/// fetch fails or times out, or the CSV export cannot be written. Fetch
/// failures print a quota hint to stderr first.
pub(crate) async fn run_analyze(config: &AppConfig, options: &AnalyzeOptions) -> anyhow::Result<()> {
    let client = NewsApiClient::with_base_url(
        &config.newsapi_key,
        config.request_timeout_secs,
        &config.newsapi_base_url,
        &config.user_agent,
    )?;
    let classifier = Classifier::new(LexiconModel);
    let pipeline = Pipeline::new(&client, &classifier)
        .with_fetch_timeout(Duration::from_secs(config.fetch_timeout_secs));

    tracing::info!(
        keyword = %options.keyword,
        limit = options.limit,
        sort = %options.sort,
        export = options.export_dir.is_some(),
        "starting analysis"
    );
    let outcome = match pipeline
        .run_query(&options.keyword, options.limit, options.sort)
        .await
    {
        Ok(outcome) => outcome,
        Err(PipelineError::Fetch(e)) => {
            tracing::error!(keyword = %options.keyword, error = %e, "analysis failed");
            eprintln!("Error fetching data: {e}");
            eprintln!("{}", render::FETCH_FAILURE_HINT);
            anyhow::bail!("analysis for '{}' failed", options.keyword.trim());
        }
        Err(e) => return Err(e.into()),
    };

    let result = match outcome {
        RunOutcome::Ready(result) => result,
        RunOutcome::Empty => {
            println!("{}", render::EMPTY_RESULT_HINT);
            return Ok(());
        }
    };

    let keyword = options.keyword.trim();
    print!(
        "{}",
        render::render_report(keyword, &result, Utc::now(), options.show_links)
    );

    if let Some(dir) = &options.export_dir {
        let path = newsmood_sentiment::export_report(dir, keyword, &result)?;
        println!();
        println!("CSV report written to {}", path.display());
    }

    Ok(())
}
