//! Markdown rendering of analysis results for the terminal.
//!
//! Everything here is pure string building so output can be asserted in
//! tests without capturing stdout.

use chrono::{DateTime, Utc};
use newsmood_core::AppConfig;
use newsmood_sentiment::{AggregationResult, ClassifiedArticle, SentimentLabel};

pub(crate) const EMPTY_RESULT_HINT: &str = "No news found for that topic. Try a broader keyword.";

pub(crate) const FETCH_FAILURE_HINT: &str =
    "Note: Free API keys sometimes have limits. Check your NewsAPI.org dashboard if this persists.";

/// Full report: summary, breakdown table and (optionally) article links.
pub(crate) fn render_report(
    keyword: &str,
    result: &AggregationResult,
    generated_at: DateTime<Utc>,
    show_links: bool,
) -> String {
    let mut sections = vec![render_summary(keyword, result, generated_at)];

    if result.is_empty() {
        sections.push("No headlines could be classified.\n".to_string());
        return sections.join("\n");
    }

    sections.push(render_table(result.rows()));
    if show_links {
        sections.push(render_links(result.rows()));
    }
    sections.join("\n")
}

pub(crate) fn render_summary(
    keyword: &str,
    result: &AggregationResult,
    generated_at: DateTime<Utc>,
) -> String {
    let dominant = result
        .dominant()
        .map_or("n/a", SentimentLabel::as_str);

    let mut lines = vec![
        format!("# Sentiment Analysis for '{keyword}'"),
        String::new(),
        format!("**Generated**: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        format!("**Total Articles**: {}", result.total()),
        format!("**Dominant Sentiment**: {dominant}"),
    ];
    if result.skipped() > 0 {
        lines.push(format!("**Skipped**: {}", result.skipped()));
    }
    lines.push(String::new());
    lines.push("| Sentiment | Count | Share |".to_string());
    lines.push("|-----------|-------|-------|".to_string());
    for (label, count) in result.counts().iter() {
        lines.push(format!(
            "| {label} | {count} | {:.1}% |",
            result.share(label)
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Breakdown table in fetch order.
pub(crate) fn render_table(rows: &[ClassifiedArticle]) -> String {
    let mut lines = vec![
        "## Detailed Sentiment Breakdown".to_string(),
        String::new(),
        "| Source | Sentiment | Score | Title |".to_string(),
        "|--------|-----------|-------|-------|".to_string(),
    ];
    for row in rows {
        lines.push(format!(
            "| {} | {} | {:.4} | {} |",
            escape_cell(row.source_name()),
            row.label(),
            row.score(),
            escape_cell(row.title()),
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn render_links(rows: &[ClassifiedArticle]) -> String {
    let mut lines = vec!["## Article Links".to_string(), String::new()];
    for row in rows {
        lines.push(format!(
            "- **[{}]({})** ({})",
            escape_link_text(row.title()),
            row.url(),
            row.source_name()
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn render_config(config: &AppConfig) -> String {
    let lines = [
        format!("env: {}", config.env),
        format!("log_level: {}", config.log_level),
        "newsapi_key: [redacted]".to_string(),
        format!("newsapi_base_url: {}", config.newsapi_base_url),
        format!("request_timeout_secs: {}", config.request_timeout_secs),
        format!("fetch_timeout_secs: {}", config.fetch_timeout_secs),
        format!("user_agent: {}", config.user_agent),
        format!("default_limit: {}", config.default_limit),
        format!("export_dir: {}", config.export_dir.display()),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::TimeZone;
    use newsmood_core::Environment;
    use newsmood_sentiment::aggregate;

    use super::*;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn sample() -> AggregationResult {
        aggregate(vec![
            ClassifiedArticle::new("Reuters", "Markets rally on strong earnings", "https://example.com/1", 0.6),
            ClassifiedArticle::new("AP", "Factory shuts down amid layoffs", "https://example.com/2", -0.7),
            ClassifiedArticle::new("BBC", "Central bank holds rates steady", "https://example.com/3", 0.0),
            ClassifiedArticle::new("FT", "Stocks climb", "https://example.com/4", 0.4),
        ])
    }

    #[test]
    fn summary_lists_metrics_and_shares() {
        let text = render_summary("Global Economy", &sample(), generated_at());
        assert!(text.starts_with("# Sentiment Analysis for 'Global Economy'\n"));
        assert!(text.contains("**Generated**: 2026-03-14 09:30 UTC"));
        assert!(text.contains("**Total Articles**: 4"));
        assert!(text.contains("**Dominant Sentiment**: Positive"));
        assert!(text.contains("| Positive | 2 | 50.0% |"));
        assert!(text.contains("| Neutral | 1 | 25.0% |"));
        assert!(text.contains("| Negative | 1 | 25.0% |"));
        assert!(!text.contains("**Skipped**"));
    }

    #[test]
    fn summary_shows_na_when_nothing_classified() {
        let text = render_summary("x", &aggregate(Vec::new()), generated_at());
        assert!(text.contains("**Dominant Sentiment**: n/a"));
        assert!(text.contains("| Positive | 0 | 0.0% |"));
    }

    #[test]
    fn table_keeps_fetch_order_and_four_decimals() {
        let result = sample();
        let text = render_table(result.rows());
        let body: Vec<_> = text.lines().skip(4).filter(|l| !l.is_empty()).collect();
        assert_eq!(
            body,
            [
                "| Reuters | Positive | 0.6000 | Markets rally on strong earnings |",
                "| AP | Negative | -0.7000 | Factory shuts down amid layoffs |",
                "| BBC | Neutral | 0.0000 | Central bank holds rates steady |",
                "| FT | Positive | 0.4000 | Stocks climb |",
            ]
        );
    }

    #[test]
    fn table_escapes_pipes_in_titles() {
        let rows = [ClassifiedArticle::new("Wire", "Up | Down", "https://x", 0.0)];
        assert!(render_table(&rows).contains("| Up \\| Down |"));
    }

    #[test]
    fn links_render_as_markdown_list() {
        let result = sample();
        let text = render_links(result.rows());
        assert!(text.contains(
            "- **[Markets rally on strong earnings](https://example.com/1)** (Reuters)"
        ));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 4);
    }

    #[test]
    fn report_can_omit_links() {
        let with_links = render_report("economy", &sample(), generated_at(), true);
        let without_links = render_report("economy", &sample(), generated_at(), false);
        assert!(with_links.contains("## Article Links"));
        assert!(!without_links.contains("## Article Links"));
        assert!(without_links.contains("## Detailed Sentiment Breakdown"));
    }

    #[test]
    fn report_for_fully_skipped_run_has_no_table() {
        let text = render_report("economy", &aggregate(Vec::new()), generated_at(), true);
        assert!(text.contains("No headlines could be classified."));
        assert!(!text.contains("## Detailed Sentiment Breakdown"));
    }

    #[test]
    fn config_output_redacts_api_key() {
        let config = AppConfig {
            env: Environment::Development,
            log_level: "warn".to_string(),
            newsapi_key: "super-secret-key".to_string(),
            newsapi_base_url: "https://newsapi.org/".to_string(),
            request_timeout_secs: 30,
            fetch_timeout_secs: 45,
            user_agent: "newsmood/0.1".to_string(),
            default_limit: 15,
            export_dir: PathBuf::from("reports"),
        };
        let text = render_config(&config);
        assert!(!text.contains("super-secret-key"));
        assert!(text.contains("newsapi_key: [redacted]"));
        assert!(text.contains("default_limit: 15"));
        assert!(text.contains("export_dir: reports"));
    }
}
