//! CSV export of aggregated rows.
//!
//! Columns are fixed: `Source,Sentiment,Score,Title,URL`, UTF-8, one row per
//! classified article in fetch order.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::types::{AggregationResult, ClassifiedArticle};

/// Appended to the keyword to form the report file name.
pub const REPORT_SUFFIX: &str = "_sentiment_report.csv";

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Source")]
    source: &'a str,
    #[serde(rename = "Sentiment")]
    sentiment: &'a str,
    #[serde(rename = "Score")]
    score: String,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "URL")]
    url: &'a str,
}

impl<'a> From<&'a ClassifiedArticle> for CsvRow<'a> {
    fn from(article: &'a ClassifiedArticle) -> Self {
        Self {
            source: article.source_name(),
            sentiment: article.label().as_str(),
            score: format!("{:.4}", article.score()),
            title: article.title(),
            url: article.url(),
        }
    }
}

/// File name for a keyword's report.
///
/// Path separators and control characters become `_` so the keyword cannot
/// escape the export directory.
#[must_use]
pub fn report_file_name(keyword: &str) -> String {
    let stem: String = keyword
        .trim()
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let stem = match stem.as_str() {
        "" | "." | ".." => "report".to_string(),
        _ => stem,
    };
    format!("{stem}{REPORT_SUFFIX}")
}

/// Write `rows` as CSV to `writer`. The header is always written.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if serialization or the underlying write fails.
pub fn write_csv<W: Write>(rows: &[ClassifiedArticle], writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["Source", "Sentiment", "Score", "Title", "URL"])?;
    for row in rows {
        wtr.serialize(CsvRow::from(row))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render `rows` to an in-memory UTF-8 CSV buffer.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if serialization fails.
pub fn to_csv_bytes(rows: &[ClassifiedArticle]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(buf)
}

/// Write the report for `keyword` into `dir` and return the file path.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created and
/// [`ExportError::Csv`] if writing fails.
pub fn export_report(
    dir: &Path,
    keyword: &str,
    result: &AggregationResult,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(report_file_name(keyword));
    let file = File::create(&path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    write_csv(result.rows(), file)?;
    tracing::info!(path = %path.display(), rows = result.total(), "sentiment report exported");
    Ok(path)
}
