//! Folding classified headlines into counts and a dominant label.

use crate::types::{AggregationResult, ClassifiedArticle, SentimentCounts, SentimentLabel};

/// Aggregate classified articles into per-label counts and ordered rows.
///
/// Every label is reported even when no article carries it. Rows keep the
/// input order. See [`dominant_label`] for the tie-break rule.
#[must_use]
pub fn aggregate(classified: Vec<ClassifiedArticle>) -> AggregationResult {
    let mut counts = SentimentCounts::default();
    for article in &classified {
        counts.increment(article.label());
    }

    AggregationResult {
        counts,
        dominant: dominant_label(&counts),
        rows: classified,
        skipped: 0,
    }
}

/// The label with the highest count.
///
/// Ties resolve by the fixed priority Positive > Neutral > Negative, i.e.
/// the first maximum in [`SentimentLabel::ALL`] order wins. Returns `None`
/// when every count is zero.
#[must_use]
pub fn dominant_label(counts: &SentimentCounts) -> Option<SentimentLabel> {
    if counts.total() == 0 {
        return None;
    }
    let mut best: Option<(SentimentLabel, usize)> = None;
    for (label, count) in counts.iter() {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}
