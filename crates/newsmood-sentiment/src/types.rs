use std::fmt;
use std::ops::Index;


/// Scores at or above this value are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores at or below this value are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Discrete sentiment bucket for a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels in tie-break priority order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Map a compound score to its bucket.
    ///
    /// Boundaries are inclusive: exactly `0.05` is positive and exactly
    /// `-0.05` is negative.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A headline with its polarity score and bucket.
///
/// The label is always derived from the score, so the two never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedArticle {
    source_name: String,
    title: String,
    url: String,
    score: f64,
    label: SentimentLabel,
}

impl ClassifiedArticle {
    #[must_use]
    pub fn new(
        source_name: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            title: title.into(),
            url: url.into(),
            score,
            label: SentimentLabel::from_score(score),
        }
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

/// Article count per label. All three counters always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub(crate) fn increment(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// `(label, count)` pairs in [`SentimentLabel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, usize)> + '_ {
        SentimentLabel::ALL.into_iter().map(|l| (l, self.get(l)))
    }
}

impl Index<SentimentLabel> for SentimentCounts {
    type Output = usize;

    fn index(&self, label: SentimentLabel) -> &usize {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Neutral => &self.neutral,
            SentimentLabel::Negative => &self.negative,
        }
    }
}

/// Output of one aggregation: counts, ordered rows, and the dominant label.
///
/// `counts.total() == rows.len()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub(crate) counts: SentimentCounts,
    pub(crate) rows: Vec<ClassifiedArticle>,
    pub(crate) dominant: Option<SentimentLabel>,
    pub(crate) skipped: usize,
}

impl AggregationResult {
    #[must_use]
    pub fn counts(&self) -> SentimentCounts {
        self.counts
    }

    /// Classified articles in fetch order.
    #[must_use]
    pub fn rows(&self) -> &[ClassifiedArticle] {
        &self.rows
    }

    /// Label with the most articles; `None` when there are no rows.
    #[must_use]
    pub fn dominant(&self) -> Option<SentimentLabel> {
        self.dominant
    }

    /// Articles fetched but not classified (no headline, or model failure).
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Percentage of rows carrying `label`, in `[0.0, 100.0]`.
    #[must_use]
    pub fn share(&self, label: SentimentLabel) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = self.counts.get(label) as f64 * 100.0 / self.rows.len() as f64;
        share
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<ClassifiedArticle> {
        self.rows
    }

    pub(crate) fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }
}
