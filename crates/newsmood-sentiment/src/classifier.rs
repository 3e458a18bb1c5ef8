//! Headline classification: polarity model score plus fixed thresholds.

use newsmood_core::RawArticle;

use crate::error::ClassificationError;
use crate::scorer::{LexiconModel, PolarityModel};
use crate::types::{ClassifiedArticle, SentimentLabel};

/// Turns headlines into `(score, label)` pairs using a [`PolarityModel`].
#[derive(Debug, Clone, Default)]
pub struct Classifier<M = LexiconModel> {
    model: M,
}

impl<M: PolarityModel> Classifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Score and label a single headline.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::NonFiniteScore`] if the model yields
    /// NaN or infinity, or whatever error the model itself reports.
    pub fn classify(&self, headline: &str) -> Result<(f64, SentimentLabel), ClassificationError> {
        let scores = self.model.polarity_scores(headline)?;
        let score = scores.compound;
        if !score.is_finite() {
            return Err(ClassificationError::NonFiniteScore(score));
        }
        let score = score.clamp(-1.0, 1.0);
        Ok((score, SentimentLabel::from_score(score)))
    }

    /// Classify a fetched article by its headline.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::MissingTitle`] when the article has no
    /// usable headline, otherwise the errors of [`Classifier::classify`].
    pub fn classify_article(
        &self,
        article: &RawArticle,
    ) -> Result<ClassifiedArticle, ClassificationError> {
        let headline = article
            .headline()
            .ok_or(ClassificationError::MissingTitle)?;
        let (score, _) = self.classify(headline)?;
        Ok(ClassifiedArticle::new(
            article.source_name.clone(),
            headline,
            article.url.clone(),
            score,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::PolarityScores;

    /// Returns the same compound for every input.
    struct FixedModel(f64);

    impl PolarityModel for FixedModel {
        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, ClassificationError> {
            Ok(PolarityScores {
                compound: self.0,
                ..PolarityScores::default()
            })
        }
    }

    struct FailingModel;

    impl PolarityModel for FailingModel {
        fn polarity_scores(&self, _text: &str) -> Result<PolarityScores, ClassificationError> {
            Err(ClassificationError::Model("model offline".to_string()))
        }
    }

    #[test]
    fn exact_positive_threshold_is_positive() {
        let classifier = Classifier::new(FixedModel(0.05));
        assert_eq!(
            classifier.classify("anything").unwrap(),
            (0.05, SentimentLabel::Positive)
        );
    }

    #[test]
    fn exact_negative_threshold_is_negative() {
        let classifier = Classifier::new(FixedModel(-0.05));
        assert_eq!(
            classifier.classify("anything").unwrap(),
            (-0.05, SentimentLabel::Negative)
        );
    }

    #[test]
    fn near_threshold_scores_are_neutral() {
        for score in [0.049, -0.049, 0.0] {
            let classifier = Classifier::new(FixedModel(score));
            assert_eq!(classifier.classify("x").unwrap().1, SentimentLabel::Neutral);
        }
    }

    #[test]
    fn non_finite_score_is_an_error() {
        let classifier = Classifier::new(FixedModel(f64::NAN));
        assert!(matches!(
            classifier.classify("x"),
            Err(ClassificationError::NonFiniteScore(_))
        ));
    }

    #[test]
    fn out_of_range_score_is_clamped() {
        let classifier = Classifier::new(FixedModel(1.7));
        assert_eq!(
            classifier.classify("x").unwrap(),
            (1.0, SentimentLabel::Positive)
        );
    }

    #[test]
    fn model_error_is_propagated() {
        let classifier = Classifier::new(FailingModel);
        assert_eq!(
            classifier.classify("x"),
            Err(ClassificationError::Model("model offline".to_string()))
        );
    }

    #[test]
    fn classify_article_uses_trimmed_headline() {
        let classifier = Classifier::new(FixedModel(0.6));
        let raw = RawArticle::new("  Markets rally  ", "Reuters", "https://example.com/1");
        let article = classifier.classify_article(&raw).unwrap();
        assert_eq!(article.title(), "Markets rally");
        assert_eq!(article.source_name(), "Reuters");
        assert_eq!(article.url(), "https://example.com/1");
        assert_eq!(article.label(), SentimentLabel::Positive);
    }

    #[test]
    fn classify_article_rejects_missing_title() {
        let classifier = Classifier::new(FixedModel(0.6));
        let raw = RawArticle {
            title: None,
            source_name: "Reuters".to_string(),
            url: "https://example.com/1".to_string(),
        };
        assert_eq!(
            classifier.classify_article(&raw),
            Err(ClassificationError::MissingTitle)
        );
    }

    #[test]
    fn default_classifier_uses_lexicon_model() {
        let classifier = Classifier::<LexiconModel>::default();
        let (score, label) = classifier.classify("Markets rally on strong earnings").unwrap();
        assert!(score > 0.05);
        assert_eq!(label, SentimentLabel::Positive);
    }
}
