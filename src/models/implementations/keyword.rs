//! # Keyword Sentiment Model
//!
//! Classifies a comment by counting which positive and negative keywords
//! it contains. There are no weights to load, so the model is cheap to
//! clone and builds instantly.
//!
//! ## Scoring
//!
//! With `p` positive hits and `n` negative hits:
//!
//! - `p > n`: positive, confidence `min(base + step * p, max)`
//! - `n > p`: negative, confidence `min(base + step * n, max)`
//! - otherwise: neutral, confidence drawn uniformly from `neutral_min..neutral_max`
//!
//! ## Example
//!
//! ```rust
//! use comment_analysis::models::KeywordSentimentModel;
//! use comment_analysis::pipelines::sentiment_analysis_pipeline::SentimentAnalysisModel;
//! use comment_analysis::Sentiment;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let model = KeywordSentimentModel::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let prediction = model.predict("A great and helpful change", &mut rng);
//! assert_eq!(prediction.sentiment, Sentiment::Positive);
//! ```

use rand::Rng;

use crate::core::{Result, ScoringConfig, Sentiment};
use crate::models::Lexicon;
use crate::pipelines::sentiment_analysis_pipeline::{Prediction, SentimentAnalysisModel};

/// Keyword-matching sentiment model.
#[derive(Debug, Clone)]
pub struct KeywordSentimentModel {
    lexicon: Lexicon,
    scoring: ScoringConfig,
}

impl Default for KeywordSentimentModel {
    fn default() -> Self {
        Self::new(Lexicon::default(), ScoringConfig::default())
    }
}

impl KeywordSentimentModel {
    pub fn new(lexicon: Lexicon, scoring: ScoringConfig) -> Self {
        Self {
            lexicon: lexicon.lowercased(),
            scoring,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    fn keyword_confidence(&self, hits: usize) -> f64 {
        let s = &self.scoring;
        (s.base_confidence + s.confidence_step * hits as f64).min(s.max_confidence)
    }
}

impl SentimentAnalysisModel for KeywordSentimentModel {
    fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }

    fn predict<R: Rng>(&self, text: &str, rng: &mut R) -> Prediction {
        let lowered = text.to_lowercase();
        let (positive_hits, negative_hits) = self.lexicon.hits(&lowered);

        let (sentiment, confidence) = if positive_hits > negative_hits {
            (Sentiment::Positive, self.keyword_confidence(positive_hits))
        } else if negative_hits > positive_hits {
            (Sentiment::Negative, self.keyword_confidence(negative_hits))
        } else {
            let s = &self.scoring;
            let spread = s.neutral_max - s.neutral_min;
            let confidence = if spread.is_finite() && spread > 0.0 {
                rng.random_range(s.neutral_min..s.neutral_max)
            } else {
                s.neutral_min
            };
            (Sentiment::Neutral, confidence)
        };

        tracing::trace!(positive_hits, negative_hits, %sentiment, confidence, "keyword prediction");

        Prediction {
            sentiment,
            confidence,
            positive_hits,
            negative_hits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn predict(text: &str) -> Prediction {
        let mut rng = StdRng::seed_from_u64(42);
        KeywordSentimentModel::default().predict(text, &mut rng)
    }

    #[test]
    fn test_two_positive_hits() {
        let p = predict("This is an excellent and beneficial proposal");
        assert_eq!(p.sentiment, Sentiment::Positive);
        assert_eq!((p.positive_hits, p.negative_hits), (2, 0));
        assert!((p.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_two_negative_hits() {
        let p = predict("This is a terrible and problematic idea");
        assert_eq!(p.sentiment, Sentiment::Negative);
        assert!((p.confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped() {
        let p = predict("good excellent great positive beneficial approve");
        assert_eq!(p.positive_hits, 6);
        assert!((p.confidence - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_matching_ignores_case() {
        let p = predict("EXCELLENT Work");
        assert_eq!(p.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_no_hits_is_neutral_within_range() {
        let p = predict("The weather today is mild");
        assert_eq!(p.sentiment, Sentiment::Neutral);
        assert!((0.6..0.8).contains(&p.confidence));
    }

    #[test]
    fn test_tied_hits_are_neutral() {
        // "disagree" hits both "agree" and "disagree".
        let p = predict("I disagree");
        assert_eq!((p.positive_hits, p.negative_hits), (1, 1));
        assert_eq!(p.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_unbounded_neutral_range_does_not_panic() {
        let model = KeywordSentimentModel::new(
            Lexicon::default(),
            ScoringConfig {
                neutral_min: f64::NEG_INFINITY,
                ..ScoringConfig::default()
            },
        );
        assert!(model.validate().is_err());

        let mut rng = StdRng::seed_from_u64(1);
        let p = model.predict("mild weather", &mut rng);
        assert_eq!(p.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_custom_lexicon_is_lowercased() {
        let model = KeywordSentimentModel::new(
            Lexicon::new(["Splendid"], ["Dreadful"]),
            ScoringConfig::default(),
        );
        let mut rng = StdRng::seed_from_u64(1);
        let p = model.predict("a splendid plan", &mut rng);
        assert_eq!(p.sentiment, Sentiment::Positive);
        assert!((p.confidence - 0.8).abs() < 1e-9);
    }
}
