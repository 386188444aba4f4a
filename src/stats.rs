//! Aggregate figures for a dashboard over a set of analyzed comments.

use serde::{Deserialize, Serialize};

use crate::core::{Sentiment, SentimentResult};

/// Per-label counts for a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean confidence over all results, `0.0` for an empty set.
    pub average_confidence: f64,
}

impl SentimentBreakdown {
    pub fn from_results(results: &[SentimentResult]) -> Self {
        let mut breakdown = Self::default();
        for result in results {
            match result.sentiment {
                Sentiment::Positive => breakdown.positive += 1,
                Sentiment::Negative => breakdown.negative += 1,
                Sentiment::Neutral => breakdown.neutral += 1,
            }
        }
        if !results.is_empty() {
            let total: f64 = results.iter().map(|r| r.confidence).sum();
            breakdown.average_confidence = total / results.len() as f64;
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Share of `sentiment` in whole percent, rounded. Zero for an empty set.
    pub fn percentage(&self, sentiment: Sentiment) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(sentiment) as f64 / total as f64 * 100.0).round() as u32
    }

    /// The headline label for the whole set.
    ///
    /// Positive wins only if it beats both other labels, negative likewise;
    /// every other case, ties included, reads as neutral.
    pub fn overall(&self) -> Sentiment {
        if self.positive > self.negative {
            if self.positive > self.neutral {
                Sentiment::Positive
            } else {
                Sentiment::Neutral
            }
        } else if self.negative > self.neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}
