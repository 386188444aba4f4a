use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, Result};
use crate::models::Lexicon;

/// Default stop words removed from keyword rankings.
pub const DEFAULT_STOP_WORDS: [&str; 17] = [
    "this", "that", "with", "have", "will", "from", "they", "been", "said", "each", "which",
    "their", "time", "would", "there", "could", "other",
];

/// Scoring constants for the keyword sentiment model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence of a single-hit positive or negative prediction, minus one step.
    pub base_confidence: f64,
    /// Confidence added per keyword hit.
    pub confidence_step: f64,
    /// Upper bound for positive and negative confidence.
    pub max_confidence: f64,
    /// Neutral confidence is drawn uniformly from `neutral_min..neutral_max`.
    pub neutral_min: f64,
    pub neutral_max: f64,
}

impl ScoringConfig {
    /// Reject bounds outside `[0, 1]` (NaN and infinities included) and an
    /// empty neutral range.
    pub fn validate(&self) -> Result<()> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);

        if !in_unit(self.base_confidence) || !in_unit(self.max_confidence) {
            return Err(invalid("confidence bounds must lie within [0, 1]"));
        }
        if !in_unit(self.neutral_min) || !in_unit(self.neutral_max) {
            return Err(invalid("neutral confidence range must lie within [0, 1]"));
        }
        if self.neutral_min >= self.neutral_max {
            return Err(invalid("neutral_min must be below neutral_max"));
        }
        if !self.confidence_step.is_finite() || self.confidence_step < 0.0 {
            return Err(invalid("confidence_step must be finite and not negative"));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_confidence: 0.7,
            confidence_step: 0.1,
            max_confidence: 0.95,
            neutral_min: 0.6,
            neutral_max: 0.8,
        }
    }
}

/// Controls how long comments are shortened in summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Comments with more whitespace tokens than this are truncated.
    pub max_tokens: usize,
    /// Number of leading tokens kept when truncating.
    pub truncated_tokens: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_tokens: 20,
            truncated_tokens: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Maximum number of ranked words returned.
    pub limit: usize,
    /// Tokens shorter than this many characters are ignored.
    pub min_word_length: usize,
    /// Size of the short "top keywords" list.
    pub top_n: usize,
    pub stop_words: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            limit: 50,
            min_word_length: 4,
            top_n: 10,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// Font size range used when scaling a word cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontScale {
    pub min: f64,
    pub max: f64,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            min: 12.0,
            max: 48.0,
        }
    }
}

/// Full analyzer configuration.
///
/// Every section falls back to its defaults, so a partial JSON document like
/// `{"keywords": {"limit": 20}}` is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub lexicon: Lexicon,
    pub scoring: ScoringConfig,
    pub summary: SummaryConfig,
    pub keywords: KeywordConfig,
    pub font_scale: FontScale,
}

impl AnalyzerConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        if self.summary.truncated_tokens > self.summary.max_tokens {
            return Err(invalid("summary.truncated_tokens exceeds summary.max_tokens"));
        }
        if self.font_scale.min > self.font_scale.max {
            return Err(invalid("font_scale.min exceeds font_scale.max"));
        }
        if self.lexicon.is_empty() {
            return Err(invalid("lexicon has no positive or negative keywords"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> AnalysisError {
    AnalysisError::InvalidConfig(msg.to_string())
}
