//! Keyword lists used by the keyword sentiment model.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 10] = [
    "good", "excellent", "great", "positive", "beneficial", "approve", "support", "agree",
    "helpful", "effective",
];

const NEGATIVE_WORDS: [&str; 10] = [
    "bad", "terrible", "poor", "negative", "harmful", "oppose", "disagree", "reject",
    "ineffective", "problematic",
];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
    negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
});

/// Positive and negative keyword lists.
///
/// Matching is a substring test on lowercased text, so `"agree"` also hits
/// inside `"disagree"` and `"effective"` inside `"ineffective"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

impl Lexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy with every keyword lowercased.
    pub fn lowercased(&self) -> Self {
        Self::new(
            self.positive.iter().map(|w| w.to_lowercase()),
            self.negative.iter().map(|w| w.to_lowercase()),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Number of distinct positive and negative keywords contained in `text`.
    ///
    /// `text` is expected to be lowercase already. A keyword counts once no
    /// matter how often it appears.
    pub fn hits(&self, text: &str) -> (usize, usize) {
        let count = |words: &[String]| {
            words
                .iter()
                .filter(|w| !w.is_empty() && text.contains(w.as_str()))
                .count()
        };
        (count(self.positive.as_slice()), count(self.negative.as_slice()))
    }
}
