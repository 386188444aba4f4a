use serde::{Deserialize, Serialize};

use super::pipeline::WordFrequency;
use crate::core::FontScale;

/// A word positioned on the cloud's size scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub word: String,
    pub count: usize,
    pub font_size: f64,
}

/// Scale ranked words linearly between `scale.min` and `scale.max`, relative
/// to the most frequent word.
///
/// An empty ranking yields an empty cloud.
pub fn word_cloud(ranked: &[WordFrequency], scale: &FontScale) -> Vec<WordCloudEntry> {
    let Some(max_count) = ranked.iter().map(|w| w.count).max().filter(|&m| m > 0) else {
        return Vec::new();
    };
    ranked
        .iter()
        .map(|w| WordCloudEntry {
            word: w.word.clone(),
            count: w.count,
            font_size: scale.min + (w.count as f64 / max_count as f64) * (scale.max - scale.min),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(word: &str, count: usize) -> WordFrequency {
        WordFrequency {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_top_word_gets_max_size() {
        let cloud = word_cloud(&[freq("policy", 4), freq("draft", 2)], &FontScale::default());
        assert_eq!(cloud[0].font_size, 48.0);
        assert_eq!(cloud[1].font_size, 30.0);
    }

    #[test]
    fn test_empty_ranking_is_empty_cloud() {
        assert!(word_cloud(&[], &FontScale::default()).is_empty());
    }
}
