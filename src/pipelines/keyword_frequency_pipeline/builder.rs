use std::collections::HashSet;

use super::pipeline::KeywordFrequencyPipeline;
use crate::core::KeywordConfig;

pub struct KeywordFrequencyPipelineBuilder {
    config: KeywordConfig,
}

impl Default for KeywordFrequencyPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordFrequencyPipelineBuilder {
    pub fn new() -> Self {
        Self::from_config(KeywordConfig::default())
    }

    pub fn from_config(config: KeywordConfig) -> Self {
        Self { config }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn min_word_length(mut self, len: usize) -> Self {
        self.config.min_word_length = len;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    /// Replace the stop word list. Words are matched in lowercase.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> KeywordFrequencyPipeline {
        let stop_words: HashSet<String> = self
            .config
            .stop_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        tracing::debug!(
            limit = self.config.limit,
            stop_words = stop_words.len(),
            "building keyword frequency pipeline"
        );
        KeywordFrequencyPipeline {
            limit: self.config.limit,
            min_word_length: self.config.min_word_length,
            top_n: self.config.top_n,
            stop_words,
        }
    }
}
