//! Explicit analysis state for a calling layer.
//!
//! A session holds the results of the latest submission and whether they
//! are on display. Transitions return a new session instead of mutating
//! shared fields, so the analyzers stay free of UI state.

use crate::core::{AnalysisError, Result, SentimentResult};
use crate::pipelines::keyword_frequency_pipeline::{KeywordFrequencyPipeline, WordFrequency};
use crate::pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysisModel, SentimentAnalysisPipeline,
};
use crate::stats::SentimentBreakdown;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    results: Vec<SentimentResult>,
    showing_results: bool,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `comments` and return a session showing the fresh results.
    ///
    /// Previous results are replaced, not merged. On error `self` is left
    /// untouched and still usable.
    pub fn submit<M, S>(
        &self,
        pipeline: &mut SentimentAnalysisPipeline<M>,
        comments: &[S],
    ) -> Result<Self>
    where
        M: SentimentAnalysisModel,
        S: AsRef<str>,
    {
        if comments.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let results = pipeline.predict_batch(comments)?;
        tracing::info!(comments = results.len(), "comments analyzed");
        Ok(Self {
            results,
            showing_results: true,
        })
    }

    /// Drop all results and go back to the input view.
    pub fn reset(&self) -> Self {
        tracing::info!("analysis cleared");
        Self::default()
    }

    pub fn results(&self) -> &[SentimentResult] {
        &self.results
    }

    pub fn is_showing_results(&self) -> bool {
        self.showing_results
    }

    /// The analyzed comments, in submission order.
    pub fn comments(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.comment.as_str()).collect()
    }

    pub fn breakdown(&self) -> SentimentBreakdown {
        SentimentBreakdown::from_results(&self.results)
    }

    pub fn keywords(&self, pipeline: &KeywordFrequencyPipeline) -> Vec<WordFrequency> {
        pipeline.word_frequencies(&self.comments())
    }
}
