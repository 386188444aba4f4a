use rand::Rng;

use crate::core::{Result, Sentiment};

/// Raw output of a sentiment model, before the pipeline attaches an id and
/// a summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

pub trait SentimentAnalysisModel {
    /// Check the model's settings before a pipeline is built around it.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Classify one comment.
    ///
    /// Any randomness must come from `rng` so seeded pipelines stay
    /// reproducible.
    fn predict<R: Rng>(&self, text: &str, rng: &mut R) -> Prediction;
}
