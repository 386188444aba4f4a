use super::model::SentimentAnalysisModel;
use super::pipeline::{seeded_rng, SentimentAnalysisPipeline};
use crate::core::{AnalysisError, AnalyzerConfig, Result, SummaryConfig};
use crate::models::KeywordSentimentModel;

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    model: M,
    summary: SummaryConfig,
    seed: Option<u64>,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            summary: SummaryConfig::default(),
            seed: None,
        }
    }

    /// Seed the random source used for neutral confidence and result ids.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn summary(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    pub fn build(self) -> Result<SentimentAnalysisPipeline<M>> {
        if self.summary.truncated_tokens > self.summary.max_tokens {
            return Err(AnalysisError::InvalidConfig(
                "summary.truncated_tokens exceeds summary.max_tokens".to_string(),
            ));
        }
        self.model.validate()?;
        tracing::debug!(seeded = self.seed.is_some(), "building sentiment analysis pipeline");
        Ok(SentimentAnalysisPipeline {
            model: self.model,
            summary: self.summary,
            rng: seeded_rng(self.seed),
        })
    }
}

impl SentimentAnalysisPipelineBuilder<KeywordSentimentModel> {
    /// Builder for the default keyword model.
    pub fn keyword() -> Self {
        Self::new(KeywordSentimentModel::default())
    }

    /// Builder for a keyword model configured from `config`.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        let model = KeywordSentimentModel::new(config.lexicon.clone(), config.scoring.clone());
        Ok(Self::new(model).summary(config.summary.clone()))
    }
}
