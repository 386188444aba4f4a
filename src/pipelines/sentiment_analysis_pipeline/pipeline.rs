use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use uuid::Uuid;

use super::model::SentimentAnalysisModel;
use crate::core::{AnalysisError, Result, Sentiment, SentimentResult, SummaryConfig};
use crate::models::KeywordSentimentModel;

pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
    pub(crate) summary: SummaryConfig,
    pub(crate) rng: StdRng,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    /// Predict sentiment, confidence and summary for one comment.
    ///
    /// Blank comments are rejected with [`AnalysisError::EmptyInput`].
    pub fn predict(&mut self, text: &str) -> Result<SentimentResult> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(analyze(&self.model, &self.summary, text, &mut self.rng))
    }

    /// Predict every comment in order. One blank comment fails the whole batch.
    pub fn predict_batch<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<Vec<SentimentResult>> {
        if texts.iter().any(|t| t.as_ref().trim().is_empty()) {
            return Err(AnalysisError::EmptyInput);
        }
        let results: Vec<_> = texts
            .iter()
            .map(|t| analyze(&self.model, &self.summary, t.as_ref(), &mut self.rng))
            .collect();
        tracing::debug!(count = results.len(), "analyzed comment batch");
        Ok(results)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn summary_config(&self) -> &SummaryConfig {
        &self.summary
    }
}

/// Classify one comment with the default keyword model and summary settings.
///
/// `comment` must not be blank; callers reject empty input first.
pub fn classify<R: Rng>(comment: &str, rng: &mut R) -> SentimentResult {
    analyze(
        &KeywordSentimentModel::default(),
        &SummaryConfig::default(),
        comment,
        rng,
    )
}

fn analyze<M, R>(model: &M, summary: &SummaryConfig, text: &str, rng: &mut R) -> SentimentResult
where
    M: SentimentAnalysisModel,
    R: Rng,
{
    let prediction = model.predict(text, rng);
    SentimentResult {
        id: random_id(rng),
        comment: text.to_string(),
        sentiment: prediction.sentiment,
        confidence: prediction.confidence,
        summary: summarize(text, prediction.sentiment, summary),
    }
}

fn random_id<R: RngCore>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

/// Build the display summary for a classified comment.
///
/// Comments longer than `config.max_tokens` whitespace tokens keep their
/// first `config.truncated_tokens` tokens followed by an ellipsis. Shorter
/// comments are kept verbatim.
pub fn summarize(comment: &str, sentiment: Sentiment, config: &SummaryConfig) -> String {
    let tokens: Vec<&str> = comment.split_whitespace().collect();
    if tokens.len() > config.max_tokens {
        let kept: Vec<&str> = tokens.into_iter().take(config.truncated_tokens).collect();
        format!("{}... ({sentiment} sentiment detected)", kept.join(" "))
    } else {
        format!("{comment} ({sentiment} sentiment detected)")
    }
}

/// Fresh random generator, seeded from the OS when no seed is given.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random::<u64>))
}
