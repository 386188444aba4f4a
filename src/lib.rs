//! Sentiment and keyword analysis for stakeholder comments on draft
//! legislation.
//!
//! The [`pipelines`] module holds the two analyzers. [`ingest`],
//! [`session`], [`stats`] and [`export`] cover what a front end needs
//! around them: collecting comments, holding the latest results,
//! dashboard figures and CSV download.

pub mod core;
pub mod export;
pub mod ingest;
pub mod models;
pub mod pipelines;
pub mod session;
pub mod stats;

// Re-export core types
pub use self::core::{AnalysisError, AnalyzerConfig, Result, Sentiment, SentimentResult};

pub use models::{KeywordSentimentModel, Lexicon};
pub use pipelines::{
    KeywordFrequencyPipeline, KeywordFrequencyPipelineBuilder, SentimentAnalysisPipeline,
    SentimentAnalysisPipelineBuilder, WordFrequency,
};
pub use session::AnalysisSession;
pub use stats::SentimentBreakdown;
