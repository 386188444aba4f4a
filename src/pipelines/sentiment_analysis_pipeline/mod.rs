//! Sentiment analysis pipeline for stakeholder comments.
//!
//! Labels each comment positive, negative or neutral, attaches a heuristic
//! confidence and builds a short summary. The default model is
//! [`KeywordSentimentModel`](crate::models::KeywordSentimentModel), which
//! counts keyword hits. Any type implementing [`SentimentAnalysisModel`]
//! can stand in for it.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - classifies single comments or batches
//! - [`SentimentAnalysisPipelineBuilder`] - builder for model, seed and summary settings
//! - [`SentimentAnalysisModel`] - trait for sentiment model implementations
//!
//! ## Usage Example
//!
//! ```rust
//! use comment_analysis::pipelines::sentiment_analysis_pipeline::*;
//!
//! let mut pipeline = SentimentAnalysisPipelineBuilder::keyword().seed(42).build()?;
//!
//! let result = pipeline.predict("This is an excellent and beneficial proposal")?;
//! println!("Sentiment: {} (confidence: {:.2})", result.sentiment, result.confidence);
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! # Ok::<(), comment_analysis::AnalysisError>(())
//! ```

pub mod builder;
pub mod model;
pub mod pipeline;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use model::{Prediction, SentimentAnalysisModel};
pub use pipeline::{classify, summarize, SentimentAnalysisPipeline};

pub use crate::core::{Sentiment, SentimentResult};
