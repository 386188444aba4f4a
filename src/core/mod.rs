pub mod config;
pub mod error;
pub mod sentiment;

pub use config::{AnalyzerConfig, FontScale, KeywordConfig, ScoringConfig, SummaryConfig};
pub use error::{AnalysisError, Result};
pub use sentiment::{Sentiment, SentimentResult};
