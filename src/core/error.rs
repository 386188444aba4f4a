use thiserror::Error;

/// Error type returned by the ingestion, configuration and export layers.
///
/// Classification and keyword ranking never fail on their own. Every
/// variant here is raised by the code that feeds them or consumes them.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The submitted text was blank after trimming, or a file held no
    /// usable lines.
    #[error("please enter a comment to analyze")]
    EmptyInput,

    /// The URL failed basic syntax validation. No network attempt is made.
    #[error("unparseable url `{input}`: {reason}")]
    UnparseableUrl { input: String, reason: String },

    /// Retrieval of remote comments failed.
    #[error("failed to fetch comments: {0}")]
    Fetch(String),

    /// The configuration document was not valid JSON for [`AnalyzerConfig`].
    ///
    /// [`AnalyzerConfig`]: crate::core::AnalyzerConfig
    #[error("configuration decoding failed: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration decoded but holds values the analyzers can't use.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing exported results failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
