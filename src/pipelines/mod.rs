// Pipeline modules organized by functionality
pub mod keyword_frequency_pipeline;
pub mod sentiment_analysis_pipeline;

pub use keyword_frequency_pipeline::{
    word_cloud, word_frequencies, KeywordFrequencyPipeline, KeywordFrequencyPipelineBuilder,
    WordCloudEntry, WordFrequency,
};
pub use sentiment_analysis_pipeline::{
    classify, summarize, Prediction, SentimentAnalysisModel, SentimentAnalysisPipeline,
    SentimentAnalysisPipelineBuilder,
};
