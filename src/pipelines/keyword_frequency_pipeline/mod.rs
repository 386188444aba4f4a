//! Keyword frequency ranking across a set of comments.
//!
//! ## Usage Example
//!
//! ```rust
//! use comment_analysis::pipelines::keyword_frequency_pipeline::*;
//!
//! let pipeline = KeywordFrequencyPipelineBuilder::new().limit(50).build();
//! let ranked = pipeline.word_frequencies(&[
//!     "The regulation is excellent",
//!     "The regulation helps everyone",
//! ]);
//! assert_eq!(ranked[0].word, "regulation");
//! assert_eq!(ranked[0].count, 2);
//! ```

pub mod builder;
pub mod pipeline;
pub mod word_cloud;

pub use builder::KeywordFrequencyPipelineBuilder;
pub use pipeline::{word_frequencies, KeywordFrequencyPipeline, WordFrequency};
pub use word_cloud::{word_cloud, WordCloudEntry};
