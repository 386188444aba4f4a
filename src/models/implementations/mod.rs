pub mod keyword;

pub use keyword::KeywordSentimentModel;
