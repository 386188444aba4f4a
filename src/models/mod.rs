pub mod implementations;
pub mod lexicon;

pub use implementations::KeywordSentimentModel;
pub use lexicon::Lexicon;
