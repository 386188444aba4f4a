use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Sentiment label assigned to a comment.
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All labels, in dashboard order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    /// Returns the string representation of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Analysis of a single comment.
pub struct SentimentResult {
    /// Identity for list rendering. Carries no meaning beyond that.
    pub id: Uuid,
    /// The comment exactly as submitted.
    pub comment: String,
    pub sentiment: Sentiment,
    /// Heuristic keyword-match strength in `[0, 1]`. Not a calibrated probability.
    pub confidence: f64,
    pub summary: String,
}
