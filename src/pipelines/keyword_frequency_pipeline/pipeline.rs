use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_STOP_WORDS;

static DEFAULT_STOP_SET: Lazy<HashSet<String>> =
    Lazy::new(|| DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect());

/// A ranked word and the number of times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

pub struct KeywordFrequencyPipeline {
    pub(crate) limit: usize,
    pub(crate) min_word_length: usize,
    pub(crate) top_n: usize,
    pub(crate) stop_words: HashSet<String>,
}

impl KeywordFrequencyPipeline {
    /// Rank the words used across `comments`, most frequent first.
    ///
    /// Returns at most `limit` entries. Words with equal counts keep the
    /// order in which they first appear.
    pub fn word_frequencies<S: AsRef<str>>(&self, comments: &[S]) -> Vec<WordFrequency> {
        let ranked = rank_words(comments, self.limit, self.min_word_length, |w| {
            self.stop_words.contains(w)
        });
        tracing::debug!(
            comments = comments.len(),
            words = ranked.len(),
            "ranked keyword frequencies"
        );
        ranked
    }

    /// The short keyword list shown next to a word cloud.
    pub fn top_keywords<S: AsRef<str>>(&self, comments: &[S]) -> Vec<WordFrequency> {
        let mut ranked = self.word_frequencies(comments);
        ranked.truncate(self.top_n);
        ranked
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Rank words across `comments` with the default stop words and length filter.
pub fn word_frequencies<S: AsRef<str>>(comments: &[S], limit: usize) -> Vec<WordFrequency> {
    rank_words(comments, limit, 4, |w| DEFAULT_STOP_SET.contains(w))
}

fn rank_words<S, F>(comments: &[S], limit: usize, min_len: usize, is_stop_word: F) -> Vec<WordFrequency>
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let text = comments
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    // Insertion order doubles as the tie-break once the stable sort runs.
    let mut ranked: Vec<WordFrequency> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() < min_len || is_stop_word(token) {
            continue;
        }
        match index.get(token) {
            Some(&i) => ranked[i].count += 1,
            None => {
                index.insert(token, ranked.len());
                ranked.push(WordFrequency {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
