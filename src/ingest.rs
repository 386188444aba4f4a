//! Collecting raw comments from a text box, an uploaded file or a URL.

use std::path::Path;

use url::Url;

use crate::core::{AnalysisError, Result};

/// Comments returned by [`UrlSource::fetch_comments`] until real retrieval exists.
pub const MOCK_URL_COMMENTS: [&str; 5] = [
    "I strongly support this amendment; the disclosure rules are clear and effective.",
    "The proposed compliance timeline is problematic for small companies and should be extended.",
    "Section 4 needs clarification on how the thresholds will be calculated.",
    "This is a great step towards transparency and I agree with the overall direction.",
    "The penalty provisions are harmful to startups and I oppose them in their current form.",
];

/// A single comment typed by the user. Blank input is rejected.
pub fn single_comment(text: &str) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    Ok(vec![text.to_string()])
}

/// One comment per line.
///
/// No CSV quoting is interpreted, so a delimiter inside a line stays part
/// of that comment. A trailing `\r` is stripped from each line and lines
/// that are blank after trimming are dropped.
pub fn comments_from_text(content: &str) -> Result<Vec<String>> {
    let comments: Vec<String> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();
    if comments.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    tracing::debug!(count = comments.len(), "parsed comments from text");
    Ok(comments)
}

/// Read a text or CSV file and parse it with [`comments_from_text`].
pub fn comments_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read comment file");
    comments_from_text(&content)
}

/// A validated page address to collect comments from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSource {
    url: Url,
}

impl UrlSource {
    /// Check that `input` is an absolute http(s) URL. Nothing is fetched.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let url = Url::parse(trimmed).map_err(|e| AnalysisError::UnparseableUrl {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
            return Err(AnalysisError::UnparseableUrl {
                input: trimmed.to_string(),
                reason: format!("expected an http or https address, got `{}`", url.scheme()),
            });
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Comments found at this address.
    ///
    /// Retrieval is not implemented. This returns [`MOCK_URL_COMMENTS`] and
    /// performs no network I/O, so it never yields [`AnalysisError::Fetch`].
    pub fn fetch_comments(&self) -> Result<Vec<String>> {
        tracing::info!(url = %self.url, "using mock comments for url source");
        Ok(MOCK_URL_COMMENTS.iter().map(|c| c.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_comment_rejects_blank() {
        assert!(matches!(
            single_comment(" \t\n"),
            Err(AnalysisError::EmptyInput)
        ));
        assert_eq!(single_comment("ok then").unwrap(), vec!["ok then"]);
    }

    #[test]
    fn test_lines_split_and_blanks_dropped() {
        let comments = comments_from_text("first\r\n\n   \nsecond, with comma\nthird").unwrap();
        assert_eq!(comments, vec!["first", "second, with comma", "third"]);
    }

    #[test]
    fn test_only_blank_lines_is_empty_input() {
        assert!(matches!(
            comments_from_text("\n \r\n\t\n"),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = comments_from_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }

    #[test]
    fn test_url_validation() {
        assert!(UrlSource::parse("https://example.gov/consultations/42").is_ok());
        assert!(matches!(
            UrlSource::parse("not a url"),
            Err(AnalysisError::UnparseableUrl { .. })
        ));
        assert!(matches!(
            UrlSource::parse("ftp://example.gov/file"),
            Err(AnalysisError::UnparseableUrl { .. })
        ));
    }

    #[test]
    fn test_fetch_returns_mock_comments() {
        let source = UrlSource::parse("https://example.gov/draft").unwrap();
        let comments = source.fetch_comments().unwrap();
        assert_eq!(comments.len(), MOCK_URL_COMMENTS.len());
    }
}
