//! CSV export of analysis results.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::core::{Result, SentimentResult};

/// Suggested name for the downloaded file.
pub const EXPORT_FILE_NAME: &str = "sentiment-analysis-results.csv";

const HEADER: [&str; 4] = ["Comment", "Sentiment", "Confidence", "Summary"];

/// Write `results` as CSV: one header row, then one row per result.
///
/// Every field is quoted and embedded quotes are doubled. Each record ends
/// with `\n`.
pub fn write_csv<W: Write>(writer: W, results: &[SentimentResult]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for result in results {
        let confidence = result.confidence.to_string();
        writer.write_record([
            result.comment.as_str(),
            result.sentiment.as_str(),
            confidence.as_str(),
            result.summary.as_str(),
        ])?;
    }

    writer.flush()?;
    tracing::debug!(rows = results.len(), "exported results as csv");
    Ok(())
}

pub fn to_csv_string(results: &[SentimentResult]) -> String {
    let mut buf = Vec::new();
    write_csv(&mut buf, results).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sentiment;
    use uuid::Uuid;

    fn result(comment: &str, summary: &str) -> SentimentResult {
        SentimentResult {
            id: Uuid::nil(),
            comment: comment.to_string(),
            sentiment: Sentiment::Negative,
            confidence: 0.8,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_header_only_for_no_results() {
        assert_eq!(
            to_csv_string(&[]),
            "\"Comment\",\"Sentiment\",\"Confidence\",\"Summary\"\n"
        );
    }

    #[test]
    fn test_fields_quoted_and_quotes_doubled() {
        let csv = to_csv_string(&[result(r#"They called it "bad", twice"#, "s")]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#""They called it ""bad"", twice","negative","0.8","s""#
        );
    }

    #[test]
    fn test_embedded_newline_stays_inside_quotes() {
        let csv = to_csv_string(&[result("line one\nline \"two\" good", "s")]);
        assert!(csv.contains("\"line one\nline \"\"two\"\" good\""));
    }
}
