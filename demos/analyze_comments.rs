use anyhow::Result;
use comment_analysis::export::write_csv;
use comment_analysis::ingest::{comments_from_file, UrlSource};
use comment_analysis::pipelines::word_cloud;
use comment_analysis::*;
use tracing_subscriber::EnvFilter;

/// Usage: analyze_comments [COMMENTS_FILE | URL] [CONFIG_JSON]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let config = match args.next() {
        Some(path) => AnalyzerConfig::from_path(path)?,
        None => AnalyzerConfig::default(),
    };

    let comments = match input.as_deref() {
        Some(arg) if arg.starts_with("http://") || arg.starts_with("https://") => {
            UrlSource::parse(arg)?.fetch_comments()?
        }
        Some(path) => comments_from_file(path)?,
        None => UrlSource::parse("https://consultation.example.gov/draft")?.fetch_comments()?,
    };

    println!("Building pipelines...");
    let mut sentiment = SentimentAnalysisPipelineBuilder::from_config(&config)?.build()?;
    let keywords = KeywordFrequencyPipelineBuilder::from_config(config.keywords.clone()).build();

    let session = AnalysisSession::new().submit(&mut sentiment, &comments)?;

    println!("\n=== Sentiment Analysis Results ===");
    for result in session.results() {
        println!(
            "[{:<8}] {:.2}  {}",
            result.sentiment, result.confidence, result.summary
        );
    }

    let breakdown = session.breakdown();
    println!("\n=== Breakdown ({} comments) ===", breakdown.total());
    for sentiment in Sentiment::ALL {
        println!(
            "{:<8} {:>3} ({}%)",
            sentiment,
            breakdown.count(sentiment),
            breakdown.percentage(sentiment)
        );
    }
    println!("overall: {}", breakdown.overall());

    println!("\n=== Top Keywords ===");
    let top = keywords.top_keywords(&session.comments());
    for entry in word_cloud(&top, &config.font_scale) {
        println!("{} ({}) size {:.0}px", entry.word, entry.count, entry.font_size);
    }

    println!("\n=== CSV ===");
    write_csv(std::io::stdout().lock(), session.results())?;

    Ok(())
}
