//! Look up a paper by title and print its record.
//!
//! Run with: `cargo run --example lookup -- "Attention Is All You Need"`

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use semantic_scholar_client::{Config, SemanticScholarClient};

#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Find a paper on Semantic Scholar by title")]
#[command(version)]
struct Cli {
    /// Paper title to look up
    title: String,

    /// Semantic Scholar API key (optional)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY")]
    api_key: Option<String>,

    /// Title match threshold in [0, 1]
    #[arg(long)]
    threshold: Option<f64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if cli.api_key.is_some() {
        config.api_key = cli.api_key;
    }
    if let Some(threshold) = cli.threshold {
        config.title_match_threshold = threshold;
    }

    let client = SemanticScholarClient::new(config)?;
    tracing::info!(title = %cli.title, "Looking up paper");

    let paper_id = client.get_paper_id_from_title(&cli.title).await?;
    let paper = client.get_paper_detail(&paper_id).await?;

    println!("{}", serde_json::to_string_pretty(&paper)?);
    tracing::info!(
        paper_id = %paper.paper_id,
        authors = paper.authors.len(),
        citations = paper.citations.len(),
        references = paper.references.len(),
        "Done"
    );

    Ok(())
}
