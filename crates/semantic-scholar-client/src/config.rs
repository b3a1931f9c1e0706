//! Configuration for the Semantic Scholar client.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Number of title-search results scanned for a match (single page).
    pub const SEARCH_LIMIT: u32 = 100;

    /// Minimum ROUGE-L score (exclusive) for two titles to be the same paper.
    pub const TITLE_MATCH_THRESHOLD: f64 = 0.95;

    /// Transient failures are surfaced immediately unless the caller opts in.
    pub const MAX_RETRIES: u32 = 0;

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Field sets requested from the Graph API.
pub mod fields {
    /// Title search only needs enough to compare titles.
    pub const TITLE_SEARCH: &[&str] = &["title"];

    /// Author fields for author queries.
    pub const AUTHOR: &[&str] =
        &["authorId", "url", "name", "affiliations", "paperCount", "citationCount", "hIndex"];

    /// Top-level paper fields of a detail record.
    pub const PAPER: &[&str] = &[
        "paperId",
        "url",
        "title",
        "abstract",
        "venue",
        "year",
        "referenceCount",
        "citationCount",
        "influentialCitationCount",
        "isOpenAccess",
        "fieldsOfStudy",
        "publicationDate",
        "externalIds",
    ];

    /// Fields of each citing/cited paper embedded in a detail record.
    pub const LINKED_PAPER: &[&str] = &[
        "paperId",
        "title",
        "year",
        "url",
        "abstract",
        "authors",
        "venue",
        "fieldsOfStudy",
        "publicationDate",
        "referenceCount",
        "citationCount",
        "influentialCitationCount",
    ];

    /// Full field list for `GET /paper/{id}`: paper fields, `authors.*`,
    /// `citations.*` and `references.*`.
    #[must_use]
    pub fn paper_detail() -> Vec<String> {
        let mut out: Vec<String> = PAPER.iter().map(|f| (*f).to_string()).collect();
        out.extend(AUTHOR.iter().map(|f| format!("authors.{f}")));
        out.extend(LINKED_PAPER.iter().map(|f| format!("citations.{f}")));
        out.extend(LINKED_PAPER.iter().map(|f| format!("references.{f}")));
        out
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Semantic Scholar API key (optional).
    pub api_key: Option<String>,

    /// Base URL for Graph API (for testing with mock servers).
    pub graph_api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Results requested from the title search.
    pub search_limit: u32,

    /// Title match threshold in `[0, 1]`; a score must be strictly above it.
    pub title_match_threshold: f64,

    /// Retries of transient failures (429, 5xx, connection errors).
    pub max_retries: u32,
}

impl Config {
    /// Create a new configuration with optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            graph_api_url: api::GRAPH_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            search_limit: api::SEARCH_LIMIT,
            title_match_threshold: api::TITLE_MATCH_THRESHOLD,
            max_retries: api::MAX_RETRIES,
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            graph_api_url: format!("{}/graph/v1", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new(None)
        }
    }

    /// Create configuration from environment variables (and a `.env` file if present).
    ///
    /// Reads `SEMANTIC_SCHOLAR_API_KEY`, `SEMANTIC_SCHOLAR_API_URL`,
    /// `SEMANTIC_SCHOLAR_TITLE_THRESHOLD` and `SEMANTIC_SCHOLAR_MAX_RETRIES`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("SEMANTIC_SCHOLAR_API_KEY").ok().filter(|k| !k.is_empty());
        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("SEMANTIC_SCHOLAR_API_URL") {
            config.graph_api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("SEMANTIC_SCHOLAR_TITLE_THRESHOLD") {
            let threshold: f64 = raw
                .parse()
                .with_context(|| format!("SEMANTIC_SCHOLAR_TITLE_THRESHOLD is not a number: {raw}"))?;
            anyhow::ensure!(
                (0.0..=1.0).contains(&threshold),
                "SEMANTIC_SCHOLAR_TITLE_THRESHOLD must be within [0, 1], got {threshold}"
            );
            config.title_match_threshold = threshold;
        }

        if let Ok(raw) = std::env::var("SEMANTIC_SCHOLAR_MAX_RETRIES") {
            config.max_retries = raw
                .parse()
                .with_context(|| format!("SEMANTIC_SCHOLAR_MAX_RETRIES is not a count: {raw}"))?;
        }

        Ok(config)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
