//! Semantic Scholar API client.
//!
//! Provides async HTTP client with:
//! - Connection pooling via reqwest
//! - Opt-in retry middleware with exponential backoff (off by default)
//! - Status code to [`ClientError`] mapping

mod transport;

use std::time::Duration;

use anyhow::Context;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api, fields};
use crate::error::{ClientError, ClientResult};
use crate::matching::{TitleMatcher, normalize_title};
use crate::models::{Author, AuthorSearchResult, Paper, SearchResult};

/// Characters escaped in a resource id. `/` and `:` pass through for
/// `DOI:10.x/y` style ids.
const ID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Semantic Scholar API client.
#[derive(Clone)]
pub struct SemanticScholarClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API key (optional).
    api_key: Option<String>,

    /// Graph API base URL.
    graph_api_url: String,

    /// Results requested from the title search.
    search_limit: u32,

    /// Title comparison for search hits.
    matcher: TitleMatcher,
}

impl SemanticScholarClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        if let Some(ref key) = config.api_key {
            headers.insert("x-api-key", key.parse()?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        let mut builder = ClientBuilder::new(client);
        if config.max_retries > 0 {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
                .build_with_max_retries(config.max_retries);
            builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        anyhow::ensure!(
            (0.0..=1.0).contains(&config.title_match_threshold),
            "title match threshold must be within [0, 1], got {}",
            config.title_match_threshold
        );

        let base = url::Url::parse(&config.graph_api_url)
            .with_context(|| format!("invalid Graph API URL: {}", config.graph_api_url))?;
        anyhow::ensure!(
            matches!(base.scheme(), "http" | "https"),
            "Graph API URL must be http(s): {base}"
        );

        Ok(Self {
            client: builder.build(),
            api_key: config.api_key,
            graph_api_url: base.as_str().trim_end_matches('/').to_string(),
            search_limit: config.search_limit,
            matcher: TitleMatcher::new(config.title_match_threshold),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Threshold a title-match score must exceed.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.matcher.threshold()
    }

    /// Check if `title` matches `reference` under this client's threshold.
    #[must_use]
    pub fn is_match_title(&self, title: &str, reference: &str) -> bool {
        self.matcher.is_match(title, reference)
    }

    /// Find the Semantic Scholar ID of the paper with the given title.
    ///
    /// Punctuation is stripped from the query. One page of search results is
    /// scanned in ranking order and the first hit whose title matches is
    /// returned.
    ///
    /// # Errors
    ///
    /// `BadRequest` for an empty title, `NotFound` when no hit matches, and
    /// transport or parse errors from the request itself.
    pub async fn get_paper_id_from_title(&self, title: &str) -> ClientResult<String> {
        let query = normalize_title(title);
        if query.is_empty() {
            return Err(ClientError::bad_request("title must not be empty"));
        }

        let url = format!("{}/paper/search", self.graph_api_url);
        let params = vec![
            ("query".to_string(), query.clone()),
            ("fields".to_string(), fields::TITLE_SEARCH.join(",")),
            ("offset".to_string(), "0".to_string()),
            ("limit".to_string(), self.search_limit.to_string()),
        ];

        let result: SearchResult = self.get(&url, &params).await?;
        let hits = match result.data {
            Some(hits) if !hits.is_empty() => hits,
            _ => {
                return Err(ClientError::not_found(format!("no search results for title '{query}'")));
            }
        };

        let found = hits.into_iter().find(|hit| {
            !hit.paper_id.trim().is_empty()
                && hit.title.as_deref().is_some_and(|t| self.matcher.is_match(&query, t))
        });

        match found {
            Some(hit) => {
                tracing::debug!(title = %query, paper_id = %hit.paper_id.trim(), "Matched title");
                Ok(hit.paper_id.trim().to_string())
            }
            None => Err(ClientError::not_found(format!("no paper matching title '{query}'"))),
        }
    }

    /// Get a paper's full record: metadata, authors, citations and references.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown ID, transport or parse errors otherwise.
    pub async fn get_paper_detail(&self, paper_id: &str) -> ClientResult<Paper> {
        let url = self.resource_url("paper", paper_id)?;
        let params = vec![("fields".to_string(), fields::paper_detail().join(","))];

        self.get(&url, &params).await
    }

    /// Get an author by ID.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown ID, transport or parse errors otherwise.
    pub async fn get_author_detail(&self, author_id: &str) -> ClientResult<Author> {
        let url = self.resource_url("author", author_id)?;
        let params = vec![("fields".to_string(), fields::AUTHOR.join(","))];

        self.get(&url, &params).await
    }

    /// Find an author by name.
    ///
    /// With `paper_id`, the first author in the results who wrote that paper
    /// is returned; without it, the first result.
    ///
    /// # Errors
    ///
    /// `NotFound` when the search is empty or no author lists the paper.
    pub async fn get_author_detail_by_name(
        &self,
        author_name: &str,
        paper_id: Option<&str>,
    ) -> ClientResult<Author> {
        let query = author_name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        if query.is_empty() {
            return Err(ClientError::bad_request("author name must not be empty"));
        }

        let url = format!("{}/author/search", self.graph_api_url);
        let mut requested: Vec<&str> = fields::AUTHOR.to_vec();
        requested.push("papers.paperId");
        let params = vec![
            ("query".to_string(), query.clone()),
            ("fields".to_string(), requested.join(",")),
        ];

        let result: AuthorSearchResult = self.get(&url, &params).await?;
        let mut authors = result.data.unwrap_or_default().into_iter();

        let found = match paper_id.filter(|id| !id.is_empty()) {
            Some(id) => authors.find(|a| a.wrote(id)),
            None => authors.next(),
        };

        found.ok_or_else(|| ClientError::not_found(format!("no author named '{query}'")))
    }

    /// `{graph_api_url}/{kind}/{id}` with the id percent-encoded, so `?`, `#`
    /// and `%` stay part of the path.
    fn resource_url(&self, kind: &str, id: &str) -> ClientResult<String> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ClientError::bad_request(format!("{kind} id must not be empty")));
        }

        let id = utf8_percent_encode(id, ID_ENCODE_SET);
        Ok(format!("{}/{}/{}", self.graph_api_url, kind, id))
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient")
            .field("has_api_key", &self.has_api_key())
            .field("graph_api_url", &self.graph_api_url)
            .field("threshold", &self.threshold())
            .finish()
    }
}
