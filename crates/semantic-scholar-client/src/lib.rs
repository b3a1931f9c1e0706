//! Semantic Scholar Client
//!
//! A small async client for the Semantic Scholar Graph API. It turns a paper
//! title into a Semantic Scholar paper ID and an ID into the full paper
//! record (authors, citations, references), and can look up authors by ID or
//! by name.
//!
//! # Features
//!
//! - **Title lookup**: ROUGE-L title matching over one page of search results
//! - **Typed records**: `serde` models tolerant of missing and `null` fields
//! - **Clear failures**: not-found, transport and malformed-response errors are
//!   distinguishable on [`ClientError`]
//!
//! # Example
//!
//! ```no_run
//! use semantic_scholar_client::{Config, SemanticScholarClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = SemanticScholarClient::new(config)?;
//!
//!     let paper_id = client.get_paper_id_from_title("Attention Is All You Need").await?;
//!     let paper = client.get_paper_detail(&paper_id).await?;
//!     println!("{} ({:?})", paper.title_or_default(), paper.year());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use models::{Author, Paper};
