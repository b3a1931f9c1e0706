//! Author data model matching Semantic Scholar API schema.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{PaperRef, null_as_default};

/// Author search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of authors. `None` when the API omitted the key entirely.
    #[serde(default)]
    pub data: Option<Vec<Author>>,
}

/// A research author from Semantic Scholar.
///
/// Equality, ordering and hashing use `author_id` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique Semantic Scholar author ID (empty if the API sent none).
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Semantic Scholar profile URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Author's institutional affiliations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<String>,

    /// Total number of papers by this author.
    #[serde(default)]
    pub paper_count: Option<i32>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// h-index metric.
    #[serde(default)]
    pub h_index: Option<i32>,

    /// Papers by this author; only present when `papers.*` fields were requested.
    #[serde(default, deserialize_with = "null_as_default")]
    pub papers: Vec<PaperRef>,
}

impl Author {
    /// Get the author name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Get the primary affiliation if available.
    #[must_use]
    pub fn primary_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }

    /// Check whether `paper_id` is among this author's listed papers.
    #[must_use]
    pub fn wrote(&self, paper_id: &str) -> bool {
        !paper_id.is_empty() && self.papers.iter().any(|p| p.paper_id == paper_id)
    }

    /// Compare every field except `papers`, unlike `==` which only compares ids.
    #[must_use]
    pub fn exact_match(&self, other: &Self) -> bool {
        self.author_id == other.author_id
            && self.name == other.name
            && self.affiliations == other.affiliations
            && self.paper_count == other.paper_count
            && self.citation_count == other.citation_count
            && self.h_index == other.h_index
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.author_id == other.author_id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.author_id.hash(state);
    }
}

impl PartialOrd for Author {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Author {
    fn cmp(&self, other: &Self) -> Ordering {
        self.author_id.cmp(&other.author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_deserialize_full() {
        let json = r#"{
            "authorId": "40348417",
            "name": "Ashish Vaswani",
            "url": "https://www.semanticscholar.org/author/40348417",
            "affiliations": ["Google Brain"],
            "paperCount": 50,
            "citationCount": 120000,
            "hIndex": 20
        }"#;

        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.author_id, "40348417");
        assert_eq!(author.name_or_default(), "Ashish Vaswani");
        assert_eq!(author.primary_affiliation(), Some("Google Brain"));
        assert_eq!(author.h_index, Some(20));
        assert!(author.papers.is_empty());
    }

    #[test]
    fn test_author_null_id_and_affiliations() {
        let json = r#"{"authorId": null, "name": "Anon", "affiliations": null}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert_eq!(author.author_id, "");
        assert!(author.affiliations.is_empty());
    }

    #[test]
    fn test_author_identity_is_id() {
        let a = Author { author_id: "1".into(), name: Some("A".into()), ..Default::default() };
        let b = Author { author_id: "1".into(), name: Some("B".into()), ..Default::default() };
        assert_eq!(a, b);
        assert!(!a.exact_match(&b));

        let mut authors = vec![
            Author { author_id: "3".into(), ..Default::default() },
            Author { author_id: "2".into(), ..Default::default() },
        ];
        authors.sort();
        assert_eq!(authors[0].author_id, "2");
    }

    #[test]
    fn test_author_wrote() {
        let json = r#"{"authorId": "1", "papers": [{"paperId": "p1"}, {"paperId": null}]}"#;
        let author: Author = serde_json::from_str(json).unwrap();
        assert!(author.wrote("p1"));
        assert!(!author.wrote("p2"));
    }
}
