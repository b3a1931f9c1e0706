//! Paper data model matching Semantic Scholar API schema.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{Author, null_as_default};

/// A research paper from Semantic Scholar.
///
/// A detail record carries `citations` and `references`; the papers inside
/// those lists are shallow and have both lists empty. Equality, ordering and
/// hashing use `paper_id` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique Semantic Scholar paper ID (empty for unresolved references).
    #[serde(default, deserialize_with = "null_as_default")]
    pub paper_id: String,

    /// Semantic Scholar page URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication date (the API sends `YYYY-MM-DD`).
    #[serde(default)]
    pub publication_date: Option<NaiveDate>,

    /// Number of references in this paper.
    #[serde(default)]
    pub reference_count: Option<i32>,

    /// Number of citations this paper has received.
    #[serde(default)]
    pub citation_count: Option<i32>,

    /// Influential citation count.
    #[serde(default)]
    pub influential_citation_count: Option<i32>,

    /// Whether this paper is open access.
    #[serde(default)]
    pub is_open_access: Option<bool>,

    /// Fields of study (e.g., "Computer Science", "Medicine").
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields_of_study: Vec<String>,

    /// External identifiers (DOI, ArXiv, PubMed, etc.).
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,

    /// List of authors.
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,

    /// Papers citing this one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Paper>,

    /// Papers this one cites.
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<Paper>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Publication year, taken from `year` or else from the publication date.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.year.or_else(|| self.publication_date.map(|d| d.year()))
    }

    /// Get the DOI if available.
    #[must_use]
    pub fn doi(&self) -> Option<&str> {
        self.external_ids.as_ref()?.doi.as_deref()
    }

    /// Get the ArXiv ID if available.
    #[must_use]
    pub fn arxiv_id(&self) -> Option<&str> {
        self.external_ids.as_ref()?.arxiv.as_deref()
    }

    /// Get citation count or 0 if not available.
    #[must_use]
    pub fn citations_or_zero(&self) -> i32 {
        self.citation_count.unwrap_or(0)
    }

    /// Get the first author's name if available.
    #[must_use]
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first()?.name.as_deref()
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compare all metadata, authors, citations and references field by field.
    ///
    /// Linked lists are compared as sets keyed by id, so ordering differences
    /// between two fetches do not count.
    #[must_use]
    pub fn exact_match(&self, other: &Self) -> bool {
        self.paper_id == other.paper_id
            && self.title == other.title
            && self.r#abstract == other.r#abstract
            && self.venue == other.venue
            && self.year() == other.year()
            && self.url == other.url
            && self.publication_date == other.publication_date
            && self.reference_count == other.reference_count
            && self.citation_count == other.citation_count
            && self.influential_citation_count == other.influential_citation_count
            && self.is_open_access == other.is_open_access
            && self.fields_of_study == other.fields_of_study
            && pairwise(&self.authors, &other.authors, Author::exact_match)
            && pairwise(&self.citations, &other.citations, Self::exact_match)
            && pairwise(&self.references, &other.references, Self::exact_match)
    }
}

/// Sort both sides by identity and compare element-wise with `same`.
fn pairwise<T: Ord>(a: &[T], b: &[T], same: impl Fn(&T, &T) -> bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&T> = a.iter().collect();
    let mut b: Vec<&T> = b.iter().collect();
    a.sort();
    b.sort();
    a.into_iter().zip(b).all(|(x, y)| same(x, y))
}

impl PartialEq for Paper {
    fn eq(&self, other: &Self) -> bool {
        self.paper_id == other.paper_id
    }
}

impl Eq for Paper {}

impl Hash for Paper {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.paper_id.hash(state);
    }
}

impl PartialOrd for Paper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Paper {
    fn cmp(&self, other: &Self) -> Ordering {
        self.paper_id.cmp(&other.paper_id)
    }
}

/// Minimal paper reference (author paper lists, title search hits).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperRef {
    /// Paper ID.
    #[serde(default, deserialize_with = "null_as_default")]
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,
}

/// External identifiers for a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIds {
    /// Digital Object Identifier.
    #[serde(rename = "DOI", default)]
    pub doi: Option<String>,

    /// ArXiv preprint ID.
    #[serde(rename = "ArXiv", default)]
    pub arxiv: Option<String>,

    /// PubMed ID.
    #[serde(rename = "PubMed", default)]
    pub pubmed: Option<String>,

    /// DBLP key.
    #[serde(rename = "DBLP", default)]
    pub dblp: Option<String>,
}

/// Title search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Indicates if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// Papers in this page. `None` when the API omitted the key, which it
    /// does when nothing matched.
    #[serde(default)]
    pub data: Option<Vec<PaperRef>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert!(paper.citations.is_empty());
        assert_eq!(paper.year(), None);
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Test Paper",
            "abstract": "This is a test.",
            "year": 2024,
            "publicationDate": "2024-03-01",
            "citationCount": 42,
            "authors": [{"authorId": "auth1", "name": "John Doe"}],
            "externalIds": {"DOI": "10.1234/test", "CorpusId": 123}
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert_eq!(paper.title_or_default(), "Test Paper");
        assert_eq!(paper.year(), Some(2024));
        assert_eq!(paper.publication_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(paper.citations_or_zero(), 42);
        assert_eq!(paper.doi(), Some("10.1234/test"));
        assert_eq!(paper.first_author(), Some("John Doe"));
    }

    #[test]
    fn test_year_falls_back_to_publication_date() {
        let json = r#"{"paperId": "x", "year": null, "publicationDate": "2017-06-12"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.year(), Some(2017));
    }

    #[test]
    fn test_unresolved_reference_has_empty_id() {
        let json = r#"{
            "paperId": "root",
            "references": [{"paperId": null, "title": "Some old tech report"}],
            "fieldsOfStudy": null
        }"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.references.len(), 1);
        assert_eq!(paper.references[0].paper_id, "");
        assert!(paper.fields_of_study.is_empty());
    }

    #[test]
    fn test_exact_match_ignores_list_order() {
        let cite = |id: &str| Paper { paper_id: id.into(), ..Default::default() };
        let a = Paper {
            paper_id: "p".into(),
            title: Some("T".into()),
            citations: vec![cite("c1"), cite("c2")],
            ..Default::default()
        };
        let mut b = a.clone();
        b.citations.reverse();
        assert!(a.exact_match(&b));

        b.title = Some("Other".into());
        assert_eq!(a, b);
        assert!(!a.exact_match(&b));
    }

    #[test]
    fn test_search_result_without_data() {
        let json = r#"{"total": 0, "offset": 0}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.data.is_none());
    }
}
