//! Title normalisation and fuzzy title matching.
//!
//! Search hits are compared to the requested title with ROUGE-L: the longest
//! common subsequence of the two token sequences, turned into an F-measure.
//! Titles are lowercased, punctuation becomes whitespace and English stopwords
//! are dropped before scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex pattern"));

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
        "itself", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off",
        "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same",
        "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
        "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Replace ASCII punctuation with spaces and collapse runs of whitespace.
///
/// Case is preserved; this is what gets sent as the search query.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let spaced: String =
        title.chars().map(|c| if c.is_ascii_punctuation() { ' ' } else { c }).collect();
    WHITESPACE.replace_all(spaced.trim(), " ").into_owned()
}

/// Lowercased content tokens of a title.
///
/// A title made only of stopwords keeps all its words, so it can still match itself.
#[must_use]
pub fn title_tokens(title: &str) -> Vec<String> {
    let normalized = normalize_title(&title.to_lowercase());
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let content: Vec<String> =
        words.iter().filter(|w| !STOPWORDS.contains(**w)).map(|w| (*w).to_string()).collect();

    if content.is_empty() {
        words.into_iter().map(str::to_string).collect()
    } else {
        content
    }
}

/// Length of the longest common subsequence of two token slices.
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y { prev[j] + 1 } else { curr[j].max(prev[j + 1]) };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// ROUGE-L F-measure of `candidate` against `reference`, in `[0, 1]`.
///
/// Precision and recall are weighted equally. Empty token lists score `0.0`.
#[must_use]
pub fn rouge_l(candidate: &str, reference: &str) -> f64 {
    let cand = title_tokens(candidate);
    let refs = title_tokens(reference);
    if cand.is_empty() || refs.is_empty() {
        return 0.0;
    }

    let lcs = lcs_len(&cand, &refs);
    if lcs == 0 {
        return 0.0;
    }

    let lcs = lcs as f64;
    let precision = lcs / cand.len() as f64;
    let recall = lcs / refs.len() as f64;
    let alpha = 0.5;
    (precision * recall) / (alpha * recall + (1.0 - alpha) * precision)
}

/// Decides whether a search hit is the paper the caller asked for.
#[derive(Debug, Clone, Copy)]
pub struct TitleMatcher {
    threshold: f64,
}

impl TitleMatcher {
    /// Create a matcher; a score must be strictly greater than `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Check if `title` matches `reference`.
    #[must_use]
    pub fn is_match(&self, title: &str, reference: &str) -> bool {
        rouge_l(title, reference) > self.threshold
    }
}

impl Default for TitleMatcher {
    fn default() -> Self {
        Self::new(crate::config::api::TITLE_MATCH_THRESHOLD)
    }
}
