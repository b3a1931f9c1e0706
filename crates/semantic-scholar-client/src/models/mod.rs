//! Data models for Semantic Scholar API entities.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match API naming.

mod author;
mod paper;

pub use author::{Author, AuthorSearchResult};
pub use paper::{ExternalIds, Paper, PaperRef, SearchResult};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` (or a missing key, with `#[serde(default)]`) as `T::default()`.
///
/// The Graph API sends `null` for ids of unresolved references and for empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
