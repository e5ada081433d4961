use serde::{Deserialize, Serialize};

/// One `<entry>` from the arXiv Atom feed, as the API returns it.
///
/// The published timestamp stays a raw string here; parsing policy (and the
/// fallback for malformed values) belongs to the analysis layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub published: String,
    pub url: String,
    pub authors: Vec<String>,
}
