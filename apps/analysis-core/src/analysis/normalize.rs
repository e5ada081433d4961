use super::types::Paper;
use arxiv_feed::FeedEntry;
use chrono::{DateTime, Utc};

/// Map raw feed entries to `Paper`s: one output per input, input order
/// preserved, no filtering.
pub fn normalize_entries(entries: Vec<FeedEntry>) -> Vec<Paper> {
    entries.into_iter().map(normalize_entry).collect()
}

fn normalize_entry(e: FeedEntry) -> Paper {
    Paper {
        published: parse_published(&e.published),
        title: e.title,
        authors: e.authors,
        summary: e.summary,
        url: e.url,
    }
}

/// arXiv publishes Zulu-suffixed timestamps; rewrite the trailing `Z` to an
/// explicit `+00:00` offset before the strict RFC 3339 parse. Anything
/// unparsable gets the current time so a bad record never sinks the batch.
fn parse_published(raw: &str) -> DateTime<Utc> {
    let rewritten = match raw.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };
    match DateTime::parse_from_rfc3339(&rewritten) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(err) => {
            tracing::warn!(raw, error = %err, "unparsable published timestamp; substituting now");
            Utc::now()
        }
    }
}
