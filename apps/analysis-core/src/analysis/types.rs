use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One retrieved literature record, normalized from the raw Atom entry.
/// Immutable once built; owned by the report it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paper {
    pub title: String,
    pub authors: Vec<String>,
    pub summary: String,
    pub url: String,
    pub published: DateTime<Utc>,
}

/// One derived physical quantity relevant to the topic. `value` is
/// pre-formatted (magnitude + unit); formatting is fixed per calculation
/// kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Calculation {
    pub label: String,
    pub value: String,
    pub details: String,
}

/// Which fixed-parameter computations apply to a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationProfile {
    BlackHole,
    Orbital,
    None,
}

/// The assembled response for one analyzed topic. `overview` and
/// `future_work` are non-empty by the time the orchestrator returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub topic: String,
    pub overview: String,
    pub papers: Vec<Paper>,
    pub calculations: Vec<Calculation>,
    pub future_work: String,
}
