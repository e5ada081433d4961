use super::types::AnalysisReport;
use super::{calc, classify, normalize, synthesize};
use crate::app::AppHandles;

/// Run the full topic analysis. Collaborator failures degrade to empty
/// collections or fallback prose; this function never errors and the
/// request-level contract never sees a failure from here.
pub async fn analyze(handles: &AppHandles, topic: &str) -> AnalysisReport {
    let budget = classify::decide_max_results(topic);
    let profile = classify::select_profile(topic);
    tracing::info!(topic, budget, ?profile, "analysis started");

    // The fetch and the calculations both depend only on the classifier, so
    // they run together; synthesis gates on both.
    let (fetched, calculations) = tokio::join!(handles.arxiv.search(topic, budget), async {
        calc::run_profile(profile)
    });

    let raw = match fetched {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(error = %e, "arXiv search failed; continuing with no papers");
            crate::telemetry::inc_provider_failure("arxiv");
            Vec::new()
        }
    };
    let papers = normalize::normalize_entries(raw);

    let (overview, future_work) = synthesize::synthesize(&handles.llm, topic, &papers, &calculations).await;
    let narrative = if overview.is_empty() && future_work.is_empty() { "fallback" } else { "generated" };
    crate::telemetry::inc_analysis(narrative);

    let overview = if overview.is_empty() {
        fallback_overview(topic, papers.len())
    } else {
        overview
    };
    let future_work = if future_work.is_empty() { fallback_future_work() } else { future_work };

    AnalysisReport { topic: topic.to_string(), overview, papers, calculations, future_work }
}

fn fallback_overview(topic: &str, paper_count: usize) -> String {
    format!(
        "This report is based on {} arXiv result(s) for the topic '{}'. The summaries below are extracted directly from the arXiv abstracts.",
        paper_count, topic
    )
}

fn fallback_future_work() -> String {
    "Future work may include deeper analysis of recent literature, more detailed astrophysical modelling, and cross-correlation with multi-messenger or multi-wavelength observations where relevant.".to_string()
}
