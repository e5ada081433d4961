use super::types::{Calculation, Paper};
use crate::llm::GeminiClient;

const OVERVIEW_MARKER: &str = "OVERVIEW:";
const FUTURE_WORK_MARKER: &str = "FUTURE_WORK:";

/// Produce `(overview, future_work)` for a report. Never errors: a provider
/// failure or empty model output yields two empty strings, and the
/// orchestrator supplies the fallback prose.
pub async fn synthesize(
    llm: &GeminiClient,
    topic: &str,
    papers: &[Paper],
    calculations: &[Calculation],
) -> (String, String) {
    let prompt = build_prompt(topic, papers, calculations);
    let text = match llm.generate(&prompt).await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(error = %e, "report generation failed");
            crate::telemetry::inc_provider_failure("gemini");
            return (String::new(), String::new());
        }
    };
    if text.trim().is_empty() {
        return (String::new(), String::new());
    }
    split_sections(&text)
}

/// One prompt embedding the topic, a block per paper, a line per
/// calculation, and the two-section output contract.
pub fn build_prompt(topic: &str, papers: &[Paper], calculations: &[Calculation]) -> String {
    let paper_text = if papers.is_empty() {
        "No papers were retrieved for this topic.".to_string()
    } else {
        papers
            .iter()
            .map(|p| {
                format!(
                    "Title: {}\nAuthors: {}\nPublished: {}\nAbstract: {}\nURL: {}",
                    p.title,
                    p.authors.join(", "),
                    p.published.to_rfc3339(),
                    p.summary,
                    p.url
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let calc_text = if calculations.is_empty() {
        "No explicit calculations were performed.".to_string()
    } else {
        calculations
            .iter()
            .map(|c| format!("{}: {} — {}", c.label, c.value, c.details))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut s = String::new();
    s.push_str("You are an expert astrophysics research assistant.\n\n");
    s.push_str(&format!("The user is asking about the topic:\n\"{}\"\n\n", topic));
    s.push_str("You are given a set of related papers:\n\nPAPERS:\n");
    s.push_str(&paper_text);
    s.push_str("\n\nYou are also given some basic astrophysical calculations (if any):\n\nCALCULATIONS:\n");
    s.push_str(&calc_text);
    s.push_str("\n\nYour job is NOT just to summarize. Think like a researcher who is comparing the papers, spotting agreements and disagreements, identifying what is still unknown, and proposing realistic, testable new ideas.\n\n");
    s.push_str("Write a clear, research-style report in TWO parts.\n\n");
    s.push_str("In the OVERVIEW section: explain the topic at a graduate-student level, describe what the papers collectively say, explicitly state where they AGREE and where they DISAGREE or tension exists, and mention any important role for the given calculations (or say they are generic if they do not tightly link to the papers).\n\n");
    s.push_str("In the FUTURE_WORK section: identify concrete research gaps suggested by the papers, propose several realistic topic-specific research directions, and include at least 2-3 specific testable hypotheses or questions, connecting gaps to potential future instruments, surveys, simulations or theoretical developments where appropriate.\n\n");
    s.push_str("IMPORTANT STYLE RULES:\n");
    s.push_str("- Do NOT use bullet points. Write in coherent paragraphs.\n");
    s.push_str("- Use the exact markers:\n\nOVERVIEW:\n<your text>\n\nFUTURE_WORK:\n<your text>\n\n");
    s.push_str("- Total length (both sections together) should be roughly 400-700 words.\n");
    s.push_str("- Stay grounded in the given papers; avoid hallucinating new fake papers.\n");
    s
}

/// Split the model output on the `FUTURE_WORK:` marker. Text without the
/// marker becomes the overview in full, with an empty future-work section.
pub fn split_sections(text: &str) -> (String, String) {
    match text.split_once(FUTURE_WORK_MARKER) {
        Some((before, after)) => {
            let overview = before.replace(OVERVIEW_MARKER, "").trim().to_string();
            (overview, after.trim().to_string())
        }
        None => (text.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn paper() -> Paper {
        Paper {
            title: "Constraints on evolving dark energy".into(),
            authors: vec!["Doe, J.".into()],
            summary: "We combine supernova and BAO data.".into(),
            url: "https://arxiv.org/abs/2501.01234".into(),
            published: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn splits_both_sections_trimmed() {
        let (overview, future_work) = split_sections("OVERVIEW:\nFoo.\n\nFUTURE_WORK:\nBar.");
        assert_eq!(overview, "Foo.");
        assert_eq!(future_work, "Bar.");
    }

    #[test]
    fn missing_marker_puts_everything_in_the_overview() {
        let (overview, future_work) = split_sections("  just prose, no markers  ");
        assert_eq!(overview, "just prose, no markers");
        assert_eq!(future_work, "");
    }

    #[test]
    fn marker_without_overview_prefix_still_splits() {
        let (overview, future_work) = split_sections("Intro text.\nFUTURE_WORK: next steps");
        assert_eq!(overview, "Intro text.");
        assert_eq!(future_work, "next steps");
    }

    #[test]
    fn prompt_embeds_papers_and_calculations() {
        let calcs = vec![Calculation {
            label: "Orbital period at 1 AU".into(),
            value: "365.2 days".into(),
            details: "Earth-like orbit.".into(),
        }];
        let prompt = build_prompt("dark energy", &[paper()], &calcs);
        assert!(prompt.contains("\"dark energy\""));
        assert!(prompt.contains("Constraints on evolving dark energy"));
        assert!(prompt.contains("2025-01-15T12:00:00+00:00"));
        assert!(prompt.contains("Orbital period at 1 AU: 365.2 days"));
        assert!(prompt.contains("OVERVIEW:"));
        assert!(prompt.contains("FUTURE_WORK:"));
    }

    #[test]
    fn prompt_names_the_empty_cases() {
        let prompt = build_prompt("axions", &[], &[]);
        assert!(prompt.contains("No papers were retrieved for this topic."));
        assert!(prompt.contains("No explicit calculations were performed."));
    }

    #[tokio::test]
    async fn unconfigured_provider_yields_empty_sections() {
        let llm = crate::llm::GeminiClient::new(&crate::config::GeminiConfig::default(), None);
        let (overview, future_work) = synthesize(&llm, "dark energy", &[], &[]).await;
        assert_eq!(overview, "");
        assert_eq!(future_work, "");
    }
}
