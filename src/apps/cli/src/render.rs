use factcheck_core::{FeedbackOutcome, ScoreSection, Verdict, VerdictExt};
use std::fmt::Write;

/// Scorecard when the outcome validates as a verdict, otherwise the raw
/// JSON or text.
pub fn render_outcome(outcome: &FeedbackOutcome) -> String {
    if let Ok(verdict) = outcome.verdict() {
        return render_verdict(&verdict);
    }
    match outcome {
        FeedbackOutcome::Json(value) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

pub fn render_verdict(verdict: &Verdict) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Overall score: {}/100", verdict.overall_score);
    render_section(&mut out, "Fact check", &verdict.fact_check_score);
    render_section(&mut out, "Unverified claims", &verdict.unverified_score);
    render_section(&mut out, "Non-facts", &verdict.non_facts_score);

    if !verdict.sources.is_empty() {
        out.push_str("Sources:\n");
        for source in &verdict.sources {
            let _ = writeln!(out, "  - {}", source);
        }
    }
    out.trim_end().to_string()
}

fn render_section(out: &mut String, title: &str, section: &ScoreSection) {
    let _ = writeln!(out, "{}: {}/10", title, section.score);
    for comment in &section.comments {
        let _ = writeln!(out, "  - {}", comment);
    }
}
