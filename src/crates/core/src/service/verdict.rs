//! Typed view over decoded verdict JSON
//!
//! The normalizer hands back whatever JSON the model produced. This module
//! decodes it into [`Verdict`] and checks score ranges, for callers that want
//! the structured scorecard rather than raw JSON.

use factcheck_core_types::{FeedbackOutcome, ScoreSection, Verdict};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const OVERALL_RANGE: (f64, f64) = (0.0, 100.0);
const SECTION_RANGE: (f64, f64) = (0.0, 10.0);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerdictError {
    #[error("verdict does not match the expected shape: {0}")]
    Shape(String),

    #[error("{field} is {value}, expected {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("feedback is not JSON")]
    NotJson,
}

pub fn validate_verdict(value: &Value) -> Result<Verdict, VerdictError> {
    let verdict = Verdict::deserialize(value).map_err(|e| VerdictError::Shape(e.to_string()))?;

    check_range("overallScore", verdict.overall_score, OVERALL_RANGE)?;
    check_section("factCheckScore.score", &verdict.fact_check_score)?;
    check_section("unverifiedScore.score", &verdict.unverified_score)?;
    check_section("nonFactsScore.score", &verdict.non_facts_score)?;

    Ok(verdict)
}

fn check_section(field: &'static str, section: &ScoreSection) -> Result<(), VerdictError> {
    check_range(field, section.score, SECTION_RANGE)
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), VerdictError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(VerdictError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Structured access to a [`FeedbackOutcome`].
pub trait VerdictExt {
    fn verdict(&self) -> Result<Verdict, VerdictError>;
}

impl VerdictExt for FeedbackOutcome {
    fn verdict(&self) -> Result<Verdict, VerdictError> {
        match self {
            FeedbackOutcome::Json(value) => validate_verdict(value),
            _ => Err(VerdictError::NotJson),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "overallScore": 80,
            "factCheckScore": { "score": 7, "comments": ["Quotes match the record"] },
            "unverifiedScore": { "score": 2, "comments": [] },
            "nonFactsScore": { "score": 1, "comments": [] },
            "sources": ["x"]
        })
    }

    #[test]
    fn accepts_well_formed_verdict() {
        let verdict = validate_verdict(&sample()).expect("valid verdict");
        assert_eq!(verdict.overall_score, 80.0);
        assert_eq!(verdict.fact_check_score.comments, vec!["Quotes match the record"]);
        assert_eq!(verdict.sources, vec!["x"]);
    }

    #[test]
    fn flags_out_of_range_scores() {
        let mut value = sample();
        value["unverifiedScore"]["score"] = json!(12);

        assert_eq!(
            validate_verdict(&value),
            Err(VerdictError::OutOfRange {
                field: "unverifiedScore.score",
                value: 12.0,
                min: 0.0,
                max: 10.0,
            })
        );

        let mut value = sample();
        value["overallScore"] = json!(-5);
        assert!(matches!(
            validate_verdict(&value),
            Err(VerdictError::OutOfRange { field: "overallScore", .. })
        ));
    }

    #[test]
    fn reports_shape_problems() {
        let value = json!({ "overallScore": "high" });
        assert!(matches!(validate_verdict(&value), Err(VerdictError::Shape(_))));
    }

    #[test]
    fn only_json_outcomes_have_verdicts() {
        assert!(FeedbackOutcome::Json(sample()).verdict().is_ok());
        assert_eq!(
            FeedbackOutcome::Text("not json".into()).verdict(),
            Err(VerdictError::NotJson)
        );
    }
}
