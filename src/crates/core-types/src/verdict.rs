use serde::{Deserialize, Serialize};

/// One scored dimension of a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSection {
    /// 0-10
    pub score: f64,
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Structured fact-check scorecard the model is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// 0-100
    pub overall_score: f64,
    pub fact_check_score: ScoreSection,
    pub unverified_score: ScoreSection,
    pub non_facts_score: ScoreSection,
    #[serde(default)]
    pub sources: Vec<String>,
}
