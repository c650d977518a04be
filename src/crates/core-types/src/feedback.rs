use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const NO_FEEDBACK_SENTINEL: &str = "No feedback available";
pub const REQUEST_FAILED_SENTINEL: &str = "AI request failed";

/// Result of a single fact-check request.
///
/// Decoded JSON is carried verbatim; it is not guaranteed to match the
/// [`crate::Verdict`] shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    /// The model text decoded as JSON.
    Json(Value),
    /// The model text was not JSON; trimmed text is kept as-is.
    Text(String),
    /// The model returned no usable text.
    NoFeedback,
    /// The chat call failed or timed out. The reason is in the store error.
    RequestFailed,
    /// No platform was available, nothing was sent.
    Unavailable,
}

impl FeedbackOutcome {
    /// Fixed fallback string for the sentinel variants.
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            FeedbackOutcome::NoFeedback => Some(NO_FEEDBACK_SENTINEL),
            FeedbackOutcome::RequestFailed => Some(REQUEST_FAILED_SENTINEL),
            _ => None,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, FeedbackOutcome::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            FeedbackOutcome::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for FeedbackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackOutcome::Json(value) => write!(f, "{}", value),
            FeedbackOutcome::Text(text) => f.write_str(text),
            FeedbackOutcome::NoFeedback => f.write_str(NO_FEEDBACK_SENTINEL),
            FeedbackOutcome::RequestFailed => f.write_str(REQUEST_FAILED_SENTINEL),
            FeedbackOutcome::Unavailable => f.write_str("undefined"),
        }
    }
}
