use factcheck_core_types::FeedbackOutcome;
use factcheck_runtime_ports::ChatResponse;
use serde_json::Value;

/// Turns a chat envelope into a feedback outcome.
///
/// The first content element is trimmed; blank text becomes `NoFeedback`.
/// Text that parses as strict JSON is returned decoded and unvalidated,
/// anything else is returned as trimmed text.
pub fn normalize_response(response: &ChatResponse) -> FeedbackOutcome {
    let text = response.first_text().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return FeedbackOutcome::NoFeedback;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) => FeedbackOutcome::Json(value),
        Err(_) => FeedbackOutcome::Text(text.to_string()),
    }
}
