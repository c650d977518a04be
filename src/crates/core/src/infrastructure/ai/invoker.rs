use crate::util::errors::{FactCheckError, FactCheckResult};
use factcheck_runtime_ports::{ChatOptions, ChatResponse, Platform};
use log::{debug, warn};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const DEFAULT_MODEL: &str = "gpt-5-2025-08-07";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Runs one chat completion against `deadline`.
///
/// When the deadline wins, the in-flight call is dropped and its cancellation
/// token is fired so the platform can abort the underlying request. No retry
/// is attempted either way.
pub async fn invoke_chat(
    platform: &dyn Platform,
    prompt: &str,
    options: &ChatOptions,
    deadline: Duration,
) -> FactCheckResult<ChatResponse> {
    let cancel = CancellationToken::new();
    debug!(
        "Invoking chat: model={}, deadline_ms={}",
        options.model,
        deadline.as_millis()
    );

    match tokio::time::timeout(deadline, platform.chat(prompt, options, cancel.clone())).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(e)) => Err(FactCheckError::AiRequest(e.to_string())),
        Err(_) => {
            cancel.cancel();
            warn!(
                "Chat request timed out: model={}, deadline_ms={}",
                options.model,
                deadline.as_millis()
            );
            Err(FactCheckError::Timeout(deadline))
        }
    }
}
