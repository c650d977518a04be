//! Feedback orchestration
//!
//! One timeout-guarded chat call per headline/snippet pair; long texts are
//! chunked and submitted strictly one chunk after another.

use super::actor::StoreActor;
use crate::infrastructure::ai::{invoke_chat, normalize_response};
use crate::service::prompt::build_prompt;
use crate::service::verdict::validate_verdict;
use crate::util::chunker::chunk_text;
use crate::util::errors::{user_message, FactCheckError};
use factcheck_core_types::FeedbackOutcome;
use factcheck_runtime_ports::{ChatOptions, ImageInput};
use log::{debug, error, info, warn};

const IMAGE_TO_TEXT_FAILED_MESSAGE: &str = "Image to text conversion failed";

impl StoreActor {
    pub(super) async fn feedback(&self, headline: &str, snippet: &str) -> FeedbackOutcome {
        let Some(platform) = self.platform() else {
            return FeedbackOutcome::Unavailable;
        };
        self.state.begin();

        let prompt = build_prompt(headline, snippet);
        debug!("Prompt sent to AI: {}", prompt);

        let options = ChatOptions::new(self.config.model.clone());
        let outcome = match invoke_chat(
            platform.as_ref(),
            &prompt,
            &options,
            self.config.request_timeout(),
        )
        .await
        {
            Ok(response) => {
                debug!("Raw AI response: {:?}", response);
                let outcome = normalize_response(&response);
                match &outcome {
                    FeedbackOutcome::NoFeedback => warn!("AI returned empty response"),
                    FeedbackOutcome::Json(value) => {
                        if let Err(e) = validate_verdict(value) {
                            warn!("AI response is not a valid verdict: error={}", e);
                        }
                    }
                    FeedbackOutcome::Text(_) => {
                        debug!("AI response is not JSON, returning raw text");
                    }
                    _ => {}
                }
                outcome
            }
            Err(e) => {
                error!("AI feedback error: {}", e);
                self.state.fail(user_message(&e, "Unknown AI error"));
                FeedbackOutcome::RequestFailed
            }
        };

        self.state.finish();
        outcome
    }

    pub(super) async fn feedback_long(&self, headline: &str, long_text: &str) -> Vec<FeedbackOutcome> {
        let chunks = chunk_text(long_text, self.config.chunk_max_chars);
        info!("Splitting into {} chunks", chunks.len());

        let mut results = Vec::with_capacity(chunks.len());
        for (idx, chunk) in chunks.iter().enumerate() {
            info!("Processing chunk {}/{}", idx + 1, chunks.len());
            results.push(self.feedback(headline, chunk).await);
        }
        results
    }

    pub(super) async fn img2txt(&self, image: &ImageInput, test_mode: bool) -> Option<String> {
        let platform = self.platform()?;

        match platform.img2txt(image, test_mode).await {
            Ok(response) => Some(response.into_text()),
            Err(e) => {
                let e = FactCheckError::ImageToText(e.to_string());
                error!(
                    "Image to text conversion failed: image={}, error={}",
                    image.describe(),
                    e
                );
                self.state.fail(IMAGE_TO_TEXT_FAILED_MESSAGE);
                None
            }
        }
    }
}
