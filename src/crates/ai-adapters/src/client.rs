//! Reqwest-backed platform.

use crate::config::HttpPlatformConfig;
use crate::types::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ImageUrl, RequestContent,
    RequestPart,
};
use async_trait::async_trait;
use base64::Engine;
use factcheck_runtime_ports::{
    AiPort, AuthPort, CancellationToken, ChatOptions, ChatResponse, ImageInput, Img2TxtResponse,
    Platform, PortError, PortResult,
};
use log::{debug, info, warn};
use serde_json::{json, Value};
use std::sync::RwLock;
use std::time::Duration;

const OCR_INSTRUCTION: &str =
    "Transcribe all text visible in this image verbatim. Return only the transcribed text.";

/// Fixed transcription returned in test mode without touching the network.
pub const TEST_MODE_TRANSCRIPTION: &str =
    "Local council approves new bike lanes downtown after a 5-2 vote on Tuesday.";

pub struct HttpPlatform {
    client: reqwest::Client,
    config: HttpPlatformConfig,
    session: RwLock<Option<Value>>,
}

impl HttpPlatform {
    pub fn new(config: HttpPlatformConfig) -> PortResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| PortError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            session: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn api_key(&self) -> PortResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PortError::Auth("No API key configured".to_string()))
    }

    fn key_hint(key: &str) -> String {
        let tail: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }

    async fn complete(&self, request: &ChatCompletionRequest<'_>) -> PortResult<ChatResponse> {
        let key = self.api_key()?;
        let response = self
            .client
            .post(self.endpoint("chat/completions"))
            .bearer_auth(key)
            .json(request)
            .send()
            .await
            .map_err(|e| PortError::Request(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PortError::Request(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(PortError::Request(api_error_message(status, &body)));
        }

        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| PortError::Request(format!("Invalid response JSON: {}", e)))?;
        let parsed = serde_json::from_value::<ChatCompletionResponse>(raw.clone()).ok();

        match parsed.and_then(|p| p.choices.into_iter().next()) {
            Some(choice) => Ok(ChatResponse::Message {
                message: choice.message,
            }),
            None => {
                warn!("Chat completion returned no choices");
                Ok(ChatResponse::Unrecognized(raw))
            }
        }
    }
}

fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body.trim()))
}

#[async_trait]
impl AuthPort for HttpPlatform {
    async fn is_signed_in(&self) -> PortResult<bool> {
        let session = self
            .session
            .read()
            .map_err(|_| PortError::Other("Session lock poisoned".to_string()))?;
        Ok(session.is_some())
    }

    async fn get_user(&self) -> PortResult<Value> {
        let session = self
            .session
            .read()
            .map_err(|_| PortError::Other("Session lock poisoned".to_string()))?;
        Ok(session.clone().unwrap_or(Value::Null))
    }

    async fn sign_in(&self) -> PortResult<()> {
        let key = self.api_key()?;
        let response = self
            .client
            .get(self.endpoint("models"))
            .bearer_auth(key)
            .send()
            .await
            .map_err(|e| PortError::Auth(format!("Sign in request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PortError::Auth(api_error_message(status, &body)));
        }

        let user = json!({
            "provider": self.config.base_url,
            "keyHint": Self::key_hint(key),
        });
        *self
            .session
            .write()
            .map_err(|_| PortError::Other("Session lock poisoned".to_string()))? = Some(user);
        info!("Signed in: provider={}", self.config.base_url);
        Ok(())
    }

    async fn sign_out(&self) -> PortResult<()> {
        *self
            .session
            .write()
            .map_err(|_| PortError::Other("Session lock poisoned".to_string()))? = None;
        info!("Signed out");
        Ok(())
    }
}

#[async_trait]
impl AiPort for HttpPlatform {
    async fn chat(
        &self,
        prompt: &str,
        options: &ChatOptions,
        cancel: CancellationToken,
    ) -> PortResult<ChatResponse> {
        debug!(
            "Chat request: model={}, prompt_len={}",
            options.model,
            prompt.len()
        );
        let request = ChatCompletionRequest::user(&options.model, RequestContent::Text(prompt));

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Chat request cancelled");
                Err(PortError::Cancelled)
            }
            result = self.complete(&request) => result,
        }
    }

    async fn img2txt(&self, image: &ImageInput, test_mode: bool) -> PortResult<Img2TxtResponse> {
        if test_mode {
            debug!("Image to text in test mode: {}", image.describe());
            return Ok(Img2TxtResponse::structured(TEST_MODE_TRANSCRIPTION));
        }

        let url = match image {
            ImageInput::Url(url) => url.clone(),
            ImageInput::Bytes { data, mime_type } => format!(
                "data:{};base64,{}",
                mime_type,
                base64::engine::general_purpose::STANDARD.encode(data)
            ),
        };
        let request = ChatCompletionRequest::user(
            &self.config.vision_model,
            RequestContent::Parts(vec![
                RequestPart::Text {
                    text: OCR_INSTRUCTION.to_string(),
                },
                RequestPart::ImageUrl {
                    image_url: ImageUrl { url },
                },
            ]),
        );

        let response = self.complete(&request).await?;
        match response.first_text() {
            Some(text) => Ok(Img2TxtResponse::structured(text)),
            None => Err(PortError::Request(
                "Vision model returned no text".to_string(),
            )),
        }
    }
}

impl Platform for HttpPlatform {
    fn name(&self) -> &str {
        "http"
    }
}
