#![allow(dead_code)]

use async_trait::async_trait;
use factcheck_core::ports::{
    AiPort, AuthPort, CancellationToken, ChatOptions, ChatResponse, ImageInput, Img2TxtResponse,
    Platform, PortError, PortResult,
};
use factcheck_core::{FactCheckConfig, PlatformAccessor, PlatformSlot, Store};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const VERDICT_TEXT: &str = r#"{"overallScore":80,"factCheckScore":{"score":7,"comments":[]},"unverifiedScore":{"score":2,"comments":[]},"nonFactsScore":{"score":1,"comments":[]},"sources":["x"]}"#;

/// What the mock does for one chat call.
#[derive(Clone)]
pub enum ChatStep {
    Reply(ChatResponse),
    Fail(String),
    /// Replies after the given delay.
    Delayed(Duration, ChatResponse),
    /// Never settles.
    Hang,
}

impl ChatStep {
    pub fn text(text: &str) -> Self {
        ChatStep::Reply(ChatResponse::Content {
            content: factcheck_core::ports::MessageContent::Parts(vec![
                factcheck_core::ports::ContentPart::Text(text.to_string()),
            ]),
        })
    }
}

#[derive(Default)]
struct MockState {
    signed_in: bool,
    sign_in_error: Option<String>,
    sign_out_error: Option<String>,
    status_error: Option<String>,
    chat_script: VecDeque<ChatStep>,
    prompts: Vec<String>,
    models: Vec<String>,
    cancel_tokens: Vec<CancellationToken>,
    img2txt: Option<Result<Img2TxtResponse, String>>,
}

/// Scripted in-memory platform.
#[derive(Default)]
pub struct MockPlatform {
    state: Mutex<MockState>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    status_checks: AtomicUsize,
}

impl MockPlatform {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn signed_in() -> Arc<Self> {
        let platform = Self::default();
        platform.state.lock().unwrap().signed_in = true;
        Arc::new(platform)
    }

    pub fn script(&self, steps: impl IntoIterator<Item = ChatStep>) {
        self.state.lock().unwrap().chat_script.extend(steps);
    }

    pub fn fail_sign_in(&self, message: &str) {
        self.state.lock().unwrap().sign_in_error = Some(message.to_string());
    }

    pub fn fail_sign_out(&self, message: &str) {
        self.state.lock().unwrap().sign_out_error = Some(message.to_string());
    }

    pub fn fail_status(&self, message: &str) {
        self.state.lock().unwrap().status_error = Some(message.to_string());
    }

    pub fn set_img2txt(&self, result: Result<Img2TxtResponse, String>) {
        self.state.lock().unwrap().img2txt = Some(result);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state.lock().unwrap().prompts.clone()
    }

    pub fn models(&self) -> Vec<String> {
        self.state.lock().unwrap().models.clone()
    }

    pub fn cancel_tokens(&self) -> Vec<CancellationToken> {
        self.state.lock().unwrap().cancel_tokens.clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn status_checks(&self) -> usize {
        self.status_checks.load(Ordering::SeqCst)
    }

    pub fn user() -> Value {
        json!({ "username": "reader", "uuid": "u-1" })
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl AuthPort for MockPlatform {
    async fn is_signed_in(&self) -> PortResult<bool> {
        self.status_checks.fetch_add(1, Ordering::SeqCst);
        let state = self.state.lock().unwrap();
        match &state.status_error {
            Some(message) => Err(PortError::Auth(message.clone())),
            None => Ok(state.signed_in),
        }
    }

    async fn get_user(&self) -> PortResult<Value> {
        Ok(Self::user())
    }

    async fn sign_in(&self) -> PortResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.sign_in_error {
            return Err(PortError::Auth(message.clone()));
        }
        state.signed_in = true;
        Ok(())
    }

    async fn sign_out(&self) -> PortResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = &state.sign_out_error {
            return Err(PortError::Auth(message.clone()));
        }
        state.signed_in = false;
        Ok(())
    }
}

#[async_trait]
impl AiPort for MockPlatform {
    async fn chat(
        &self,
        prompt: &str,
        options: &ChatOptions,
        cancel: CancellationToken,
    ) -> PortResult<ChatResponse> {
        let step = {
            let mut state = self.state.lock().unwrap();
            state.prompts.push(prompt.to_string());
            state.models.push(options.model.clone());
            state.cancel_tokens.push(cancel);
            state
                .chat_script
                .pop_front()
                .unwrap_or_else(|| ChatStep::text(VERDICT_TEXT))
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        match step {
            ChatStep::Reply(response) => Ok(response),
            ChatStep::Fail(message) => Err(PortError::Request(message)),
            ChatStep::Delayed(delay, response) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            ChatStep::Hang => std::future::pending().await,
        }
    }

    async fn img2txt(&self, _image: &ImageInput, _test_mode: bool) -> PortResult<Img2TxtResponse> {
        let result = self.state.lock().unwrap().img2txt.clone();
        match result {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(PortError::Request(message)),
            None => Ok(Img2TxtResponse::structured("scanned text")),
        }
    }
}

impl Platform for MockPlatform {
    fn name(&self) -> &str {
        "mock"
    }
}

/// Store over a private slot that already holds `platform`.
pub fn store_with(platform: Arc<MockPlatform>) -> Store {
    let slot = Arc::new(PlatformSlot::new());
    slot.inject(platform);
    Store::new(PlatformAccessor::new(slot), FactCheckConfig::default())
}

/// Store over an empty private slot.
pub fn store_without_platform() -> (Store, Arc<PlatformSlot>) {
    let slot = Arc::new(PlatformSlot::new());
    let store = Store::new(PlatformAccessor::new(slot.clone()), FactCheckConfig::default());
    (store, slot)
}
