//! Store - the single observable unit consumed by presentation code
//!
//! [`Store`] is a cheap, cloneable handle. All state lives in one actor task
//! that processes commands in arrival order, one at a time, so overlapping
//! callers never interleave their mutations. State is published through a
//! `watch` channel after every change.
//!
//! No operation returns an error: failures are recorded in
//! [`StoreSnapshot::error`] and signalled through the returned value.

mod actor;
mod auth;
mod feedback;
mod init;
mod state;

use crate::infrastructure::platform::PlatformAccessor;
use crate::service::config::FactCheckConfig;
use crate::util::errors::FactCheckError;
use actor::{StoreActor, StoreCommand};
use factcheck_core_types::{FeedbackOutcome, StoreSnapshot};
use factcheck_runtime_ports::ImageInput;
use log::warn;
use state::StateWriter;
use tokio::sync::{mpsc, oneshot, watch};

#[derive(Clone)]
pub struct Store {
    commands: mpsc::UnboundedSender<StoreCommand>,
    snapshot: watch::Receiver<StoreSnapshot>,
}

impl Store {
    /// Spawns the store actor on the current tokio runtime.
    pub fn new(accessor: PlatformAccessor, config: FactCheckConfig) -> Self {
        let (state, snapshot) = StateWriter::new();
        let (commands, rx) = mpsc::unbounded_channel();

        let actor = StoreActor::new(accessor, config, state, commands.downgrade());
        tokio::spawn(actor.run(rx));

        Self { commands, snapshot }
    }

    /// Store over the process-wide platform slot with default settings.
    pub fn with_global_platform() -> Self {
        Self::new(PlatformAccessor::global(), FactCheckConfig::default())
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshot.clone()
    }

    /// Starts waiting for the platform in the background. Other commands are
    /// not held up by the wait.
    pub fn init(&self) {
        self.send(StoreCommand::Init);
    }

    pub fn clear_error(&self) {
        self.send(StoreCommand::ClearError);
    }

    /// Snapshot taken after every previously issued command has finished,
    /// including a pending init.
    pub async fn settled(&self) -> StoreSnapshot {
        self.request(|reply| StoreCommand::Settle { reply })
            .await
            .unwrap_or_else(|| self.snapshot())
    }

    pub async fn check_auth_status(&self) {
        self.request(|reply| StoreCommand::CheckAuthStatus { reply })
            .await;
    }

    pub async fn sign_in(&self) {
        self.request(|reply| StoreCommand::SignIn { reply }).await;
    }

    pub async fn sign_out(&self) {
        self.request(|reply| StoreCommand::SignOut { reply }).await;
    }

    pub async fn feedback(&self, headline: &str, snippet: &str) -> FeedbackOutcome {
        self.request(|reply| StoreCommand::Feedback {
            headline: headline.to_string(),
            snippet: snippet.to_string(),
            reply,
        })
        .await
        .unwrap_or(FeedbackOutcome::Unavailable)
    }

    /// One outcome per chunk, in chunk order.
    pub async fn feedback_long(&self, headline: &str, long_text: &str) -> Vec<FeedbackOutcome> {
        self.request(|reply| StoreCommand::FeedbackLong {
            headline: headline.to_string(),
            long_text: long_text.to_string(),
            reply,
        })
        .await
        .unwrap_or_default()
    }

    pub async fn img2txt(&self, image: ImageInput, test_mode: bool) -> Option<String> {
        self.request(|reply| StoreCommand::Img2Txt {
            image,
            test_mode,
            reply,
        })
        .await
        .flatten()
    }

    fn send(&self, command: StoreCommand) {
        if self.commands.send(command).is_err() {
            warn!("{}", FactCheckError::StoreClosed);
        }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> StoreCommand) -> Option<T> {
        let (tx, rx) = oneshot::channel();
        if self.commands.send(build(tx)).is_err() {
            warn!("{}", FactCheckError::StoreClosed);
            return None;
        }
        rx.await.ok()
    }
}
