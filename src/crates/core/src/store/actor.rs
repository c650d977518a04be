use super::state::StateWriter;
use crate::infrastructure::platform::PlatformAccessor;
use crate::service::config::FactCheckConfig;
use factcheck_core_types::{FeedbackOutcome, StoreSnapshot};
use factcheck_runtime_ports::{ImageInput, Platform};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

pub(crate) enum StoreCommand {
    Init,
    /// Sent by the init wait task once the platform resolves.
    PlatformReady {
        platform: Arc<dyn Platform>,
    },
    /// Sent by the init wait task when the ceiling is reached.
    InitTimedOut {
        ceiling: Duration,
    },
    ClearError,
    Settle {
        reply: oneshot::Sender<StoreSnapshot>,
    },
    CheckAuthStatus {
        reply: oneshot::Sender<()>,
    },
    SignIn {
        reply: oneshot::Sender<()>,
    },
    SignOut {
        reply: oneshot::Sender<()>,
    },
    Feedback {
        headline: String,
        snippet: String,
        reply: oneshot::Sender<FeedbackOutcome>,
    },
    FeedbackLong {
        headline: String,
        long_text: String,
        reply: oneshot::Sender<Vec<FeedbackOutcome>>,
    },
    Img2Txt {
        image: ImageInput,
        test_mode: bool,
        reply: oneshot::Sender<Option<String>>,
    },
}

impl StoreCommand {
    fn name(&self) -> &'static str {
        match self {
            StoreCommand::Init => "init",
            StoreCommand::PlatformReady { .. } => "platform_ready",
            StoreCommand::InitTimedOut { .. } => "init_timed_out",
            StoreCommand::ClearError => "clear_error",
            StoreCommand::Settle { .. } => "settle",
            StoreCommand::CheckAuthStatus { .. } => "check_auth_status",
            StoreCommand::SignIn { .. } => "sign_in",
            StoreCommand::SignOut { .. } => "sign_out",
            StoreCommand::Feedback { .. } => "feedback",
            StoreCommand::FeedbackLong { .. } => "feedback_long",
            StoreCommand::Img2Txt { .. } => "img2txt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum InitPhase {
    Idle,
    Waiting,
    Done,
}

/// Owns all store state and runs one command at a time, each to completion.
pub(crate) struct StoreActor {
    pub(super) accessor: PlatformAccessor,
    pub(super) config: FactCheckConfig,
    pub(super) state: StateWriter,
    /// Handle the init wait task reports back through. Weak, so the actor
    /// still stops once every `Store` is dropped.
    pub(super) commands: mpsc::WeakUnboundedSender<StoreCommand>,
    pub(super) init: InitPhase,
    /// `Settle` replies held back until a pending init resolves.
    pub(super) deferred_settles: Vec<oneshot::Sender<StoreSnapshot>>,
}

impl StoreActor {
    pub(crate) fn new(
        accessor: PlatformAccessor,
        config: FactCheckConfig,
        state: StateWriter,
        commands: mpsc::WeakUnboundedSender<StoreCommand>,
    ) -> Self {
        Self {
            accessor,
            config,
            state,
            commands,
            init: InitPhase::Idle,
            deferred_settles: Vec::new(),
        }
    }

    pub(crate) async fn run(mut self, mut rx: mpsc::UnboundedReceiver<StoreCommand>) {
        while let Some(command) = rx.recv().await {
            debug!("Store command received: command={}", command.name());
            self.handle(command).await;
        }
        debug!("Store actor stopped: all handles dropped");
    }

    async fn handle(&mut self, command: StoreCommand) {
        match command {
            StoreCommand::Init => self.initialize(),
            StoreCommand::PlatformReady { platform } => self.platform_ready(platform).await,
            StoreCommand::InitTimedOut { ceiling } => self.init_timed_out(ceiling),
            StoreCommand::ClearError => self.state.clear_error(),
            StoreCommand::Settle { reply } => {
                if self.init == InitPhase::Waiting {
                    self.deferred_settles.push(reply);
                } else {
                    let _ = reply.send(self.state.snapshot());
                }
            }
            StoreCommand::CheckAuthStatus { reply } => {
                self.check_auth_status().await;
                let _ = reply.send(());
            }
            StoreCommand::SignIn { reply } => {
                self.sign_in().await;
                let _ = reply.send(());
            }
            StoreCommand::SignOut { reply } => {
                self.sign_out().await;
                let _ = reply.send(());
            }
            StoreCommand::Feedback {
                headline,
                snippet,
                reply,
            } => {
                let outcome = self.feedback(&headline, &snippet).await;
                let _ = reply.send(outcome);
            }
            StoreCommand::FeedbackLong {
                headline,
                long_text,
                reply,
            } => {
                let outcomes = self.feedback_long(&headline, &long_text).await;
                let _ = reply.send(outcomes);
            }
            StoreCommand::Img2Txt {
                image,
                test_mode,
                reply,
            } => {
                let text = self.img2txt(&image, test_mode).await;
                let _ = reply.send(text);
            }
        }
    }

    /// Resolves the platform, recording the unavailable error when absent.
    pub(super) fn platform(&self) -> Option<Arc<dyn Platform>> {
        let platform = self.accessor.get();
        if platform.is_none() {
            debug!("Platform not available");
            self.state.report_unavailable();
        }
        platform
    }
}
