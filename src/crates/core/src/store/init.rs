use super::actor::{InitPhase, StoreActor, StoreCommand};
use crate::infrastructure::platform::PlatformAccessor;
use factcheck_runtime_ports::Platform;
use log::{debug, error, info};
use std::sync::Arc;
use std::time::Duration;

impl StoreActor {
    /// Starts waiting for the platform. Runs once per store; repeated calls
    /// are ignored.
    ///
    /// The wait happens in its own task so other commands keep running; its
    /// result comes back as `PlatformReady` or `InitTimedOut`.
    pub(super) fn initialize(&mut self) {
        if self.init != InitPhase::Idle {
            debug!("Store init already ran, ignoring");
            return;
        }
        self.init = InitPhase::Waiting;
        self.state.set_loading(true);

        let accessor = self.accessor.clone();
        let commands = self.commands.clone();
        let poll_interval = self.config.init_poll_interval();
        let ceiling = self.config.init_timeout();

        tokio::spawn(async move {
            let command =
                match tokio::time::timeout(ceiling, wait_for_platform(&accessor, poll_interval))
                    .await
                {
                    Ok(platform) => StoreCommand::PlatformReady { platform },
                    Err(_) => StoreCommand::InitTimedOut { ceiling },
                };

            match commands.upgrade() {
                Some(tx) => {
                    let _ = tx.send(command);
                }
                None => debug!("Store dropped before init finished"),
            }
        });
    }

    pub(super) async fn platform_ready(&mut self, platform: Arc<dyn Platform>) {
        self.state.mark_ready();
        info!("Platform is ready: name={}", platform.name());
        self.check_auth_status().await;
        self.finish_init();
    }

    pub(super) fn init_timed_out(&mut self, ceiling: Duration) {
        let message = format!(
            "Platform failed to load within {} seconds",
            ceiling.as_secs()
        );
        error!("{}", message);
        self.state.fail(message);
        self.finish_init();
    }

    fn finish_init(&mut self) {
        self.init = InitPhase::Done;
        let snapshot = self.state.snapshot();
        for reply in self.deferred_settles.drain(..) {
            let _ = reply.send(snapshot.clone());
        }
    }
}

/// Re-checks the slot every poll interval and on every injection.
async fn wait_for_platform(accessor: &PlatformAccessor, poll_interval: Duration) -> Arc<dyn Platform> {
    loop {
        if let Some(platform) = accessor.get() {
            return platform;
        }
        tokio::select! {
            _ = accessor.slot().wait_injected() => {}
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }
}
