//! Platform slot and accessor
//!
//! The host injects its capability handle into a [`PlatformSlot`]. Core
//! components never hold the handle directly; they ask a [`PlatformAccessor`],
//! which resolves the slot lazily and caches the first handle it sees.

use factcheck_runtime_ports::Platform;
use log::info;
use std::sync::{Arc, OnceLock, RwLock};
use tokio::sync::Notify;

/// Well-known slot the host places its platform handle into.
pub struct PlatformSlot {
    handle: RwLock<Option<Arc<dyn Platform>>>,
    injected: Notify,
}

impl PlatformSlot {
    pub fn new() -> Self {
        Self {
            handle: RwLock::new(None),
            injected: Notify::new(),
        }
    }

    /// Places `platform` into the slot and wakes anyone waiting for it.
    pub fn inject(&self, platform: Arc<dyn Platform>) {
        info!("Platform injected: name={}", platform.name());
        match self.handle.write() {
            Ok(mut guard) => *guard = Some(platform),
            Err(poisoned) => *poisoned.into_inner() = Some(platform),
        }
        self.injected.notify_waiters();
    }

    pub fn current(&self) -> Option<Arc<dyn Platform>> {
        match self.handle.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Resolves on the next call to [`PlatformSlot::inject`].
    pub async fn wait_injected(&self) {
        self.injected.notified().await;
    }
}

impl Default for PlatformSlot {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_PLATFORM_SLOT: OnceLock<Arc<PlatformSlot>> = OnceLock::new();

pub fn global_platform_slot() -> Arc<PlatformSlot> {
    GLOBAL_PLATFORM_SLOT
        .get_or_init(|| Arc::new(PlatformSlot::new()))
        .clone()
}

/// Lazy, caching view of a [`PlatformSlot`].
///
/// Absence is a normal state: `get` returns `None` and never panics.
#[derive(Clone)]
pub struct PlatformAccessor {
    slot: Arc<PlatformSlot>,
    cached: Arc<OnceLock<Arc<dyn Platform>>>,
}

impl PlatformAccessor {
    pub fn new(slot: Arc<PlatformSlot>) -> Self {
        Self {
            slot,
            cached: Arc::new(OnceLock::new()),
        }
    }

    /// Accessor over the process-wide slot.
    pub fn global() -> Self {
        Self::new(global_platform_slot())
    }

    pub fn get(&self) -> Option<Arc<dyn Platform>> {
        if let Some(platform) = self.cached.get() {
            return Some(platform.clone());
        }
        let platform = self.slot.current()?;
        Some(self.cached.get_or_init(|| platform).clone())
    }

    pub fn slot(&self) -> &Arc<PlatformSlot> {
        &self.slot
    }
}
