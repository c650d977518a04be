use crate::util::errors::FactCheckError;
use factcheck_core_types::{Session, StoreSnapshot};
use tokio::sync::watch;

/// The only writer of store state. Owned by the store actor; every mutation
/// is published to subscribers immediately.
pub(crate) struct StateWriter {
    tx: watch::Sender<StoreSnapshot>,
}

impl StateWriter {
    pub(crate) fn new() -> (Self, watch::Receiver<StoreSnapshot>) {
        let (tx, rx) = watch::channel(StoreSnapshot::default());
        (Self { tx }, rx)
    }

    /// Operation start: loading on, stale error cleared.
    pub(crate) fn begin(&self) {
        self.tx.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    pub(crate) fn finish(&self) {
        self.tx.send_modify(|state| state.is_loading = false);
    }

    pub(crate) fn set_loading(&self, is_loading: bool) {
        self.tx.send_modify(|state| state.is_loading = is_loading);
    }

    /// Records a failure and ends loading.
    pub(crate) fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|state| {
            state.error = Some(message);
            state.is_loading = false;
        });
    }

    /// Platform absent: only the error changes.
    pub(crate) fn report_unavailable(&self) {
        let message = FactCheckError::PlatformUnavailable.to_string();
        self.tx.send_modify(|state| state.error = Some(message));
    }

    pub(crate) fn set_session(&self, session: Session) {
        self.tx.send_modify(|state| {
            state.auth = session;
            state.is_loading = false;
        });
    }

    pub(crate) fn mark_ready(&self) {
        self.tx.send_modify(|state| {
            state.platform_ready = true;
            state.is_loading = false;
        });
    }

    pub(crate) fn clear_error(&self) {
        self.tx.send_if_modified(|state| state.error.take().is_some());
    }

    pub(crate) fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }
}
