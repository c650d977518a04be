use crate::infrastructure::ai::{DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT};
use crate::util::chunker::DEFAULT_CHUNK_MAX_CHARS;
use crate::util::errors::{FactCheckError, FactCheckResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_INIT_POLL_INTERVAL_MS: u64 = 100;
const DEFAULT_INIT_TIMEOUT_MS: u64 = 10_000;

/// Tunables of the orchestration core. Every field has a default, so a
/// partial `[core]` table in a config file is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactCheckConfig {
    /// Model identifier passed with every chat call.
    pub model: String,
    pub request_timeout_ms: u64,
    pub chunk_max_chars: usize,
    pub init_poll_interval_ms: u64,
    pub init_timeout_ms: u64,
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT.as_millis() as u64,
            chunk_max_chars: DEFAULT_CHUNK_MAX_CHARS,
            init_poll_interval_ms: DEFAULT_INIT_POLL_INTERVAL_MS,
            init_timeout_ms: DEFAULT_INIT_TIMEOUT_MS,
        }
    }
}

impl FactCheckConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn init_poll_interval(&self) -> Duration {
        Duration::from_millis(self.init_poll_interval_ms)
    }

    pub fn init_timeout(&self) -> Duration {
        Duration::from_millis(self.init_timeout_ms)
    }

    pub fn validate(&self) -> FactCheckResult<()> {
        if self.model.trim().is_empty() {
            return Err(FactCheckError::Config("model must not be empty".to_string()));
        }
        if self.request_timeout_ms == 0 {
            return Err(FactCheckError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.chunk_max_chars == 0 {
            return Err(FactCheckError::Config(
                "chunk_max_chars must be greater than zero".to_string(),
            ));
        }
        if self.init_poll_interval_ms == 0 || self.init_poll_interval_ms > self.init_timeout_ms {
            return Err(FactCheckError::Config(format!(
                "init_poll_interval_ms must be in 1..={}",
                self.init_timeout_ms
            )));
        }
        Ok(())
    }
}
