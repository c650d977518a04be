// Factcheck Core Library - request orchestration for AI fact-check verdicts
// Four-layer architecture: Util -> Infrastructure -> Service -> Store

pub mod infrastructure; // Infrastructure layer - platform access, timeout-guarded chat, response normalization
pub mod service; // Service layer - config, prompt building, verdict validation
pub mod store; // Store layer - single-writer state actor, auth facade, feedback orchestration
pub mod util; // Utility layer - errors, text chunking

// Export main types
pub use util::errors::*;

pub use infrastructure::{
    ai::{invoke_chat, normalize_response},
    platform::{global_platform_slot, PlatformAccessor, PlatformSlot},
};
pub use service::{
    config::FactCheckConfig,
    prompt::build_prompt,
    verdict::{validate_verdict, VerdictError, VerdictExt},
};
pub use store::Store;
pub use util::chunker::{chunk_text, DEFAULT_CHUNK_MAX_CHARS};

pub use factcheck_core_types::{FeedbackOutcome, ScoreSection, Session, StoreSnapshot, Verdict};
pub use factcheck_runtime_ports as ports;
