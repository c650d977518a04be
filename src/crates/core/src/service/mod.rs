//! Service layer
//!
//! Configuration, prompt rendering and verdict validation.

pub mod config;
pub mod prompt;
pub mod verdict;

pub use config::FactCheckConfig;
pub use prompt::build_prompt;
pub use verdict::{validate_verdict, VerdictError, VerdictExt};
