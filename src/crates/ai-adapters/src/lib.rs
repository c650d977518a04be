//! HTTP platform adapter
//!
//! Implements the platform capability contract on top of an
//! OpenAI-compatible REST API:
//! - auth is an API-key session verified against `GET /models`
//! - chat and image-to-text go through `POST /chat/completions`

pub mod client;
pub mod config;
mod types;

pub use client::HttpPlatform;
pub use config::HttpPlatformConfig;
