//! AI call plumbing: the timeout-guarded chat call and response normalization

pub mod invoker;
pub mod normalizer;

pub use invoker::{invoke_chat, DEFAULT_MODEL, DEFAULT_REQUEST_TIMEOUT};
pub use normalizer::normalize_response;
