/// Factcheck Runtime Ports
///
/// The capability contract a host platform must provide to the core:
/// - auth: session query, sign-in, sign-out
/// - ai: chat completion, image-to-text
pub mod chat;
pub mod error;
pub mod image;
pub mod platform;

pub use chat::{ChatMessage, ChatOptions, ChatResponse, ContentPart, MessageContent};
pub use error::{PortError, PortResult};
pub use image::{ImageInput, Img2TxtResponse};
pub use platform::{AiPort, AuthPort, Platform};

pub use tokio_util::sync::CancellationToken;
