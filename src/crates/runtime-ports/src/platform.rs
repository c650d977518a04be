use crate::chat::{ChatOptions, ChatResponse};
use crate::error::PortResult;
use crate::image::{ImageInput, Img2TxtResponse};
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Identity provider operations.
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn is_signed_in(&self) -> PortResult<bool>;

    /// Opaque identity of the signed-in user.
    async fn get_user(&self) -> PortResult<Value>;

    async fn sign_in(&self) -> PortResult<()>;

    async fn sign_out(&self) -> PortResult<()>;
}

/// AI operations.
#[async_trait]
pub trait AiPort: Send + Sync {
    /// Single chat completion.
    ///
    /// Implementations should stop work once `cancel` fires; the caller has
    /// already stopped waiting at that point.
    async fn chat(
        &self,
        prompt: &str,
        options: &ChatOptions,
        cancel: CancellationToken,
    ) -> PortResult<ChatResponse>;

    async fn img2txt(&self, image: &ImageInput, test_mode: bool) -> PortResult<Img2TxtResponse>;
}

/// Capability handle injected by the host.
pub trait Platform: AuthPort + AiPort {
    fn name(&self) -> &str {
        "platform"
    }
}
