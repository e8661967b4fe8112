//! AI service integration for invitation text and party imagery
//!
//! Chat completions come from an OpenAI-compatible API; images come from a
//! local diffusion inference service. Both sit behind traits so the pipeline
//! can run against mocks.

pub mod diffusion;
pub mod mock;
pub mod openai;

pub use diffusion::DiffusionImageClient;
pub use mock::{MockChatClient, MockImageGenerationClient};
pub use openai::OpenAiChatClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send one system + user exchange and return the assistant's reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Render a single image for `prompt`, returned as encoded image bytes.
    async fn generate_image(&self, prompt: &str) -> Result<Vec<u8>>;
}
