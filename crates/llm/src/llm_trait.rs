use crate::types::ChatRequest;
use async_trait::async_trait;
use keyfacts_common::Result;

/// Common trait for chat-completion backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a completion request and return the generated text
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}
