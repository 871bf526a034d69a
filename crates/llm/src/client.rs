use async_trait::async_trait;
use keyfacts_common::Result;
use reqwest::Client;
use tracing::{debug, info};

use crate::llm_trait::TextGenerator;
use crate::types::{ChatRequest, ChatResponse};

/// Chat-completions API client (Perplexity-compatible)
#[derive(Debug, Clone)]
pub struct PerplexityClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl PerplexityClient {
    /// Create new client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Chat-completions client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    /// Run a completion request, single attempt
    pub async fn chat(&self, request: ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending chat request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Chat API error: {}", e))?;

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        match result.content() {
            Some(content) => {
                debug!("Received completion - Length: {}", content.len());
                Ok(content.to_string())
            }
            None => Err(anyhow::anyhow!("Empty response from chat API").into()),
        }
    }
}

#[async_trait]
impl TextGenerator for PerplexityClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        self.chat(request).await
    }
}
