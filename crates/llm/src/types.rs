use serde::{Deserialize, Serialize};

/// Chat-completions request
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "sonar")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Top-p sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Suppress image results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_images: Option<bool>,

    /// Suppress related-question results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_related_questions: Option<bool>,
}

/// Generation options
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Temperature (0.0 - 1.0)
    pub temperature: Option<f32>,

    /// Top-p sampling
    pub top_p: Option<f32>,
}

impl ChatRequest {
    /// Build a two-message (system + user) request
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
        options: GenerateOptions,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::system(system),
                ChatMessage::user(user),
            ],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            top_p: options.top_p,
            return_images: Some(false),
            return_related_questions: Some(false),
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Full message (non-streaming responses)
    #[serde(default)]
    pub message: Option<ChatMessage>,

    /// Partial message (some servers answer with a delta instead)
    #[serde(default)]
    pub delta: Option<ChatMessage>,
}

impl ChatResponse {
    /// Extract the completion text, preferring the full message over the delta
    pub fn content(&self) -> Option<&str> {
        let choice = self.choices.first()?;
        let content = choice
            .message
            .as_ref()
            .map(|m| m.content.trim())
            .filter(|c| !c.is_empty())
            .or_else(|| {
                choice
                    .delta
                    .as_ref()
                    .map(|m| m.content.trim())
                    .filter(|c| !c.is_empty())
            })?;
        Some(content)
    }
}
