use keyfacts_common::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::llm_trait::TextGenerator;
use crate::prompts;
use crate::types::{ChatRequest, GenerateOptions};

/// Fetches descriptive text about a topic from the upstream API
///
/// Asks for a structured fact list first; if that request fails, retries
/// once with the essay-style prompt before giving up.
pub struct ContentAcquirer {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ContentAcquirer {
    /// Create new acquirer
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Fetch topic text, sized for roughly `num_points` facts
    pub async fn fetch(&self, topic: &str, num_points: usize) -> Result<String> {
        debug!("Acquiring content - Topic: {}, Points: {}", topic, num_points);

        let facts_request = ChatRequest::new(
            &self.model,
            prompts::FACTS_SYSTEM_PROMPT,
            prompts::fact_list_prompt(topic, num_points),
            GenerateOptions {
                max_tokens: Some(400),
                temperature: Some(0.3),
                top_p: Some(0.9),
            },
        );

        match self.generator.complete(facts_request).await {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!("Fact-list acquisition failed ({}), trying essay prompt", e);

                let essay_request = ChatRequest::new(
                    &self.model,
                    prompts::ESSAY_SYSTEM_PROMPT,
                    prompts::essay_prompt(topic),
                    GenerateOptions {
                        max_tokens: Some(300),
                        temperature: Some(0.2),
                        top_p: Some(0.9),
                    },
                );

                self.generator.complete(essay_request).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use keyfacts_common::KeyfactsError;
    use std::sync::Mutex;

    /// Replays a scripted sequence of completion results
    struct ScriptedGenerator {
        replies: Mutex<Vec<Result<String>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedGenerator {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn complete(&self, request: ChatRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(KeyfactsError::llm("script exhausted"));
            }
            replies.remove(0)
        }
    }

    #[tokio::test]
    async fn fetch_uses_fact_list_prompt_first() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("Fact one.\nFact two.".to_string())]));
        let acquirer = ContentAcquirer::new(generator.clone(), "sonar");

        let text = acquirer.fetch("solar power", 5).await.unwrap();
        assert_eq!(text, "Fact one.\nFact two.");

        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].messages[1].content.contains("5 key facts"));
    }

    #[tokio::test]
    async fn fetch_falls_back_to_essay_prompt() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(KeyfactsError::network("timeout")),
            Ok("A short essay.".to_string()),
        ]));
        let acquirer = ContentAcquirer::new(generator.clone(), "sonar");

        let text = acquirer.fetch("solar power", 5).await.unwrap();
        assert_eq!(text, "A short essay.");

        let requests = generator.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].messages[1].content.contains("300-word essay"));
    }

    #[tokio::test]
    async fn fetch_fails_when_both_styles_fail() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(KeyfactsError::network("timeout")),
            Err(KeyfactsError::network("timeout")),
        ]));
        let acquirer = ContentAcquirer::new(generator, "sonar");

        assert!(acquirer.fetch("solar power", 5).await.is_err());
    }
}
