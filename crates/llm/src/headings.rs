use std::sync::Arc;
use tracing::warn;

use crate::llm_trait::TextGenerator;
use crate::prompts;
use crate::types::{ChatRequest, GenerateOptions};

/// Produces one short heading per point
///
/// Never fails: a short upstream answer is padded with "Point {n}"
/// placeholders and an outright failure yields the full placeholder
/// sequence.
pub struct HeadingAssigner {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl HeadingAssigner {
    /// Create new assigner
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Generate headings, index-aligned with `points`
    pub async fn assign(&self, points: &[String]) -> Vec<String> {
        if points.is_empty() {
            return Vec::new();
        }

        let request = ChatRequest::new(
            &self.model,
            prompts::HEADING_SYSTEM_PROMPT,
            points.join("\n"),
            GenerateOptions {
                max_tokens: Some(100),
                temperature: Some(0.3),
                top_p: Some(0.9),
            },
        );

        let mut headings: Vec<String> = match self.generator.complete(request).await {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .take(points.len())
                .map(String::from)
                .collect(),
            Err(e) => {
                warn!("Heading generation failed: {}", e);
                Vec::new()
            }
        };

        for i in headings.len()..points.len() {
            headings.push(format!("Point {}", i + 1));
        }

        headings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use keyfacts_common::{KeyfactsError, Result};

    struct FixedGenerator {
        reply: &'static str,
    }

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn complete(&self, _request: ChatRequest) -> Result<String> {
            Ok(self.reply.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn complete(&self, _request: ChatRequest) -> Result<String> {
            Err(KeyfactsError::network("generator offline"))
        }
    }

    fn points(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Fact number {}.", i)).collect()
    }

    #[tokio::test]
    async fn assign_pads_short_answers() {
        let assigner = HeadingAssigner::new(
            Arc::new(FixedGenerator { reply: "Growth" }),
            "sonar",
        );
        let headings = assigner.assign(&points(3)).await;
        assert_eq!(headings, vec!["Growth", "Point 2", "Point 3"]);
    }

    #[tokio::test]
    async fn assign_truncates_long_answers() {
        let assigner = HeadingAssigner::new(
            Arc::new(FixedGenerator {
                reply: "One\nTwo\nThree\nFour",
            }),
            "sonar",
        );
        let headings = assigner.assign(&points(2)).await;
        assert_eq!(headings, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn assign_substitutes_placeholders_on_failure() {
        let assigner = HeadingAssigner::new(Arc::new(FailingGenerator), "sonar");
        let headings = assigner.assign(&points(3)).await;
        assert_eq!(headings, vec!["Point 1", "Point 2", "Point 3"]);
    }

    #[tokio::test]
    async fn assign_returns_empty_for_no_points() {
        let assigner = HeadingAssigner::new(Arc::new(FailingGenerator), "sonar");
        assert!(assigner.assign(&[]).await.is_empty());
    }
}
