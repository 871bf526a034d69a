use std::sync::Arc;
use tracing::{info, warn};

use keyfacts_points::{extract_points, format_summary, NormalizerOptions, PointBudget};

use crate::acquire::ContentAcquirer;
use crate::headings::HeadingAssigner;
use crate::llm_trait::TextGenerator;

/// Substituted for the content when acquisition fails outright
pub const ACQUISITION_FAILURE_NOTICE: &str = "Error fetching data from the content service.";

/// Result of one summarization request
#[derive(Debug, Clone)]
pub struct SummaryOutput {
    /// Deduplicated points, at most the resolved budget
    pub points: Vec<String>,

    /// Headings, index-aligned with `points`
    pub headings: Vec<String>,

    /// Display block combining headings and points
    pub formatted: String,
}

/// Per-request summarization pipeline
///
/// Resolves a point budget, acquires or accepts content, normalizes it
/// into points, assigns headings, and formats the result. Stateless
/// between requests.
pub struct SummaryPipeline {
    acquirer: ContentAcquirer,
    assigner: HeadingAssigner,
    options: NormalizerOptions,
    budget: PointBudget,
}

impl SummaryPipeline {
    /// Create new pipeline around a generator backend
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        model: impl Into<String>,
        budget: PointBudget,
    ) -> Self {
        let model = model.into();
        Self {
            acquirer: ContentAcquirer::new(generator.clone(), model.clone()),
            assigner: HeadingAssigner::new(generator, model),
            options: NormalizerOptions::default(),
            budget,
        }
    }

    /// Summarize a topic by acquiring content first
    ///
    /// Acquisition failure degrades to a notice string as the content, so
    /// the caller still receives a (single-point) result.
    pub async fn summarize_topic(&self, topic: &str) -> SummaryOutput {
        let num_points = self.budget.resolve(&mut rand::thread_rng());
        info!("Summarizing topic - Points: {}", num_points);

        let text = match self.acquirer.fetch(topic, num_points).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Content acquisition failed: {}", e);
                ACQUISITION_FAILURE_NOTICE.to_string()
            }
        };

        self.assemble(&text, num_points).await
    }

    /// Summarize supplied text directly
    pub async fn summarize_text(&self, text: &str) -> SummaryOutput {
        let num_points = self.budget.resolve(&mut rand::thread_rng());
        info!("Summarizing text - Length: {} chars, Points: {}", text.len(), num_points);

        self.assemble(text, num_points).await
    }

    async fn assemble(&self, text: &str, num_points: usize) -> SummaryOutput {
        let points = extract_points(text, num_points, &self.options);
        let headings = self.assigner.assign(&points).await;
        let formatted = format_summary(&points, &headings);

        SummaryOutput {
            points,
            headings,
            formatted,
        }
    }
}
