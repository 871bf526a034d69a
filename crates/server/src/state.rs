use keyfacts_common::{AppConfig, Result};
use keyfacts_llm::{PerplexityClient, SummaryPipeline};
use keyfacts_points::PointBudget;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization pipeline
    pub pipeline: SummaryPipeline,
}

impl AppState {
    /// Create new application state with the real upstream client
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = PerplexityClient::new(&config.api_base_url, &config.api_key)?;
        let pipeline = SummaryPipeline::new(
            Arc::new(client),
            &config.llm_model,
            PointBudget::Range(config.points_min, config.points_max),
        );

        Ok(Self { config, pipeline })
    }
}
