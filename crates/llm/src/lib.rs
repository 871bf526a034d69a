pub mod acquire;
pub mod client;
pub mod headings;
pub mod llm_trait;
pub mod pipeline;
pub mod prompts;
pub mod types;

pub use acquire::ContentAcquirer;
pub use client::PerplexityClient;
pub use headings::HeadingAssigner;
pub use llm_trait::TextGenerator;
pub use pipeline::{SummaryOutput, SummaryPipeline};
pub use types::{ChatMessage, ChatRequest, GenerateOptions};
