//! Prompt templates for content acquisition and heading generation

/// System prompt for the structured fact-list request
pub const FACTS_SYSTEM_PROMPT: &str = "Provide an informative and structured response.";

/// System prompt for the essay-style fallback request
pub const ESSAY_SYSTEM_PROMPT: &str = "Be precise and concise.";

/// System prompt for heading generation
pub const HEADING_SYSTEM_PROMPT: &str =
    "Generate a short heading (2-3 words) for each fact listed below.";

/// Prompt for a structured list of facts about a topic
pub fn fact_list_prompt(topic: &str, num_points: usize) -> String {
    format!(
        "List {} key facts about {}. Each fact should be in a separate line and no more than 20 words long.",
        num_points, topic
    )
}

/// Prompt for a short essay about a topic (fallback acquisition style)
pub fn essay_prompt(topic: &str) -> String {
    format!("Provide a 300-word essay about {}.", topic)
}
