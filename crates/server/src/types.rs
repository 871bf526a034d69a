use serde::{Deserialize, Serialize};

/// Query parameters for the summary endpoint
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Topic to acquire content about
    pub topic: Option<String>,

    /// Literal text to summarize
    pub text: Option<String>,
}

/// Summary endpoint response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Formatted heading/point block
    pub summary: String,
}
