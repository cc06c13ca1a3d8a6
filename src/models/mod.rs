//! Transient request/response shapes. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Article fields carried into a synthesis prompt.
#[derive(Debug, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Depth selector for article synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisLevel {
    Summary,
    Expert,
    Deep,
}

impl SynthesisLevel {
    /// Parse the wire-level key. Unknown keys are rejected by the caller.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "summary" => Some(SynthesisLevel::Summary),
            "expert" => Some(SynthesisLevel::Expert),
            "deep" => Some(SynthesisLevel::Deep),
            _ => None,
        }
    }

    /// Render the prompt for this level with the article's title and
    /// description interpolated.
    pub fn prompt(&self, title: &str, description: &str) -> String {
        match self {
            SynthesisLevel::Summary => format!(
                "Provide a concise 2-3 sentence summary of this news article. \
                 Focus on the key facts and main point: \"{}\". {}",
                title, description
            ),
            SynthesisLevel::Expert => format!(
                "Provide expert analysis of this news topic in 4-5 sentences. \
                 Include different perspectives, context, and implications: \"{}\". {}",
                title, description
            ),
            SynthesisLevel::Deep => format!(
                "Provide a comprehensive deep dive analysis in 6-8 sentences covering: \
                 timeline, stakeholder perspectives, broader implications, and related \
                 contexts for: \"{}\". {}",
                title, description
            ),
        }
    }
}

/// Envelope shared by the news provider's endpoints.
///
/// Only the status flag and error message are inspected; everything else
/// (articles, totals, whatever the provider adds later) is kept in `rest`
/// and relayed verbatim.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

impl NewsApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
