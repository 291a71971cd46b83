use serde::{Deserialize, Serialize};

/// Extracted content of a single fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL of the page, exactly as given on the command line
    pub url: String,

    /// Visible text content, fragments joined with single spaces
    pub text: String,

    /// Same-origin links in order of first appearance, deduplicated
    pub links: Vec<String>,
}

impl PageResult {
    /// Create a new page result instance
    pub fn new(url: String, text: String, links: Vec<String>) -> Self {
        Self { url, text, links }
    }
}

/// Failure report emitted on stderr when a run cannot produce a PageResult
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable description of the failure
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Render as a single-line JSON object
    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}
