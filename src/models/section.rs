use serde::{Deserialize, Serialize};

/// One section of the generated narration plan, as produced by the remote
/// synthesis step. Sections carry a coarse duration and optionally the demo
/// steps to weave into that stretch of narration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationSection {
    #[serde(default)]
    pub title: String,

    /// Section length in seconds. `None` falls back to the configured
    /// default section duration.
    #[serde(default)]
    pub duration: Option<f64>,

    pub content: String,

    /// Free-text demo steps to interleave with this section's narration.
    #[serde(default)]
    pub demo_steps: Vec<String>,
}

impl NarrationSection {
    pub fn new(title: impl Into<String>, duration: f64, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: Some(duration),
            content: content.into(),
            demo_steps: Vec::new(),
        }
    }

    pub fn with_demo_steps(mut self, steps: Vec<String>) -> Self {
        self.demo_steps = steps;
        self
    }
}
