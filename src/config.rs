use serde::{Deserialize, Serialize};

/// Tunable constants for timeline construction, action interpretation and
/// browser execution. Defaults match the behavior the engine was tuned with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Base URL the demo runs against; relative navigation targets are
    /// resolved against it.
    pub base_url: String,

    /// Time reserved in the timeline for each demo step.
    pub action_reserve_secs: f64,

    /// Expected duration recorded on each `DemoAction`.
    pub default_action_duration_secs: f64,

    /// Section duration used when the narration input omits one.
    pub default_section_duration_secs: f64,

    /// How often the automation flow re-checks the narration cursor.
    pub poll_interval_ms: u64,

    /// Settle delay after a click registers.
    pub click_settle_ms: u64,

    /// Settle delay after typing into a field.
    pub type_settle_ms: u64,

    /// Settle delay after a scroll command.
    pub scroll_settle_ms: u64,

    /// Scroll distance per scroll action, in pixels.
    pub scroll_step_px: i64,

    /// Wait duration used when a wait step names no time.
    pub default_wait_secs: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            action_reserve_secs: 10.0,
            default_action_duration_secs: 5.0,
            default_section_duration_secs: 60.0,
            poll_interval_ms: 100,
            click_settle_ms: 1000,
            type_settle_ms: 500,
            scroll_settle_ms: 1000,
            scroll_step_px: 500,
            default_wait_secs: 2.0,
        }
    }
}
