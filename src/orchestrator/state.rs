use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::Timeline;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RunStatus {
    Idle,
    Running,
    Completed,
    Stopped,
    Failed,
}

impl Default for RunStatus {
    fn default() -> Self {
        RunStatus::Idle
    }
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "running",
            RunStatus::Completed => "completed",
            RunStatus::Stopped => "stopped",
            RunStatus::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunStatus::Completed | RunStatus::Stopped | RunStatus::Failed
        )
    }
}

/// Mutable per-run state behind the controller's lock.
#[derive(Debug, Default)]
pub struct RunState {
    pub status: RunStatus,
    pub run_id: Option<String>,
    pub timeline: Option<Timeline>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_run(&mut self, run_id: String, timeline: Timeline) {
        self.status = RunStatus::Running;
        self.run_id = Some(run_id);
        self.timeline = Some(timeline);
    }

    /// Normal end of both flows. Only a still-running run completes; a run
    /// already stopped or failed keeps its terminal status.
    pub fn finish(&mut self) {
        if self.status == RunStatus::Running {
            self.status = RunStatus::Completed;
        }
    }

    pub fn stop(&mut self) {
        if self.status == RunStatus::Running {
            self.status = RunStatus::Stopped;
        }
    }

    pub fn fail(&mut self) {
        self.status = RunStatus::Failed;
    }
}

/// Completion-signal table shared between the automation flow (sole writer)
/// and any observer. Keys are registered once at run start; each key is
/// flipped to `true` exactly once, when its action finishes, success or not.
#[derive(Clone, Default)]
pub struct SignalTable {
    inner: Arc<RwLock<HashMap<String, bool>>>,
}

impl SignalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the table and register every completion signal in the timeline
    /// as pending.
    pub fn reset_for(&self, timeline: &Timeline) {
        let mut table = self.inner.write().unwrap_or_else(|e| e.into_inner());
        table.clear();
        for action in &timeline.actions {
            table.insert(action.completion_signal.clone(), false);
        }
    }

    /// Mark a signal complete. Write-once: a signal never goes back to
    /// pending.
    pub fn complete(&self, key: &str) {
        let mut table = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match table.get_mut(key) {
            Some(flag) => *flag = true,
            None => {
                warn!("completion signal '{key}' was never registered");
                table.insert(key.to_string(), true);
            }
        }
    }

    pub fn is_complete(&self, key: &str) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .copied()
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> HashMap<String, bool> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Read-only view of a run, safe to take while the demo is playing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub status: RunStatus,
    /// 1-based index of the segment the narration clock is on; 0 when idle.
    pub current_event: usize,
    pub total_events: usize,
    pub current_event_data: Option<CurrentEventData>,
    pub completion_signals: HashMap<String, bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentEventData {
    pub id: String,
    pub text: String,
    pub action_id: Option<String>,
    pub duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DemoAction, Gesture};

    fn timeline_with_signals(signals: &[&str]) -> Timeline {
        Timeline {
            segments: vec![],
            actions: signals
                .iter()
                .enumerate()
                .map(|(i, sig)| DemoAction {
                    action_id: format!("demo_action_{}", i + 1),
                    description: "Click something".into(),
                    expected_duration: 5.0,
                    gesture: Gesture::PointAtScreen,
                    completion_signal: sig.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn run_state_transitions() {
        let mut state = RunState::new();
        assert_eq!(state.status, RunStatus::Idle);

        state.begin_run("run-1".into(), timeline_with_signals(&[]));
        assert_eq!(state.status, RunStatus::Running);

        state.finish();
        assert_eq!(state.status, RunStatus::Completed);
        assert!(state.status.is_terminal());
    }

    #[test]
    fn stop_and_fail_are_sticky_over_finish() {
        let mut state = RunState::new();
        state.begin_run("run-1".into(), timeline_with_signals(&[]));
        state.stop();
        state.finish();
        assert_eq!(state.status, RunStatus::Stopped);

        let mut state = RunState::new();
        state.begin_run("run-2".into(), timeline_with_signals(&[]));
        state.fail();
        state.finish();
        assert_eq!(state.status, RunStatus::Failed);
    }

    #[test]
    fn signals_start_pending_and_complete_once() {
        let table = SignalTable::new();
        table.reset_for(&timeline_with_signals(&["action_1_complete"]));

        assert!(!table.is_complete("action_1_complete"));
        table.complete("action_1_complete");
        assert!(table.is_complete("action_1_complete"));

        // Completing again is a no-op, not a toggle.
        table.complete("action_1_complete");
        assert!(table.is_complete("action_1_complete"));
    }

    #[test]
    fn reset_discards_previous_run_signals() {
        let table = SignalTable::new();
        table.reset_for(&timeline_with_signals(&["action_1_complete"]));
        table.complete("action_1_complete");

        table.reset_for(&timeline_with_signals(&["action_2_complete"]));
        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("action_2_complete"), Some(&false));
    }
}
