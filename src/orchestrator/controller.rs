use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::avatar::AvatarRenderer;
use crate::browser::{ActionHistoryEntry, BrowserExecutor, BrowserSession};
use crate::config::DemoConfig;
use crate::interpreter::ActionInterpreter;
use crate::models::Timeline;
use crate::orchestrator::automation::automation_loop;
use crate::orchestrator::narration::narration_loop;
use crate::orchestrator::state::{
    CurrentEventData, RunState, RunStatus, SignalTable, StatusSnapshot,
};

/// Coordinates one demo run: the narration clock and the browser-automation
/// actor, loosely synchronized through a shared cursor and the completion
/// signal table.
#[derive(Clone)]
pub struct DemoController {
    config: DemoConfig,
    avatar: Arc<dyn AvatarRenderer>,
    state: Arc<Mutex<RunState>>,
    cursor: Arc<AtomicUsize>,
    signals: SignalTable,
    history: Arc<std::sync::Mutex<Vec<ActionHistoryEntry>>>,
    cancel: Arc<Mutex<Option<CancellationToken>>>,
    supervisor: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl DemoController {
    pub fn new(config: DemoConfig, avatar: Arc<dyn AvatarRenderer>) -> Self {
        Self {
            config,
            avatar,
            state: Arc::new(Mutex::new(RunState::new())),
            cursor: Arc::new(AtomicUsize::new(0)),
            signals: SignalTable::new(),
            history: Arc::new(std::sync::Mutex::new(Vec::new())),
            cancel: Arc::new(Mutex::new(None)),
            supervisor: Arc::new(Mutex::new(None)),
        }
    }

    /// Start a run. Spawns the narration and automation flows plus a
    /// supervisor that marks the run completed once both flows end.
    pub async fn start(
        &self,
        timeline: Timeline,
        session: Arc<dyn BrowserSession>,
    ) -> Result<String> {
        if timeline.is_empty() {
            bail!("timeline has no segments");
        }

        let run_id = Uuid::new_v4().to_string();
        {
            let mut state = self.state.lock().await;
            if state.status == RunStatus::Running {
                bail!("a demo is already running");
            }
            state.begin_run(run_id.clone(), timeline.clone());
        }

        self.signals.reset_for(&timeline);
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        self.cursor.store(0, Ordering::Release);

        let cancel = CancellationToken::new();
        *self.cancel.lock().await = Some(cancel.clone());

        info!(
            "starting demo run {run_id}: {} segments, {} actions, {:.1}s",
            timeline.segments.len(),
            timeline.actions.len(),
            timeline.total_duration()
        );

        let narration = tokio::spawn(narration_loop(
            timeline.segments.clone(),
            self.avatar.clone(),
            self.cursor.clone(),
            cancel.clone(),
        ));

        let interpreter = ActionInterpreter::new(&self.config);
        let executor = BrowserExecutor::new(session, self.config.clone(), self.history.clone());
        let automation = tokio::spawn(automation_loop(
            timeline,
            interpreter,
            executor,
            self.cursor.clone(),
            self.signals.clone(),
            self.state.clone(),
            cancel.clone(),
            Duration::from_millis(self.config.poll_interval_ms),
        ));

        let state = self.state.clone();
        let supervisor = tokio::spawn(async move {
            let _ = narration.await;
            let _ = automation.await;
            state.lock().await.finish();
        });
        *self.supervisor.lock().await = Some(supervisor);

        Ok(run_id)
    }

    /// Cooperatively stop the run. Both flows observe the cancellation
    /// within one polling interval; an in-flight browser action finishes
    /// first. Idempotent.
    pub async fn stop(&self) {
        {
            let mut state = self.state.lock().await;
            if state.status != RunStatus::Running {
                return;
            }
            state.stop();
        }

        if let Some(token) = self.cancel.lock().await.take() {
            token.cancel();
        }
        info!("demo stop requested");
    }

    /// Wait for the current run to end and return its final status.
    pub async fn join(&self) -> Result<RunStatus> {
        let handle = self
            .supervisor
            .lock()
            .await
            .take()
            .ok_or_else(|| anyhow!("no run in progress"))?;
        handle.await.context("demo supervisor task failed")?;
        Ok(self.state.lock().await.status)
    }

    /// Read-only view of the run; safe to call while the demo plays.
    pub async fn status(&self) -> StatusSnapshot {
        let state = self.state.lock().await;
        let index = self.cursor.load(Ordering::Acquire);

        let (current_event, total_events, current_event_data) = match &state.timeline {
            None => (0, 0, None),
            Some(timeline) => {
                let total = timeline.segments.len();
                let data = timeline.segments.get(index).map(|seg| CurrentEventData {
                    id: seg.id.clone(),
                    text: seg.text.clone(),
                    action_id: seg.demo_action_id.clone(),
                    duration: seg.duration,
                });
                ((index + 1).min(total), total, data)
            }
        };

        StatusSnapshot {
            status: state.status,
            current_event,
            total_events,
            current_event_data,
            completion_signals: self.signals.snapshot(),
        }
    }

    /// Ordered log of every attempted browser action in the current run.
    pub fn action_history(&self) -> Vec<ActionHistoryEntry> {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::NullAvatar;
    use crate::browser::MockSession;
    use crate::models::{Gesture, Segment};

    fn controller() -> DemoController {
        DemoController::new(DemoConfig::default(), Arc::new(NullAvatar))
    }

    #[tokio::test]
    async fn start_rejects_empty_timeline() {
        let ctrl = controller();
        let timeline = Timeline {
            segments: vec![],
            actions: vec![],
        };
        let err = ctrl
            .start(timeline, Arc::new(MockSession::new()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no segments"));
    }

    #[tokio::test]
    async fn status_before_start_is_idle() {
        let ctrl = controller();
        let snapshot = ctrl.status().await;
        assert_eq!(snapshot.status, RunStatus::Idle);
        assert_eq!(snapshot.current_event, 0);
        assert_eq!(snapshot.total_events, 0);
        assert!(snapshot.current_event_data.is_none());
    }

    #[tokio::test]
    async fn double_start_is_rejected() {
        let ctrl = controller();
        let timeline = Timeline {
            segments: vec![Segment {
                id: "segment_1".into(),
                start_time: 0.0,
                duration: 1.0,
                text: "Hello".into(),
                gesture: Gesture::PresentationGesture,
                demo_action_id: None,
                completion_signal: None,
            }],
            actions: vec![],
        };

        ctrl.start(timeline.clone(), Arc::new(MockSession::new()))
            .await
            .unwrap();
        let err = ctrl
            .start(timeline, Arc::new(MockSession::new()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already running"));

        ctrl.stop().await;
        ctrl.join().await.unwrap();
    }
}
