use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::browser::BrowserExecutor;
use crate::interpreter::ActionInterpreter;
use crate::models::Timeline;
use crate::orchestrator::state::{RunState, SignalTable};

/// Automation actor: steps through the action-bearing segments in order.
///
/// Rendezvous with the narration clock is by polling: before each action the
/// flow re-checks the shared cursor on a fixed interval until narration has
/// reached that segment, so it can never run ahead and never blocks
/// indefinitely. The completion signal is set even when the action fails,
/// so nothing downstream waits forever on a broken step.
pub(crate) async fn automation_loop(
    timeline: Timeline,
    interpreter: ActionInterpreter,
    executor: BrowserExecutor,
    cursor: Arc<AtomicUsize>,
    signals: SignalTable,
    state: Arc<Mutex<RunState>>,
    cancel: CancellationToken,
    poll_interval: Duration,
) {
    let action_segments: Vec<(usize, _)> = timeline
        .action_segments()
        .map(|(i, s)| (i, s.clone()))
        .collect();

    for (index, segment) in action_segments {
        // Poll until the narration clock reaches this segment.
        loop {
            if cancel.is_cancelled() {
                info!("automation flow shutting down");
                return;
            }
            if cursor.load(Ordering::Acquire) >= index {
                break;
            }
            tokio::select! {
                _ = tokio::time::sleep(poll_interval) => {}
                _ = cancel.cancelled() => {
                    info!("automation flow shutting down");
                    return;
                }
            }
        }

        let Some(action_id) = segment.demo_action_id.as_deref() else {
            continue;
        };
        let Some(action) = timeline.action(action_id) else {
            warn!("segment {} references unknown action {action_id}", segment.id);
            continue;
        };

        let parsed = interpreter.interpret(&action.description);
        match executor.execute(&parsed, &action.description).await {
            Ok(()) => info!("browser action completed: {}", action.description),
            Err(err) if err.is_fatal() => {
                error!("browser session lost, aborting run: {err}");
                state.lock().await.fail();
                if let Some(signal) = &segment.completion_signal {
                    signals.complete(signal);
                }
                cancel.cancel();
                return;
            }
            Err(err) => {
                // Absorbed: the run keeps going and history records the miss.
                warn!("browser action failed: {}: {err}", action.description);
            }
        }

        if let Some(signal) = &segment.completion_signal {
            signals.complete(signal);
        }
    }
}
