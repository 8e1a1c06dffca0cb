use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::avatar::{AvatarRenderer, SegmentCue};
use crate::models::Segment;

/// Narration clock: walks the segments at their scripted cadence.
///
/// The cursor is written here and only here; the automation flow reads it.
/// The clock never waits on completion signals, so narration stays on pace
/// even when automation lags.
pub(crate) async fn narration_loop(
    segments: Vec<Segment>,
    avatar: Arc<dyn AvatarRenderer>,
    cursor: Arc<AtomicUsize>,
    cancel: CancellationToken,
) {
    let total = segments.len();

    for (index, segment) in segments.iter().enumerate() {
        if cancel.is_cancelled() {
            break;
        }

        cursor.store(index, Ordering::Release);
        info!(
            "narration {}/{total} ({}): {}",
            index + 1,
            segment.id,
            truncate(&segment.text, 50)
        );

        // Cue the renderer and move on; a renderer hiccup must not stall
        // the clock.
        if let Err(err) = avatar.present(SegmentCue::for_segment(segment)).await {
            warn!("avatar cue failed for {}: {err:#}", segment.id);
        }

        tokio::select! {
            _ = tokio::time::sleep(segment.duration_as_std()) => {}
            _ = cancel.cancelled() => {
                info!("narration flow shutting down");
                break;
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(60);
        assert_eq!(truncate(&long, 50).chars().count(), 53);
    }
}
