use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use crate::models::{Gesture, Segment};

/// What the avatar renderer is told at the start of each segment. The
/// renderer speaks and animates on its own; the engine never waits for a
/// spoken-completion acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentCue {
    pub segment_id: String,
    pub text: String,
    pub duration: f64,
    pub gesture: Gesture,
}

impl SegmentCue {
    pub fn for_segment(segment: &Segment) -> Self {
        Self {
            segment_id: segment.id.clone(),
            text: segment.text.clone(),
            duration: segment.duration,
            gesture: segment.gesture,
        }
    }
}

/// External avatar-rendering collaborator. A failed cue is logged by the
/// narration flow and never fails the run.
#[async_trait]
pub trait AvatarRenderer: Send + Sync {
    async fn present(&self, cue: SegmentCue) -> Result<()>;
}

/// Default renderer: logs each cue. Stands in for a remote rendering
/// service during development and dry runs.
pub struct LogAvatar;

#[async_trait]
impl AvatarRenderer for LogAvatar {
    async fn present(&self, cue: SegmentCue) -> Result<()> {
        info!(
            "avatar cue {} ({}, {:.1}s): {}",
            cue.segment_id,
            cue.gesture.as_str(),
            cue.duration,
            cue.text
        );
        Ok(())
    }
}

/// Renderer that does nothing; used by tests.
pub struct NullAvatar;

#[async_trait]
impl AvatarRenderer for NullAvatar {
    async fn present(&self, _cue: SegmentCue) -> Result<()> {
        Ok(())
    }
}
