use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Presentation gesture vocabulary for the avatar renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    PointAtScreen,
    TypingGesture,
    ScrollGesture,
    WaitingGesture,
    HighlightResult,
    NeutralGesture,
    PresentationGesture,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::PointAtScreen => "point_at_screen",
            Gesture::TypingGesture => "typing_gesture",
            Gesture::ScrollGesture => "scroll_gesture",
            Gesture::WaitingGesture => "waiting_gesture",
            Gesture::HighlightResult => "highlight_result",
            Gesture::NeutralGesture => "neutral_gesture",
            Gesture::PresentationGesture => "presentation_gesture",
        }
    }
}

/// One timed unit of a demo run: a stretch of narration, optionally carrying
/// a single automation action to fire while it plays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub start_time: f64,
    pub duration: f64,
    pub text: String,
    pub gesture: Gesture,
    /// Present only on segments that carry an automation step.
    pub demo_action_id: Option<String>,
    /// Present iff `demo_action_id` is present.
    pub completion_signal: Option<String>,
}

impl Segment {
    pub fn duration_as_std(&self) -> Duration {
        Duration::from_secs_f64(self.duration.max(0.0))
    }

    pub fn has_action(&self) -> bool {
        self.demo_action_id.is_some()
    }
}

/// One automation step derived from the generated step list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoAction {
    pub action_id: String,
    pub description: String,
    pub expected_duration: f64,
    pub gesture: Gesture,
    pub completion_signal: String,
}

/// The full ordered run plan: segments plus the demo actions they reference.
/// Built once per run and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub segments: Vec<Segment>,
    pub actions: Vec<DemoAction>,
}

impl Timeline {
    pub fn total_duration(&self) -> f64 {
        self.segments
            .last()
            .map(|s| s.start_time + s.duration)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn action(&self, action_id: &str) -> Option<&DemoAction> {
        self.actions.iter().find(|a| a.action_id == action_id)
    }

    /// Segments that carry an automation step, with their timeline index.
    pub fn action_segments(&self) -> impl Iterator<Item = (usize, &Segment)> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gesture_serializes_snake_case() {
        let json = serde_json::to_string(&Gesture::PointAtScreen).unwrap();
        assert_eq!(json, "\"point_at_screen\"");
        assert_eq!(Gesture::PointAtScreen.as_str(), "point_at_screen");
    }

    #[test]
    fn empty_timeline_has_zero_duration() {
        let timeline = Timeline {
            segments: vec![],
            actions: vec![],
        };
        assert_eq!(timeline.total_duration(), 0.0);
        assert!(timeline.is_empty());
    }
}
