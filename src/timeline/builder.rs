use anyhow::{bail, Result};

use crate::config::DemoConfig;
use crate::models::{DemoAction, Gesture, NarrationSection, Segment, Timeline};
use crate::timeline::gesture::gesture_for_step;
use crate::timeline::split::split_content_for_demos;

/// Combine the narration plan and the ordered automation-step list into one
/// contiguous timeline of segments.
///
/// Sections without demo steps become a single narration segment. Sections
/// with demo steps get a fixed slot reserved per step; the remaining time is
/// split evenly across `steps + 1` narration chunks, and chunks and action
/// segments are interleaved. Automation steps are consumed in order with a
/// cursor that is global across sections, never reset per section.
pub fn build_timeline(
    sections: &[NarrationSection],
    automation_steps: &[String],
    config: &DemoConfig,
) -> Result<Timeline> {
    let actions = extract_demo_actions(automation_steps, config);

    let mut segments: Vec<Segment> = Vec::new();
    let mut current_time = 0.0_f64;
    let mut next_action = 0usize;

    for section in sections {
        let duration = section
            .duration
            .unwrap_or(config.default_section_duration_secs);
        if duration < 0.0 {
            bail!("section '{}' has negative duration {duration}", section.title);
        }

        // A section can only consume as many steps as the global list still has.
        let steps = section.demo_steps.len().min(actions.len() - next_action);

        if steps == 0 {
            segments.push(narration_segment(
                segments.len(),
                current_time,
                duration,
                section.content.clone(),
            ));
            current_time += duration;
            continue;
        }

        // Shrink the per-action slot when the section is too short for the
        // full reserve, so segment durations always sum to section durations.
        let slot = config.action_reserve_secs.min(duration / steps as f64);
        let narration_budget = (duration - slot * steps as f64).max(0.0);

        let parts = split_content_for_demos(&section.content, steps);
        let chunk = narration_budget / parts.len() as f64;

        for (i, part) in parts.iter().enumerate() {
            segments.push(narration_segment(
                segments.len(),
                current_time,
                chunk,
                part.clone(),
            ));
            current_time += chunk;

            if i < steps {
                let action = &actions[next_action];
                let demo_step = &section.demo_steps[i];
                segments.push(Segment {
                    id: segment_id(segments.len()),
                    start_time: current_time,
                    duration: slot,
                    text: format!("Now let me demonstrate: {demo_step}"),
                    gesture: action.gesture,
                    demo_action_id: Some(action.action_id.clone()),
                    completion_signal: Some(action.completion_signal.clone()),
                });
                current_time += slot;
                next_action += 1;
            }
        }
    }

    Ok(Timeline { segments, actions })
}

/// Build the demo-action list from the generated automation steps, in order.
fn extract_demo_actions(automation_steps: &[String], config: &DemoConfig) -> Vec<DemoAction> {
    automation_steps
        .iter()
        .enumerate()
        .map(|(i, step)| DemoAction {
            action_id: format!("demo_action_{}", i + 1),
            description: step.clone(),
            expected_duration: config.default_action_duration_secs,
            gesture: gesture_for_step(step),
            completion_signal: format!("action_{}_complete", i + 1),
        })
        .collect()
}

fn narration_segment(index: usize, start_time: f64, duration: f64, text: String) -> Segment {
    Segment {
        id: segment_id(index),
        start_time,
        duration,
        text,
        gesture: Gesture::PresentationGesture,
        demo_action_id: None,
        completion_signal: None,
    }
}

fn segment_id(index: usize) -> String {
    format!("segment_{}", index + 1)
}
