use crate::models::Gesture;

/// Ordered keyword table mapping a demo-step description to the gesture the
/// avatar should hold while the step runs. First matching row wins.
const GESTURE_RULES: &[(&[&str], Gesture)] = &[
    (&["click", "button", "press"], Gesture::PointAtScreen),
    (&["type", "enter", "input"], Gesture::TypingGesture),
    (&["scroll", "navigate"], Gesture::ScrollGesture),
    (&["wait", "pause"], Gesture::WaitingGesture),
    (&["result", "show", "display"], Gesture::HighlightResult),
];

/// Suggest a gesture for a free-text demo step. Case-insensitive keyword
/// scan; falls back to a neutral gesture.
pub fn gesture_for_step(description: &str) -> Gesture {
    let lower = description.to_lowercase();
    for (keywords, gesture) in GESTURE_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *gesture;
        }
    }
    Gesture::NeutralGesture
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_steps_point_at_screen() {
        assert_eq!(
            gesture_for_step("Click on the login button"),
            Gesture::PointAtScreen
        );
        assert_eq!(gesture_for_step("Press submit"), Gesture::PointAtScreen);
    }

    #[test]
    fn typing_steps_use_typing_gesture() {
        assert_eq!(
            gesture_for_step("Enter the email address"),
            Gesture::TypingGesture
        );
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // "click" (row 1) beats "show" (row 5)
        assert_eq!(
            gesture_for_step("Click to show the results"),
            Gesture::PointAtScreen
        );
    }

    #[test]
    fn scroll_and_wait_rules() {
        assert_eq!(
            gesture_for_step("Scroll to the bottom"),
            Gesture::ScrollGesture
        );
        assert_eq!(
            gesture_for_step("Pause for a moment"),
            Gesture::WaitingGesture
        );
    }

    #[test]
    fn unknown_steps_are_neutral() {
        assert_eq!(gesture_for_step("Observe the chart"), Gesture::NeutralGesture);
    }
}
