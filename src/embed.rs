use serde::Serialize;

use crate::models::Timeline;

/// Event row handed to the browser-embedded coordination script.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedEvent<'a> {
    id: &'a str,
    timestamp: f64,
    duration: f64,
    browser_action: Option<&'a str>,
    completion_signal: Option<&'a str>,
}

/// Generate the HTML embed for a hosted presentation player, including the
/// client-side mirror of the polling rendezvous: it posts a start signal,
/// steps through the serialized events on a fixed interval, forwards
/// action/signal pairs to a listener, and resumes narration when an action
/// is acknowledged.
pub fn generate_embed_code(timeline: &Timeline, presentation_id: &str) -> String {
    let events: Vec<EmbedEvent<'_>> = timeline
        .segments
        .iter()
        .map(|seg| EmbedEvent {
            id: &seg.id,
            timestamp: seg.start_time,
            duration: seg.duration,
            browser_action: seg
                .demo_action_id
                .as_deref()
                .and_then(|id| timeline.action(id))
                .map(|a| a.description.as_str()),
            completion_signal: seg.completion_signal.as_deref(),
        })
        .collect();

    let events_json =
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<div id="demo-player-container" style="width: 100%; height: 400px; border: 2px solid #667eea; border-radius: 10px; overflow: hidden;">
    <iframe
        src="https://app.tavus.com/embed/{presentation_id}"
        width="100%"
        height="100%"
        frameborder="0"
        allowfullscreen>
    </iframe>
</div>
<script>
    const demoEvents = {events_json};

    let currentEventIndex = 0;

    function startDemo() {{
        console.log('Starting synchronized demo...');
        window.postMessage({{type: 'START_BROWSER_AUTOMATION'}}, '*');

        setInterval(() => {{
            if (currentEventIndex < demoEvents.length) {{
                const event = demoEvents[currentEventIndex];
                console.log(`Event ${{currentEventIndex + 1}}: ${{event.browserAction || 'Narration only'}}`);

                if (event.browserAction) {{
                    window.postMessage({{
                        type: 'EXECUTE_BROWSER_ACTION',
                        action: event.browserAction,
                        completion_signal: event.completionSignal
                    }}, '*');
                }}

                currentEventIndex++;
            }}
        }}, 1000);
    }}

    window.addEventListener('message', (event) => {{
        if (event.data.type === 'BROWSER_ACTION_COMPLETED') {{
            console.log(`Browser action completed: ${{event.data.signal}}`);
            window.postMessage({{
                type: 'AVATAR_CONTINUE',
                signal: event.data.signal
            }}, '*');
        }}
    }});
</script>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;
    use crate::models::NarrationSection;
    use crate::timeline::build_timeline;

    #[test]
    fn embed_carries_events_and_presentation_id() {
        let sections = vec![NarrationSection::new(
            "Intro",
            30.0,
            "Welcome to the demo. Let me walk you through it.",
        )
        .with_demo_steps(vec!["Open the app".into()])];
        let steps = vec!["Click on the login button".to_string()];
        let timeline = build_timeline(&sections, &steps, &DemoConfig::default()).unwrap();

        let html = generate_embed_code(&timeline, "demo_presentation_123");

        assert!(html.contains("app.tavus.com/embed/demo_presentation_123"));
        assert!(html.contains("Click on the login button"));
        assert!(html.contains("action_1_complete"));
        assert!(html.contains("START_BROWSER_AUTOMATION"));
    }
}
