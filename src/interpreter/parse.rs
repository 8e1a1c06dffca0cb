use regex::Regex;

use crate::config::DemoConfig;
use crate::interpreter::action::{ParsedAction, ScrollDirection};

/// Keyword rows for action classification. Scanned top to bottom over the
/// lowercased description; the first row with any matching keyword decides
/// the action type, so the ordering here is load-bearing.
const CLICK_WORDS: &[&str] = &["click", "press", "tap"];
const TYPE_WORDS: &[&str] = &["type", "enter", "input", "fill"];
const NAVIGATE_WORDS: &[&str] = &["navigate", "go to", "visit", "open"];
const WAIT_WORDS: &[&str] = &["wait", "pause", "delay"];
const SCROLL_WORDS: &[&str] = &["scroll"];

/// Keyword fallback table for selector resolution, tried only after the
/// quote/`#id`/`.class` patterns fail. First matching row wins.
const SELECTOR_FALLBACKS: &[(&str, &str)] = &[
    (
        "login",
        r#"input[type="email"], input[name="email"], input[name="username"]"#,
    ),
    ("password", r#"input[type="password"]"#),
    ("submit", r#"button[type="submit"], input[type="submit"]"#),
    ("menu", "nav, .menu, .navigation"),
    ("dashboard", r#".dashboard, #dashboard, [data-testid="dashboard"]"#),
];

const GENERIC_SELECTOR: &str = "button, a, input";

/// Canonical demo values typed into fields when the step quotes no literal.
const TEXT_FALLBACKS: &[(&str, &str)] = &[
    ("email", "demo@example.com"),
    ("username", "demo@example.com"),
    ("password", "demo123"),
    ("name", "Demo User"),
];

const GENERIC_TEXT: &str = "demo";

/// URL path keywords appended to the base URL when the step names a page
/// without giving a path.
const URL_FALLBACKS: &[(&str, &str)] = &[
    ("dashboard", "/dashboard"),
    ("login", "/login"),
    ("home", "/"),
];

/// Translates free-text automation steps into executable actions with
/// deterministic keyword and pattern heuristics. Total: every input maps to
/// some `ParsedAction`, with `Unrecognized` as the catch-all.
pub struct ActionInterpreter {
    base_url: String,
    default_wait_secs: f64,
    selector_patterns: Vec<Regex>,
    quoted: Regex,
    absolute_url: Regex,
    url_path: Regex,
    wait_patterns: Vec<(Regex, f64)>,
}

impl ActionInterpreter {
    pub fn new(config: &DemoConfig) -> Self {
        // Selector patterns, most precise first: quoted label after a role
        // word, any quoted string, then bare #id / .class tokens.
        let selector_patterns = [
            r#"(?i)button.*?["']([^"']+)["']"#,
            r#"(?i)link.*?["']([^"']+)["']"#,
            r#"(?i)field.*?["']([^"']+)["']"#,
            r#"["']([^"']+)["']"#,
            r"#([a-zA-Z0-9_-]+)",
            r"\.([a-zA-Z0-9_-]+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("valid selector pattern"))
        .collect();

        let wait_patterns = [
            (r"(?i)(\d+)\s*seconds?", 1.0),
            (r"(?i)(\d+)\s*s", 1.0),
            (r"(?i)(\d+)\s*minutes?", 60.0),
            (r"(?i)(\d+)\s*m", 60.0),
        ]
        .iter()
        .map(|(p, mul)| (Regex::new(p).expect("valid wait pattern"), *mul))
        .collect();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_wait_secs: config.default_wait_secs,
            selector_patterns,
            quoted: Regex::new(r#"["']([^"']+)["']"#).expect("valid quote pattern"),
            absolute_url: Regex::new(r"https?://[^\s]+").expect("valid url pattern"),
            url_path: Regex::new(r"/[a-zA-Z0-9/_-]+").expect("valid path pattern"),
            wait_patterns,
        }
    }

    /// Classify a step description into a structured action. Pure and
    /// deterministic; never fails.
    pub fn interpret(&self, description: &str) -> ParsedAction {
        let lower = description.to_lowercase();

        if contains_any(&lower, CLICK_WORDS) {
            ParsedAction::Click {
                selector: self.extract_selector(description, &lower),
            }
        } else if contains_any(&lower, TYPE_WORDS) {
            ParsedAction::Type {
                selector: self.extract_selector(description, &lower),
                text: self.extract_text(description, &lower),
            }
        } else if contains_any(&lower, NAVIGATE_WORDS) {
            ParsedAction::Navigate {
                url: self.extract_url(description, &lower),
            }
        } else if contains_any(&lower, WAIT_WORDS) {
            ParsedAction::Wait {
                seconds: self.extract_wait_secs(description),
            }
        } else if contains_any(&lower, SCROLL_WORDS) {
            ParsedAction::Scroll {
                direction: if lower.contains("down") {
                    ScrollDirection::Down
                } else {
                    ScrollDirection::Up
                },
            }
        } else {
            ParsedAction::Unrecognized {
                raw: description.to_string(),
            }
        }
    }

    fn extract_selector(&self, description: &str, lower: &str) -> String {
        for pattern in &self.selector_patterns {
            if let Some(caps) = pattern.captures(description) {
                return caps[1].to_string();
            }
        }

        for (keyword, selector) in SELECTOR_FALLBACKS {
            if lower.contains(keyword) {
                return selector.to_string();
            }
        }

        GENERIC_SELECTOR.to_string()
    }

    fn extract_text(&self, description: &str, lower: &str) -> String {
        if let Some(caps) = self.quoted.captures(description) {
            return caps[1].to_string();
        }

        for (keyword, value) in TEXT_FALLBACKS {
            if lower.contains(keyword) {
                return value.to_string();
            }
        }

        GENERIC_TEXT.to_string()
    }

    fn extract_url(&self, description: &str, lower: &str) -> String {
        if let Some(m) = self.absolute_url.find(description) {
            return m.as_str().to_string();
        }

        if let Some(m) = self.url_path.find(description) {
            return format!("{}{}", self.base_url, m.as_str());
        }

        for (keyword, path) in URL_FALLBACKS {
            if lower.contains(keyword) {
                return format!("{}{}", self.base_url, path);
            }
        }

        self.base_url.clone()
    }

    fn extract_wait_secs(&self, description: &str) -> f64 {
        for (pattern, multiplier) in &self.wait_patterns {
            if let Some(caps) = pattern.captures(description) {
                if let Ok(value) = caps[1].parse::<f64>() {
                    return value * multiplier;
                }
            }
        }
        self.default_wait_secs
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn interpreter() -> ActionInterpreter {
        ActionInterpreter::new(&DemoConfig::default())
    }

    #[test]
    fn interpretation_is_deterministic() {
        let it = interpreter();
        let a = it.interpret("Click on the login button");
        let b = it.interpret("Click on the login button");
        assert_eq!(a, b);
    }

    #[test]
    fn click_on_login_button() {
        let action = interpreter().interpret("Click on the login button");
        assert_eq!(
            action,
            ParsedAction::Click {
                selector: r#"input[type="email"], input[name="email"], input[name="username"]"#
                    .into()
            }
        );
    }

    #[test]
    fn type_with_quoted_text() {
        let action = interpreter().interpret("Enter email 'a@b.com'");
        match action {
            ParsedAction::Type { text, .. } => assert_eq!(text, "a@b.com"),
            other => panic!("expected type action, got {other:?}"),
        }
    }

    #[test]
    fn navigate_to_path() {
        let action = interpreter().interpret("Navigate to /dashboard");
        assert_eq!(
            action,
            ParsedAction::Navigate {
                url: "http://localhost:3000/dashboard".into()
            }
        );
    }

    #[test]
    fn navigate_absolute_url_wins() {
        let action = interpreter().interpret("Visit https://example.com/pricing now");
        assert_eq!(
            action,
            ParsedAction::Navigate {
                url: "https://example.com/pricing".into()
            }
        );
    }

    #[test]
    fn navigate_keyword_fallback_and_bare_base() {
        let it = interpreter();
        assert_eq!(
            it.interpret("Go to the dashboard"),
            ParsedAction::Navigate {
                url: "http://localhost:3000/dashboard".into()
            }
        );
        assert_eq!(
            it.interpret("Open the page"),
            ParsedAction::Navigate {
                url: "http://localhost:3000".into()
            }
        );
    }

    #[test]
    fn wait_in_seconds_and_minutes() {
        let it = interpreter();
        assert_eq!(
            it.interpret("Wait 5 seconds"),
            ParsedAction::Wait { seconds: 5.0 }
        );
        assert_eq!(
            it.interpret("Wait 2 minutes"),
            ParsedAction::Wait { seconds: 120.0 }
        );
        assert_eq!(
            it.interpret("Pause briefly"),
            ParsedAction::Wait { seconds: 2.0 }
        );
    }

    #[test]
    fn scroll_direction_defaults_up() {
        let it = interpreter();
        assert_eq!(
            it.interpret("Scroll down the page"),
            ParsedAction::Scroll {
                direction: ScrollDirection::Down
            }
        );
        assert_eq!(
            it.interpret("Scroll to the top"),
            ParsedAction::Scroll {
                direction: ScrollDirection::Up
            }
        );
    }

    #[test]
    fn quoted_label_after_role_word_is_preferred() {
        let action = interpreter().interpret(r#"Click the button "Sign up" on the page"#);
        assert_eq!(
            action,
            ParsedAction::Click {
                selector: "Sign up".into()
            }
        );
    }

    #[test]
    fn bare_quoted_string_is_used_as_selector() {
        let action = interpreter().interpret(r#"Click 'Get started'"#);
        assert_eq!(
            action,
            ParsedAction::Click {
                selector: "Get started".into()
            }
        );
    }

    #[test]
    fn id_token_is_extracted() {
        let action = interpreter().interpret("Click #signup-cta");
        assert_eq!(
            action,
            ParsedAction::Click {
                selector: "signup-cta".into()
            }
        );
    }

    #[test]
    fn selector_keyword_fallbacks() {
        let it = interpreter();
        assert_eq!(
            it.interpret("Click the submit area"),
            ParsedAction::Click {
                selector: r#"button[type="submit"], input[type="submit"]"#.into()
            }
        );
        assert_eq!(
            it.interpret("Tap the menu"),
            ParsedAction::Click {
                selector: "nav, .menu, .navigation".into()
            }
        );
    }

    #[test]
    fn generic_selector_keeps_interpreter_total() {
        let action = interpreter().interpret("Click somewhere");
        assert_eq!(
            action,
            ParsedAction::Click {
                selector: GENERIC_SELECTOR.into()
            }
        );
    }

    #[test]
    fn type_text_fallbacks() {
        let it = interpreter();
        let password = it.interpret("Enter the password");
        match password {
            ParsedAction::Type { text, .. } => assert_eq!(text, "demo123"),
            other => panic!("expected type action, got {other:?}"),
        }
        let generic = it.interpret("Fill in the comment box");
        match generic {
            ParsedAction::Type { text, .. } => assert_eq!(text, "demo"),
            other => panic!("expected type action, got {other:?}"),
        }
    }

    #[test]
    fn unknown_descriptions_are_unrecognized_not_errors() {
        let action = interpreter().interpret("Admire the landing page");
        assert_eq!(
            action,
            ParsedAction::Unrecognized {
                raw: "Admire the landing page".into()
            }
        );
    }
}
