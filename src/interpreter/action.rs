use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

/// Structured, executable form of a free-text automation step.
///
/// `Unrecognized` is a value, not an error: the interpreter is total, and
/// callers branch on the variant instead of catching anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ParsedAction {
    Click { selector: String },
    Type { selector: String, text: String },
    Navigate { url: String },
    Wait { seconds: f64 },
    Scroll { direction: ScrollDirection },
    Unrecognized { raw: String },
}

impl ParsedAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedAction::Click { .. } => "click",
            ParsedAction::Type { .. } => "type",
            ParsedAction::Navigate { .. } => "navigate",
            ParsedAction::Wait { .. } => "wait",
            ParsedAction::Scroll { .. } => "scroll",
            ParsedAction::Unrecognized { .. } => "unrecognized",
        }
    }
}
