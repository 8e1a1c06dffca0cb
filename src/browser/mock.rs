use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::browser::session::{BrowserSession, ElementHandle, SessionError};

/// In-memory browser session for tests and dry runs. Records every call in
/// order, resolves only selectors and text targets registered up front, and
/// can be flipped into a fatal state mid-run.
pub struct MockSession {
    inner: Mutex<Inner>,
}

struct Inner {
    known_selectors: HashSet<String>,
    text_targets: HashSet<String>,
    calls: Vec<String>,
    fail_navigation: bool,
    fatal: bool,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                known_selectors: HashSet::new(),
                text_targets: HashSet::new(),
                calls: Vec::new(),
                fail_navigation: false,
                fatal: false,
            }),
        }
    }

    /// Register a selector that `find` and `fill` will resolve.
    pub fn with_selector(self, selector: impl Into<String>) -> Self {
        self.lock().known_selectors.insert(selector.into());
        self
    }

    /// Register visible text that `click_text` will match.
    pub fn with_text_target(self, text: impl Into<String>) -> Self {
        self.lock().text_targets.insert(text.into());
        self
    }

    /// Make every `goto` fail with a navigation error.
    pub fn failing_navigation(self) -> Self {
        self.lock().fail_navigation = true;
        self
    }

    /// Simulate losing the browser: every later call fails fatally.
    pub fn go_fatal(&self) {
        self.lock().fatal = true;
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while a guard is held must not wedge later calls.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: String) -> Result<(), SessionError> {
        let mut inner = self.lock();
        if inner.fatal {
            return Err(SessionError::Fatal("mock session closed".into()));
        }
        inner.calls.push(call);
        Ok(())
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrowserSession for MockSession {
    async fn goto(&self, url: &str) -> Result<(), SessionError> {
        self.record(format!("goto {url}"))?;
        if self.lock().fail_navigation {
            return Err(SessionError::Navigation(format!("cannot reach {url}")));
        }
        Ok(())
    }

    async fn find(&self, selector: &str) -> Result<Option<ElementHandle>, SessionError> {
        self.record(format!("find {selector}"))?;
        let known = self.lock().known_selectors.contains(selector);
        Ok(known.then(|| ElementHandle::new(selector)))
    }

    async fn click(&self, handle: &ElementHandle) -> Result<(), SessionError> {
        self.record(format!("click {}", handle.as_str()))
    }

    async fn click_text(&self, text: &str) -> Result<bool, SessionError> {
        self.record(format!("click_text {text}"))?;
        Ok(self.lock().text_targets.contains(text))
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<bool, SessionError> {
        self.record(format!("fill {selector} = {text}"))?;
        Ok(self.lock().known_selectors.contains(selector))
    }

    async fn scroll_by(&self, dx: i64, dy: i64) -> Result<(), SessionError> {
        self.record(format!("scroll_by {dx},{dy}"))
    }

    async fn wait_for_load(&self) -> Result<(), SessionError> {
        self.record("wait_for_load".to_string())
    }
}
