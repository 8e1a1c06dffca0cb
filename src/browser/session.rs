use async_trait::async_trait;

/// Opaque element reference minted by a session's `find`. Only meaningful to
/// the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Failures surfaced by a browser session. Only `Fatal` ends a run; the
/// rest are absorbed at the action level.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("operation timed out: {0}")]
    Timeout(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("browser session lost: {0}")]
    Fatal(String),
}

impl SessionError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SessionError::Fatal(_))
    }
}

/// Capability interface over the single live browser session a demo runs
/// against. The engine never touches a browser library directly; a concrete
/// adapter (headless driver, remote bridge) implements this trait.
///
/// Operations carry an implicit timeout on the adapter side. Callers must
/// serialize access: the session is exclusively owned while an operation
/// runs.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Navigate to a URL. Resolves once the navigation is issued.
    async fn goto(&self, url: &str) -> Result<(), SessionError>;

    /// Look up an element by CSS selector. `None` means no match, which is
    /// not an error.
    async fn find(&self, selector: &str) -> Result<Option<ElementHandle>, SessionError>;

    /// Click a previously found element.
    async fn click(&self, handle: &ElementHandle) -> Result<(), SessionError>;

    /// Click an element by its visible text. `false` means nothing matched.
    async fn click_text(&self, text: &str) -> Result<bool, SessionError>;

    /// Clear a field and type text into it. `false` means the selector
    /// matched nothing.
    async fn fill(&self, selector: &str, text: &str) -> Result<bool, SessionError>;

    /// Scroll the viewport by the given pixel deltas.
    async fn scroll_by(&self, dx: i64, dy: i64) -> Result<(), SessionError>;

    /// Wait for the current page to reach its load/network-idle signal.
    async fn wait_for_load(&self) -> Result<(), SessionError>;
}
