use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::browser::session::{BrowserSession, SessionError};
use crate::config::DemoConfig;
use crate::interpreter::{ParsedAction, ScrollDirection};

/// Append-only record of one executed (or attempted) automation step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionHistoryEntry {
    pub description: String,
    pub resolved_action: ParsedAction,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub error: Option<String>,
}

/// Action-level execution failures. Everything here except a fatal session
/// error is absorbed by the caller: logged, recorded, and the run moves on.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExecError {
    #[error("no element matched selector '{0}'")]
    ElementNotFound(String),

    #[error("cannot interpret step: {0}")]
    CannotInterpret(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ExecError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExecError::Session(err) if err.is_fatal())
    }
}

/// Executes structured actions against the single live browser session.
/// Calls are not reentrant; the orchestrator serializes them.
pub struct BrowserExecutor {
    session: Arc<dyn BrowserSession>,
    config: DemoConfig,
    history: Arc<Mutex<Vec<ActionHistoryEntry>>>,
}

impl BrowserExecutor {
    pub fn new(
        session: Arc<dyn BrowserSession>,
        config: DemoConfig,
        history: Arc<Mutex<Vec<ActionHistoryEntry>>>,
    ) -> Self {
        Self {
            session,
            config,
            history,
        }
    }

    /// Execute one action. Every call appends exactly one history entry,
    /// success or not.
    pub async fn execute(
        &self,
        action: &ParsedAction,
        description: &str,
    ) -> Result<(), ExecError> {
        info!("executing action [{}]: {description}", action.kind());

        let result = self.dispatch(action).await;

        let entry = ActionHistoryEntry {
            description: description.to_string(),
            resolved_action: action.clone(),
            timestamp: Utc::now(),
            success: result.is_ok(),
            error: result.as_ref().err().map(|e| e.to_string()),
        };
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);

        if let Err(err) = &result {
            warn!("action failed: {description}: {err}");
        }
        result
    }

    async fn dispatch(&self, action: &ParsedAction) -> Result<(), ExecError> {
        match action {
            ParsedAction::Click { selector } => self.click(selector).await,
            ParsedAction::Type { selector, text } => self.type_into(selector, text).await,
            ParsedAction::Navigate { url } => self.navigate(url).await,
            ParsedAction::Wait { seconds } => {
                tokio::time::sleep(Duration::from_secs_f64(seconds.max(0.0))).await;
                Ok(())
            }
            ParsedAction::Scroll { direction } => self.scroll(*direction).await,
            ParsedAction::Unrecognized { raw } => Err(ExecError::CannotInterpret(raw.clone())),
        }
    }

    async fn click(&self, selector: &str) -> Result<(), ExecError> {
        if let Some(handle) = self.session.find(selector).await? {
            self.session.click(&handle).await?;
        } else if !self.session.click_text(selector).await? {
            // Neither a selector nor a visible-text match.
            return Err(ExecError::ElementNotFound(selector.to_string()));
        }
        self.settle(self.config.click_settle_ms).await;
        Ok(())
    }

    async fn type_into(&self, selector: &str, text: &str) -> Result<(), ExecError> {
        if !self.session.fill(selector, text).await? {
            return Err(ExecError::ElementNotFound(selector.to_string()));
        }
        self.settle(self.config.type_settle_ms).await;
        Ok(())
    }

    async fn navigate(&self, url: &str) -> Result<(), ExecError> {
        self.session.goto(url).await?;
        self.session.wait_for_load().await?;
        Ok(())
    }

    async fn scroll(&self, direction: ScrollDirection) -> Result<(), ExecError> {
        let dy = match direction {
            ScrollDirection::Down => self.config.scroll_step_px,
            ScrollDirection::Up => -self.config.scroll_step_px,
        };
        self.session.scroll_by(0, dy).await?;
        self.settle(self.config.scroll_settle_ms).await;
        Ok(())
    }

    async fn settle(&self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
