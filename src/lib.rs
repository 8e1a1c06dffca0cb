//! demopilot - synchronized product demos.
//!
//! Takes a generated narration plan and a generated list of free-text
//! automation steps, weaves them into a single timed timeline, and plays it
//! back with two loosely synchronized flows: a narration clock cueing an
//! avatar renderer, and an automation actor driving a browser session.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use demopilot::avatar::LogAvatar;
//! use demopilot::browser::MockSession;
//! use demopilot::config::DemoConfig;
//! use demopilot::models::NarrationSection;
//! use demopilot::orchestrator::DemoController;
//! use demopilot::timeline::build_timeline;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = DemoConfig::default();
//! let sections = vec![NarrationSection::new(
//!     "Introduction",
//!     30.0,
//!     "Welcome to our demo. Let me show you how the system works.",
//! )
//! .with_demo_steps(vec!["Open the application".into()])];
//! let steps = vec!["Click on the login button".to_string()];
//!
//! let timeline = build_timeline(&sections, &steps, &config)?;
//! let controller = DemoController::new(config, Arc::new(LogAvatar));
//! controller.start(timeline, Arc::new(MockSession::new())).await?;
//! let status = controller.join().await?;
//! println!("run finished: {}", status.as_str());
//! # Ok(())
//! # }
//! ```

pub mod avatar;
pub mod browser;
pub mod config;
pub mod embed;
pub mod interpreter;
pub mod models;
pub mod orchestrator;
pub mod timeline;

pub use avatar::{AvatarRenderer, LogAvatar, NullAvatar, SegmentCue};
pub use browser::{
    ActionHistoryEntry, BrowserExecutor, BrowserSession, ElementHandle, ExecError, MockSession,
    SessionError,
};
pub use config::DemoConfig;
pub use embed::generate_embed_code;
pub use interpreter::{ActionInterpreter, ParsedAction, ScrollDirection};
pub use models::{DemoAction, Gesture, NarrationSection, Segment, Timeline};
pub use orchestrator::{DemoController, RunStatus, SignalTable, StatusSnapshot};
