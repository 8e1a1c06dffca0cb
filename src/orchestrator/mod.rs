pub mod automation;
pub mod controller;
pub mod narration;
pub mod state;

pub use controller::DemoController;
pub use state::{CurrentEventData, RunStatus, SignalTable, StatusSnapshot};
