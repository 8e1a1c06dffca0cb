pub mod executor;
pub mod mock;
pub mod session;

pub use executor::{ActionHistoryEntry, BrowserExecutor, ExecError};
pub use mock::MockSession;
pub use session::{BrowserSession, ElementHandle, SessionError};
