pub mod config;
pub mod core;
pub mod remote;
pub mod session;
pub mod store;

// Optional components
pub mod logging;

// Convenience re-exports for the common embedding path
pub use config::{InputCell, InputProvider, SessionConfig, StaticInputs, WidgetInputs};
pub use crate::core::{WidgetError, WidgetResult};
pub use remote::{AgentDirectory, AgentRef, ChatService};
pub use session::{ChatMessage, ChatSessionController, ControllerOptions, LoadResult, Sender};
pub use store::{StateSnapshot, StateStore};
