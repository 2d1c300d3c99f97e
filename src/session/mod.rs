//! Chat session management
//!
//! This module provides `ChatSessionController` for managing one widget
//! instance's chat session: configuration sync, lazy session creation,
//! message history, and persistence.
//!
//! Each widget instance has its own controller; controllers are not shared
//! and do not coordinate with each other.

pub mod controller;
pub mod message;
pub mod options;

pub use controller::{ChatSessionController, LoadResult};
pub use message::{ChatMessage, Sender};
pub use options::{ControllerOptions, DEFAULT_NAMESPACE};
