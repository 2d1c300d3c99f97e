//! Core types for the chat widget SDK
//!
//! This module provides the fundamental types used throughout the crate:
//! - `WidgetError` / `WidgetResult` - Error types

pub mod error;

pub use error::{WidgetError, WidgetResult};
