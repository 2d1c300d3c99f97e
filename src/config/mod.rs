//! Widget configuration
//!
//! This module provides:
//! - `WidgetInputs` / `PersistValue` - The host's configuration bag
//! - `InputProvider` - Seam for obtaining inputs without ambient globals
//! - `InputCell` / `InputHandle` - Watch-backed input source for late hosts
//! - `SessionConfig` - Per-instance mutable session state

pub mod inputs;
pub mod session;

pub use inputs::{
    parse_persist, InputCell, InputHandle, InputProvider, PersistValue, StaticInputs,
    WidgetInputs,
};
pub use session::SessionConfig;
