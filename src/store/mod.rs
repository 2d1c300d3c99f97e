//! State store seam and implementations
//!
//! This module provides:
//! - `StateStore` trait - Namespace-keyed persistence with a durability flag
//! - `StateSnapshot` - The value the controller persists
//! - `MemoryStateStore` - Process-local store
//! - `FileStateStore` - Durable JSON files plus an ephemeral map

pub mod file;
pub mod memory;
pub mod snapshot;

use crate::core::WidgetResult;

pub use file::FileStateStore;
pub use memory::MemoryStateStore;
pub use snapshot::StateSnapshot;

/// Key-value persistence supplied to the controller
///
/// Writes are unconditional overwrites (last writer wins); there is no
/// optimistic concurrency check. The persist flag selects durable versus
/// session-scoped storage where the implementation distinguishes them.
#[async_trait::async_trait]
pub trait StateStore: Send + Sync {
    /// Store a snapshot under a namespace
    async fn put(
        &self,
        namespace: &str,
        snapshot: &StateSnapshot,
        persist: bool,
    ) -> WidgetResult<()>;

    /// Load the snapshot stored under a namespace, if any
    async fn get(&self, namespace: &str) -> WidgetResult<Option<StateSnapshot>>;
}
