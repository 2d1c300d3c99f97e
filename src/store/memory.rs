//! In-memory state store
//!
//! Process-lifetime key-value store. The persist flag is recorded but does
//! not change behavior here; everything lives until the process exits.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::WidgetResult;

use super::snapshot::StateSnapshot;
use super::StateStore;

#[derive(Debug)]
struct StoredEntry {
    snapshot: StateSnapshot,
    durable: bool,
    writes: usize,
}

/// `StateStore` backed by a process-local map
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The persist flag recorded by the most recent write to a namespace
    pub async fn last_persist_flag(&self, namespace: &str) -> Option<bool> {
        self.entries
            .read()
            .await
            .get(namespace)
            .map(|entry| entry.durable)
    }

    /// How many writes a namespace has received
    pub async fn write_count(&self, namespace: &str) -> usize {
        self.entries
            .read()
            .await
            .get(namespace)
            .map(|entry| entry.writes)
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl StateStore for MemoryStateStore {
    async fn put(
        &self,
        namespace: &str,
        snapshot: &StateSnapshot,
        persist: bool,
    ) -> WidgetResult<()> {
        let mut entries = self.entries.write().await;
        let writes = entries.get(namespace).map(|e| e.writes).unwrap_or(0) + 1;
        entries.insert(
            namespace.to_string(),
            StoredEntry {
                snapshot: snapshot.clone(),
                durable: persist,
                writes,
            },
        );
        tracing::debug!(
            "[StateStore] Wrote {} ({} messages, durable: {})",
            namespace,
            snapshot.messages.len(),
            persist
        );
        Ok(())
    }

    async fn get(&self, namespace: &str) -> WidgetResult<Option<StateSnapshot>> {
        Ok(self
            .entries
            .read()
            .await
            .get(namespace)
            .map(|entry| entry.snapshot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ChatMessage;

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStateStore::new();
        let snapshot = StateSnapshot::new(vec![ChatMessage::user("hi")], "chat-1", "");

        store.put("ChatWidget", &snapshot, true).await.unwrap();

        let loaded = store.get("ChatWidget").await.unwrap().unwrap();
        assert_eq!(loaded.chat_id, "chat-1");
        assert_eq!(loaded.messages.len(), 1);
        assert_eq!(store.last_persist_flag("ChatWidget").await, Some(true));
    }

    #[tokio::test]
    async fn test_get_missing_namespace() {
        let store = MemoryStateStore::new();
        assert!(store.get("ChatWidget").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_is_last_writer_wins() {
        let store = MemoryStateStore::new();
        let first = StateSnapshot::new(vec![], "chat-1", "");
        let second = StateSnapshot::new(vec![ChatMessage::bot("hello")], "chat-2", "a1");

        store.put("ChatWidget", &first, true).await.unwrap();
        store.put("ChatWidget", &second, false).await.unwrap();

        let loaded = store.get("ChatWidget").await.unwrap().unwrap();
        assert_eq!(loaded.chat_id, "chat-2");
        assert_eq!(store.last_persist_flag("ChatWidget").await, Some(false));
        assert_eq!(store.write_count("ChatWidget").await, 2);
    }
}
