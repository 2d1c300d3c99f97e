//! File-backed state store
//!
//! Durable writes land as pretty-printed JSON under a base directory, one
//! file per namespace. Ephemeral writes (persist flag off) stay in a
//! process-local map, mirroring the host platform's session-scoped storage.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::core::WidgetResult;

use super::snapshot::StateSnapshot;
use super::StateStore;

/// Default directory for durable widget state
const STATE_DIR: &str = "widget-state";

/// `StateStore` that writes durable state to disk
#[derive(Debug)]
pub struct FileStateStore {
    base_dir: PathBuf,
    ephemeral: RwLock<HashMap<String, StateSnapshot>>,
}

impl FileStateStore {
    /// Create a store rooted at the default directory
    pub fn new() -> Self {
        Self::with_dir(STATE_DIR)
    }

    /// Create a store rooted at a custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: dir.into(),
            ephemeral: RwLock::new(HashMap::new()),
        }
    }

    /// Path of the durable file for a namespace
    pub fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", namespace))
    }

    fn ensure_base_dir(&self) -> WidgetResult<&Path> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir)?;
        }
        Ok(&self.base_dir)
    }

    fn load_durable(&self, namespace: &str) -> WidgetResult<Option<StateSnapshot>> {
        let path = self.namespace_path(namespace);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let snapshot: StateSnapshot = serde_json::from_reader(reader)?;
        Ok(Some(snapshot))
    }
}

impl Default for FileStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StateStore for FileStateStore {
    async fn put(
        &self,
        namespace: &str,
        snapshot: &StateSnapshot,
        persist: bool,
    ) -> WidgetResult<()> {
        if persist {
            self.ensure_base_dir()?;
            let path = self.namespace_path(namespace);

            let file = File::create(&path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, snapshot)?;

            // The durable value is now the newest; drop any stale ephemeral one
            self.ephemeral.write().await.remove(namespace);
            tracing::debug!("[StateStore] Wrote {} to {:?}", namespace, path);
        } else {
            self.ephemeral
                .write()
                .await
                .insert(namespace.to_string(), snapshot.clone());
            tracing::debug!("[StateStore] Wrote {} to ephemeral map", namespace);
        }
        Ok(())
    }

    async fn get(&self, namespace: &str) -> WidgetResult<Option<StateSnapshot>> {
        if let Some(snapshot) = self.ephemeral.read().await.get(namespace) {
            return Ok(Some(snapshot.clone()));
        }
        self.load_durable(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ChatMessage;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStateStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStateStore::with_dir(temp_dir.path());
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_durable_put_survives_reopen() {
        let (store, temp) = create_test_store();
        let snapshot = StateSnapshot::new(vec![ChatMessage::user("hi")], "chat-1", "a1");

        store.put("ChatWidget", &snapshot, true).await.unwrap();

        // A fresh store over the same directory sees the value
        let reopened = FileStateStore::with_dir(temp.path());
        let loaded = reopened.get("ChatWidget").await.unwrap().unwrap();
        assert_eq!(loaded.chat_id, "chat-1");
        assert_eq!(loaded.messages, vec![ChatMessage::user("hi")]);
    }

    #[tokio::test]
    async fn test_ephemeral_put_does_not_touch_disk() {
        let (store, temp) = create_test_store();
        let snapshot = StateSnapshot::new(vec![], "chat-1", "");

        store.put("ChatWidget", &snapshot, false).await.unwrap();

        assert!(!store.namespace_path("ChatWidget").exists());
        assert!(store.get("ChatWidget").await.unwrap().is_some());

        // And a fresh store sees nothing
        let reopened = FileStateStore::with_dir(temp.path());
        assert!(reopened.get("ChatWidget").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_durable_write_supersedes_ephemeral() {
        let (store, _temp) = create_test_store();
        let first = StateSnapshot::new(vec![], "ephemeral", "");
        let second = StateSnapshot::new(vec![], "durable", "");

        store.put("ChatWidget", &first, false).await.unwrap();
        store.put("ChatWidget", &second, true).await.unwrap();

        let loaded = store.get("ChatWidget").await.unwrap().unwrap();
        assert_eq!(loaded.chat_id, "durable");
    }

    #[tokio::test]
    async fn test_get_missing_namespace() {
        let (store, _temp) = create_test_store();
        assert!(store.get("ChatWidget").await.unwrap().is_none());
    }
}
