//! Persisted widget state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::ChatMessage;

/// The value the controller persists under its namespace after every mutation
///
/// This is the full session state the host widget needs to re-render: the
/// message history plus the identifiers of the active chat and agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub messages: Vec<ChatMessage>,
    pub chat_id: String,
    pub agent_id: String,

    /// When this snapshot was written
    pub updated_at: DateTime<Utc>,
}

impl StateSnapshot {
    /// Build a snapshot stamped with the current time
    pub fn new(
        messages: Vec<ChatMessage>,
        chat_id: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            messages,
            chat_id: chat_id.into(),
            agent_id: agent_id.into(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_round_trips() {
        let snapshot = StateSnapshot::new(vec![ChatMessage::user("hi")], "chat-1", "agent-1");
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: StateSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back.chat_id, "chat-1");
        assert_eq!(back.agent_id, "agent-1");
        assert_eq!(back.messages, vec![ChatMessage::user("hi")]);
    }
}
