use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the chat history
///
/// Matches the `{sender, text}` shape the host widget renders and the state
/// store persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Create a new bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);

        let json = serde_json::to_string(&ChatMessage::bot("hello")).unwrap();
        assert_eq!(json, r#"{"sender":"bot","text":"hello"}"#);
    }

    #[test]
    fn test_message_round_trips() {
        let msg: ChatMessage = serde_json::from_str(r#"{"sender":"bot","text":"hey"}"#).unwrap();
        assert_eq!(msg, ChatMessage::bot("hey"));
    }
}
