//! Chat session service seam
//!
//! Abstracts the platform action that creates chat sessions so the controller
//! can run against the real HTTP backend, or against a mock in tests.

use anyhow::Result;

/// Parameters for creating a chat session
#[derive(Debug, Clone, Default)]
pub struct CreateSessionRequest {
    pub base_url: String,
    pub api_key: String,
    pub secret: String,
    pub project_id: String,
    pub agent_id: String,
    pub chat_name: String,
}

/// Response from session creation
///
/// A backend that omits `chat_id` is tolerated: the controller keeps its
/// prior id in that case.
#[derive(Debug, Clone, Default)]
pub struct CreateSessionResponse {
    pub chat_id: Option<String>,
}

/// Remote service that creates chat sessions
#[async_trait::async_trait]
pub trait ChatService: Send + Sync {
    /// Create a new chat session and return its id
    async fn create_session(&self, request: CreateSessionRequest)
        -> Result<CreateSessionResponse>;
}
