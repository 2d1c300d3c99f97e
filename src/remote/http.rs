//! HTTP-backed collaborator implementations
//!
//! The low-code platform fronts its chat backend with plain JSON-over-HTTP
//! actions. These implementations speak that protocol directly so the
//! controller can run outside the platform; inside it, embedders may supply
//! their own `ChatService`/`AgentDirectory` wrappers around host actions.
//!
//! # Authentication
//!
//! Every request carries the project's api key and secret as headers:
//!
//! ```text
//! X-Api-Key: <apiKey>
//! X-Api-Secret: <secret>
//! ```

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::directory::{
    ActivateAgentRequest, AgentDirectory, AgentListResponse, ListAgentsRequest,
};
use super::service::{ChatService, CreateSessionRequest, CreateSessionResponse};

const API_KEY_HEADER: &str = "X-Api-Key";
const API_SECRET_HEADER: &str = "X-Api-Secret";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateChatBody<'a> {
    project_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    agent_id: &'a str,
    chat_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateChatWire {
    chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivateAgentBody<'a> {
    project_id: &'a str,
}

// ============================================================================
// Chat service
// ============================================================================

/// `ChatService` speaking the platform's HTTP action protocol
///
/// Sessions are created with `POST {baseURL}/chats`.
pub struct HttpChatService {
    client: Client,
}

impl HttpChatService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use an existing reqwest client (shared connection pool)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ChatService for HttpChatService {
    async fn create_session(
        &self,
        request: CreateSessionRequest,
    ) -> Result<CreateSessionResponse> {
        let url = format!("{}/chats", request.base_url.trim_end_matches('/'));
        tracing::debug!("[ChatService] Creating session at {}", url);

        let body = CreateChatBody {
            project_id: &request.project_id,
            agent_id: &request.agent_id,
            chat_name: &request.chat_name,
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &request.api_key)
            .header(API_SECRET_HEADER, &request.secret)
            .json(&body)
            .send()
            .await
            .context("Failed to send create-chat request")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read create-chat response body")?;

        if !status.is_success() {
            tracing::error!("[ChatService] API error: {} - {}", status, response_text);
            anyhow::bail!("Chat service error ({}): {}", status, response_text);
        }

        let wire: CreateChatWire = serde_json::from_str(&response_text)
            .context("Failed to parse create-chat response")?;

        tracing::info!(
            "[ChatService] Session created: {}",
            wire.chat_id.as_deref().unwrap_or("<no id returned>")
        );

        Ok(CreateSessionResponse {
            chat_id: wire.chat_id,
        })
    }
}

// ============================================================================
// Agent directory
// ============================================================================

/// `AgentDirectory` speaking the platform's HTTP action protocol
///
/// Agents are listed with `GET {baseURL}/projects/{projectId}/agents` and
/// activated with `POST {baseURL}/chats/{chatId}/agents/{agentId}/activate`.
pub struct HttpAgentDirectory {
    client: Client,
}

impl HttpAgentDirectory {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use an existing reqwest client (shared connection pool)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpAgentDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AgentDirectory for HttpAgentDirectory {
    async fn list_agents(&self, request: ListAgentsRequest) -> Result<AgentListResponse> {
        let url = format!(
            "{}/projects/{}/agents",
            request.base_url.trim_end_matches('/'),
            request.project_id
        );
        tracing::debug!("[AgentDirectory] Listing agents at {}", url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &request.api_key)
            .header(API_SECRET_HEADER, &request.secret)
            .send()
            .await
            .context("Failed to send list-agents request")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read list-agents response body")?;

        if !status.is_success() {
            tracing::error!("[AgentDirectory] API error: {} - {}", status, response_text);
            anyhow::bail!("Agent directory error ({}): {}", status, response_text);
        }

        let list: AgentListResponse = serde_json::from_str(&response_text)
            .context("Failed to parse list-agents response")?;

        Ok(list)
    }

    async fn activate_agent(&self, request: ActivateAgentRequest) -> Result<()> {
        let url = format!(
            "{}/chats/{}/agents/{}/activate",
            request.base_url.trim_end_matches('/'),
            request.chat_id,
            request.agent_id
        );
        tracing::debug!("[AgentDirectory] Activating agent at {}", url);

        let body = ActivateAgentBody {
            project_id: &request.project_id,
        };

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &request.api_key)
            .header(API_SECRET_HEADER, &request.secret)
            .json(&body)
            .send()
            .await
            .context("Failed to send activate-agent request")?;

        let status = response.status();
        if !status.is_success() {
            let response_text = response.text().await.unwrap_or_default();
            tracing::error!("[AgentDirectory] API error: {} - {}", status, response_text);
            anyhow::bail!("Agent directory error ({}): {}", status, response_text);
        }

        tracing::info!("[AgentDirectory] Agent {} activated", request.agent_id);
        Ok(())
    }
}
