//! Chat session controller
//!
//! `ChatSessionController` owns one session's state and glue: it syncs
//! configuration from the host, lazily creates a chat session, appends
//! messages, and writes a state snapshot after every mutation.
//!
//! Two error policies coexist here. `initialize` absorbs every failure into
//! a [`LoadResult`] so the widget never crashes on load; everything the user
//! triggers explicitly (`start_new_session`, `record_upload`,
//! `record_exchange`) propagates errors for the UI layer to surface.

use std::sync::Arc;

use crate::config::{InputProvider, SessionConfig};
use crate::core::WidgetResult;
use crate::remote::{
    ActivateAgentRequest, AgentDirectory, AgentRef, ChatService, CreateSessionRequest,
    ListAgentsRequest,
};
use crate::store::{StateSnapshot, StateStore};

use super::message::ChatMessage;
use super::options::ControllerOptions;

/// Outcome of the load path
///
/// `initialize` never returns `Err`; a failed or skipped bootstrap shows up
/// as `ok: false` with a clone of whatever partial state the controller
/// reached. Embedders that only care about the original fire-and-forget
/// behavior can ignore it.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub ok: bool,
    pub config: SessionConfig,
}

/// Controller for one chat widget instance
///
/// Holds the session state exclusively; operations take `&mut self` and the
/// caller is expected to await one operation before issuing the next. There
/// is no internal locking and no guard against two operations racing on the
/// message history.
pub struct ChatSessionController {
    config: SessionConfig,
    options: ControllerOptions,
    inputs: Arc<dyn InputProvider>,
    service: Arc<dyn ChatService>,
    directory: Arc<dyn AgentDirectory>,
    store: Arc<dyn StateStore>,
}

impl ChatSessionController {
    /// Create a controller with default options and an empty config
    ///
    /// The config fills in on the first `initialize` from the input provider.
    pub fn new(
        inputs: Arc<dyn InputProvider>,
        service: Arc<dyn ChatService>,
        directory: Arc<dyn AgentDirectory>,
        store: Arc<dyn StateStore>,
    ) -> Self {
        Self {
            config: SessionConfig::default(),
            options: ControllerOptions::default(),
            inputs,
            service,
            directory,
            store,
        }
    }

    /// Set the controller options
    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    /// Start from an existing config (e.g. a session restored by the host)
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// The current session config
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The in-memory message history
    pub fn messages(&self) -> &[ChatMessage] {
        &self.config.messages
    }

    /// The active chat id; empty until a session exists
    pub fn chat_id(&self) -> &str {
        &self.config.chat_id
    }

    /// The active agent id; empty until resolved
    pub fn agent_id(&self) -> &str {
        &self.config.agent_id
    }

    /// Load-time initialization; never fails
    ///
    /// Merges whatever inputs the host has published so far (fill-if-present),
    /// optionally bootstraps the agent selection, and ensures a chat session
    /// exists. See [`LoadResult`] for how failures are reported.
    pub async fn initialize(&mut self) -> LoadResult {
        let inputs = self.inputs.current().await;
        if let Some(inputs) = &inputs {
            self.config.merge_inputs(inputs);
        }
        self.load().await
    }

    /// Like [`initialize`](Self::initialize), but waits for the host to
    /// publish inputs first instead of proceeding with a partial config
    pub async fn initialize_when_ready(&mut self) -> LoadResult {
        let inputs = self.inputs.ready().await;
        self.config.merge_inputs(&inputs);
        self.load().await
    }

    async fn load(&mut self) -> LoadResult {
        match self.try_load().await {
            Ok(bootstrapped) => LoadResult {
                ok: bootstrapped,
                config: self.config.clone(),
            },
            Err(e) => {
                tracing::warn!(
                    "[ChatController] Load failed, continuing degraded: {}",
                    e
                );
                LoadResult {
                    ok: false,
                    config: self.config.clone(),
                }
            }
        }
    }

    /// The fallible part of the load path
    ///
    /// Returns `Ok(false)` for the quiet credentials bail, `Ok(true)` when
    /// the bootstrap ran to completion.
    async fn try_load(&mut self) -> WidgetResult<bool> {
        if self.options.require_credentials && !self.config.has_credentials() {
            tracing::debug!(
                "[ChatController] Credentials missing on load, skipping bootstrap"
            );
            return Ok(false);
        }

        if self.options.auto_select_agent {
            let agents = self.list_agents().await?;
            if let Some(first) = agents.first() {
                let code = first.code.clone();
                self.activate_agent(code).await?;
            }
        }

        if self.config.chat_id.is_empty() {
            let response = self.service.create_session(self.create_request()).await?;
            if let Some(id) = response.chat_id.filter(|id| !id.is_empty()) {
                self.config.chat_id = id;
            }

            self.persist(&[]).await?;
            self.config.messages = Vec::new();
        } else {
            // Re-affirmation write: same history, refreshed ids
            let messages = self.config.messages.clone();
            self.persist(&messages).await?;
        }

        Ok(true)
    }

    /// Start a fresh chat session, discarding the current history
    ///
    /// Unconditionally asks the chat service for a new session. If the
    /// response carries no id the prior `chat_id` stays in place. Errors
    /// propagate to the caller.
    pub async fn start_new_session(&mut self) -> WidgetResult<()> {
        let response = self.service.create_session(self.create_request()).await?;
        if let Some(id) = response.chat_id.filter(|id| !id.is_empty()) {
            self.config.chat_id = id;
        }

        self.persist(&[]).await?;
        self.config.messages = Vec::new();

        tracing::info!("[ChatController] New session: {}", self.config.chat_id);
        Ok(())
    }

    /// Record a user-originated message (uploads, attachments, etc.)
    ///
    /// Copy-on-write: the store sees the extended history before the
    /// in-memory history is replaced, so a failed write leaves the local
    /// state untouched.
    pub async fn record_upload(&mut self, text: impl Into<String>) -> WidgetResult<()> {
        self.append_and_persist(ChatMessage::user(text)).await
    }

    /// Record one user/bot exchange as two separate store writes
    ///
    /// The user message is persisted and committed first, then the bot
    /// message. A store observer sees the user message alone between the two
    /// writes, and a crash between them loses only the bot message. The two
    /// phases are not atomic.
    pub async fn record_exchange(
        &mut self,
        user_text: impl Into<String>,
        bot_text: impl Into<String>,
    ) -> WidgetResult<()> {
        self.append_and_persist(ChatMessage::user(user_text)).await?;
        self.append_and_persist(ChatMessage::bot(bot_text)).await?;
        Ok(())
    }

    /// Fetch and normalize the project's agents
    ///
    /// With the credentials guard enabled and credentials missing, returns
    /// an empty list without calling the directory.
    pub async fn list_agents(&self) -> WidgetResult<Vec<AgentRef>> {
        if self.options.require_credentials && !self.config.has_credentials() {
            return Ok(Vec::new());
        }

        let response = self
            .directory
            .list_agents(ListAgentsRequest {
                base_url: self.config.base_url.clone(),
                project_id: self.config.project_id.clone(),
                api_key: self.config.api_key.clone(),
                secret: self.config.secret.clone(),
            })
            .await?;

        Ok(response.normalize())
    }

    /// Make an agent the active one for this session
    ///
    /// The local assignment always happens; the remote activation call is
    /// skipped when the credentials guard is on and credentials are missing.
    pub async fn activate_agent(&mut self, agent_id: impl Into<String>) -> WidgetResult<()> {
        self.config.agent_id = agent_id.into();

        if self.options.require_credentials && !self.config.has_credentials() {
            tracing::debug!(
                "[ChatController] Credentials missing, skipping remote activation"
            );
            return Ok(());
        }

        self.directory
            .activate_agent(ActivateAgentRequest {
                base_url: self.config.base_url.clone(),
                chat_id: self.config.chat_id.clone(),
                project_id: self.config.project_id.clone(),
                agent_id: self.config.agent_id.clone(),
                api_key: self.config.api_key.clone(),
                secret: self.config.secret.clone(),
            })
            .await?;

        Ok(())
    }

    fn create_request(&self) -> CreateSessionRequest {
        CreateSessionRequest {
            base_url: self.config.base_url.clone(),
            api_key: self.config.api_key.clone(),
            secret: self.config.secret.clone(),
            project_id: self.config.project_id.clone(),
            agent_id: self.config.agent_id.clone(),
            chat_name: self.config.chat_name.clone(),
        }
    }

    async fn append_and_persist(&mut self, message: ChatMessage) -> WidgetResult<()> {
        let mut messages = self.config.messages.clone();
        messages.push(message);

        self.persist(&messages).await?;
        self.config.messages = messages;
        Ok(())
    }

    async fn persist(&self, messages: &[ChatMessage]) -> WidgetResult<()> {
        let snapshot = StateSnapshot::new(
            messages.to_vec(),
            self.config.chat_id.clone(),
            self.config.agent_id.clone(),
        );
        self.store
            .put(&self.options.namespace, &snapshot, self.config.persist)
            .await
    }
}
