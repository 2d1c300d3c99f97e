//! Per-instance session configuration
//!
//! One `SessionConfig` lives inside each controller. It is built from the
//! host's inputs at load time and re-synced on every `initialize()`, with
//! host values winning only when they are actually present.

use serde::{Deserialize, Serialize};

use crate::session::ChatMessage;

use super::inputs::{parse_persist, WidgetInputs};

/// Mutable session state owned by one controller instance
///
/// Connection and display parameters come from the host's inputs; `agent_id`
/// and `chat_id` start empty and are filled in by the agent-selection and
/// session-creation flows. `messages` is append-only within a session and
/// reset to empty when a new session is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub base_url: String,
    pub api_key: String,
    pub secret: String,
    pub project_id: String,
    pub title: String,
    pub chat_name: String,
    pub text_color: String,

    /// Currently active agent; empty until resolved
    pub agent_id: String,

    /// Active chat session; empty until a session is created
    pub chat_id: String,

    /// Whether state store writes should be durable
    pub persist: bool,

    /// In-memory message history, insertion order
    pub messages: Vec<ChatMessage>,
}

impl SessionConfig {
    /// Build a fresh config from a host input bag
    pub fn from_inputs(inputs: &WidgetInputs) -> Self {
        let mut config = Self::default();
        config.merge_inputs(inputs);
        config
    }

    /// Merge host inputs into this config, fill-if-present
    ///
    /// A field present in `inputs` replaces the local value; an absent field
    /// leaves the local value alone. `agent_id`, `chat_id`, and `messages`
    /// are never touched here. The persist flag is only re-parsed when the
    /// host supplied one.
    pub fn merge_inputs(&mut self, inputs: &WidgetInputs) {
        if let Some(v) = &inputs.base_url {
            self.base_url = v.clone();
        }
        if let Some(v) = &inputs.api_key {
            self.api_key = v.clone();
        }
        if let Some(v) = &inputs.secret {
            self.secret = v.clone();
        }
        if let Some(v) = &inputs.project_id {
            self.project_id = v.clone();
        }
        if let Some(v) = &inputs.title {
            self.title = v.clone();
        }
        if let Some(v) = &inputs.chat_name {
            self.chat_name = v.clone();
        }
        if let Some(v) = &inputs.text_color {
            self.text_color = v.clone();
        }
        if inputs.persist.is_some() {
            self.persist = parse_persist(inputs.persist.as_ref());
        }
    }

    /// Whether the credentials needed for remote calls are all present
    pub fn has_credentials(&self) -> bool {
        !self.project_id.is_empty() && !self.api_key.is_empty() && !self.secret.is_empty()
    }
}
