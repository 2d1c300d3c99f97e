//! Agent directory seam
//!
//! The platform exposes agents per project and lets the widget activate one
//! for a chat. The list endpoint is loose about shape: depending on the
//! backend version, `agents` arrives as an array or as a keyed mapping of
//! records. [`AgentListResponse::normalize`] flattens both into one ordered
//! sequence.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;

/// A selectable agent, normalized for the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRef {
    pub code: String,
    pub name: String,
}

/// Raw agent record as the directory returns it
#[derive(Debug, Clone, Deserialize)]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
}

/// The two shapes the directory is known to return for `agents`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AgentsShape {
    List(Vec<AgentRecord>),
    Map(HashMap<String, AgentRecord>),
}

impl Default for AgentsShape {
    fn default() -> Self {
        AgentsShape::List(Vec::new())
    }
}

/// Response from the agent list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentListResponse {
    #[serde(default)]
    pub agents: AgentsShape,
}

impl AgentListResponse {
    /// Flatten either response shape into `AgentRef`s
    ///
    /// The list shape keeps its order. The mapping shape yields whatever
    /// order the collaborator's values iterate in; it is not guaranteed
    /// stable across calls.
    pub fn normalize(self) -> Vec<AgentRef> {
        let records = match self.agents {
            AgentsShape::List(list) => list,
            AgentsShape::Map(map) => map.into_values().collect(),
        };

        records
            .into_iter()
            .map(|record| AgentRef {
                code: record.id,
                name: record.name,
            })
            .collect()
    }
}

/// Parameters for listing a project's agents
#[derive(Debug, Clone, Default)]
pub struct ListAgentsRequest {
    pub base_url: String,
    pub project_id: String,
    pub api_key: String,
    pub secret: String,
}

/// Parameters for activating an agent on a chat
#[derive(Debug, Clone, Default)]
pub struct ActivateAgentRequest {
    pub base_url: String,
    pub chat_id: String,
    pub project_id: String,
    pub agent_id: String,
    pub api_key: String,
    pub secret: String,
}

/// Remote directory of agents
#[async_trait::async_trait]
pub trait AgentDirectory: Send + Sync {
    /// List the agents available to a project
    async fn list_agents(&self, request: ListAgentsRequest) -> Result<AgentListResponse>;

    /// Activate an agent for the given chat; side effect only
    async fn activate_agent(&self, request: ActivateAgentRequest) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_list_shape() {
        let response: AgentListResponse = serde_json::from_str(
            r#"{"agents":[{"id":"1","name":"Bot1"},{"id":"2","name":"Bot2"}]}"#,
        )
        .unwrap();

        let agents = response.normalize();
        assert_eq!(
            agents,
            vec![
                AgentRef {
                    code: "1".into(),
                    name: "Bot1".into()
                },
                AgentRef {
                    code: "2".into(),
                    name: "Bot2".into()
                },
            ]
        );
    }

    #[test]
    fn test_normalize_map_shape() {
        let response: AgentListResponse =
            serde_json::from_str(r#"{"agents":{"a":{"id":"1","name":"Bot1"}}}"#).unwrap();

        let agents = response.normalize();
        assert_eq!(
            agents,
            vec![AgentRef {
                code: "1".into(),
                name: "Bot1".into()
            }]
        );
    }

    #[test]
    fn test_normalize_missing_agents_field() {
        let response: AgentListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.normalize().is_empty());
    }
}
