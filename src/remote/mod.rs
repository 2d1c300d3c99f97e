//! Remote collaborator seams
//!
//! This module provides:
//! - `ChatService` trait - Creates chat sessions
//! - `AgentDirectory` trait - Lists and activates agents
//! - `HttpChatService` / `HttpAgentDirectory` - reqwest-backed implementations
//!
//! The controller only sees the traits; hosts embed the HTTP implementations
//! or wrap their own platform actions.

pub mod directory;
pub mod http;
pub mod service;

pub use directory::{
    ActivateAgentRequest, AgentDirectory, AgentListResponse, AgentRecord, AgentRef,
    AgentsShape, ListAgentsRequest,
};
pub use http::{HttpAgentDirectory, HttpChatService};
pub use service::{ChatService, CreateSessionRequest, CreateSessionResponse};
