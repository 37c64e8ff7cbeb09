//! Chat-session client for the cloud AI agent sample backends.
//!
//! Shared session core behind the AWS, Azure, and GCP demo fronts:
//! - Append-only transcript with structured agent replies (citations,
//!   tool-used markers, opaque metadata)
//! - Session-identifier continuity across turns
//! - A pure state-transition core, with the HTTP call as a separate effect
//! - Uniform classification of failures into displayable error messages

pub mod config;
pub mod http;
pub mod message;
pub mod session;
pub mod state;

use async_trait::async_trait;

pub use config::{EndpointConfig, Provider};
pub use http::{HealthStatus, HttpAgentClient};
pub use message::{Message, MessageKind};
pub use session::ChatSession;
pub use state::{ChatEvent, ChatState};

/// An agent backend that can process one chat turn.
#[async_trait]
pub trait AgentEndpoint: Send + Sync {
    async fn send_turn(&self, turn: &TurnRequest) -> Result<AgentReply, AgentError>;
}

/// One chat turn as sent to the agent backend.
///
/// `session_id` serializes as JSON `null` until the backend has assigned
/// one; every later turn of the conversation carries the assigned value.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub message: String,
    pub session_id: Option<String>,
}

/// Structured reply from the agent backend.
///
/// Only `response` is required; everything else defaults to absent/empty.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentReply {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub tool_used: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Config error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_request_serializes_absent_session_as_null() {
        let turn = TurnRequest {
            message: "안녕하세요".into(),
            session_id: None,
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "안녕하세요", "sessionId": null})
        );
    }

    #[test]
    fn turn_request_carries_assigned_session() {
        let turn = TurnRequest {
            message: "다시".into(),
            session_id: Some("abc123".into()),
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["sessionId"], "abc123");
    }

    #[test]
    fn agent_reply_defaults_optional_fields() {
        let reply: AgentReply = serde_json::from_str(r#"{"response":"8"}"#).unwrap();
        assert_eq!(reply.response, "8");
        assert!(reply.session_id.is_none());
        assert!(reply.citations.is_empty());
        assert!(reply.tool_used.is_none());
        assert!(reply.metadata.is_none());
    }

    #[test]
    fn agent_reply_requires_response_field() {
        let result = serde_json::from_str::<AgentReply>(r#"{"sessionId":"abc123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn agent_reply_parses_full_shape() {
        let reply: AgentReply = serde_json::from_str(
            r#"{
                "response": "계산 결과: 5 + 3 = 8",
                "sessionId": "abc123",
                "citations": ["[튜토리얼] Agent 시작하기"],
                "toolUsed": "calculator",
                "metadata": {"knowledgeFound": false}
            }"#,
        )
        .unwrap();
        assert_eq!(reply.session_id.as_deref(), Some("abc123"));
        assert_eq!(reply.citations.len(), 1);
        assert_eq!(reply.tool_used.as_deref(), Some("calculator"));
        assert_eq!(reply.metadata.unwrap()["knowledgeFound"], false);
    }
}
