//! Transcript records.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::AgentReply;

/// Who a transcript entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Agent,
    Error,
}

/// An immutable transcript entry.
///
/// Entries are appended in order and never edited or reordered; only a
/// full reset removes them. Citations and the tool-used label are only
/// populated on `Agent` entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
    pub citations: Vec<String>,
    pub tool_used: Option<String>,
    pub metadata: Option<serde_json::Value>,
    /// Wall-clock label captured when the entry was created.
    pub timestamp: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::User,
            content: content.into(),
            citations: Vec::new(),
            tool_used: None,
            metadata: None,
            timestamp: now_label(),
        }
    }

    pub fn agent(reply: AgentReply) -> Self {
        Self {
            kind: MessageKind::Agent,
            content: reply.response,
            citations: reply.citations,
            tool_used: reply.tool_used,
            metadata: reply.metadata,
            timestamp: now_label(),
        }
    }

    pub fn error(notice: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            content: notice.into(),
            citations: Vec::new(),
            tool_used: None,
            metadata: None,
            timestamp: now_label(),
        }
    }
}

fn now_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
