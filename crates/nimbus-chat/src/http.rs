//! HTTP implementation of the agent endpoint, plus the health probe.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EndpointConfig;
use crate::{AgentEndpoint, AgentError, AgentReply, TurnRequest};

/// Backend health probe reply (`GET /api/agent/health`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Agent backend reached over HTTP.
///
/// The client sets no request timeout: a hung backend leaves the turn
/// outstanding instead of failing it.
pub struct HttpAgentClient {
    config: EndpointConfig,
    http: reqwest::Client,
}

impl HttpAgentClient {
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Probe the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, AgentError> {
        let response = self
            .http
            .get(self.config.health_url())
            .send()
            .await
            .map_err(|e| AgentError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AgentError::ApiError(format!("HTTP {status}: {text}")));
        }

        response
            .json()
            .await
            .map_err(|e| AgentError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl AgentEndpoint for HttpAgentClient {
    async fn send_turn(&self, turn: &TurnRequest) -> Result<AgentReply, AgentError> {
        debug!(url = %self.config.chat_url(), "agent chat request");

        let response = self
            .http
            .post(self.config.chat_url())
            .json(turn)
            .send()
            .await
            .map_err(|e| AgentError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AgentError::ApiError(format!("HTTP {status}: {text}")));
        }

        let reply: AgentReply = response
            .json()
            .await
            .map_err(|e| AgentError::ParseError(e.to_string()))?;

        // The backend always fills the reply text; an empty one means the
        // body was not a real agent reply.
        if reply.response.is_empty() {
            return Err(AgentError::ParseError("reply text is empty".into()));
        }

        Ok(reply)
    }
}
