//! Backend catalog: which cloud variant to talk to and where it lives.

use std::fmt;
use std::str::FromStr;

use crate::AgentError;

/// Cloud variant an agent backend belongs to.
///
/// The three sample backends expose the same protocol and differ only in
/// address and branding, so the variant is configuration, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Azure,
    Gcp,
}

impl Provider {
    /// Display name used in banners and the failure notice.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Azure => "Azure",
            Provider::Gcp => "GCP",
        }
    }

    /// Tagline shown under the banner, matching each sample's branding.
    pub fn tagline(&self) -> &'static str {
        match self {
            Provider::Aws => "Amazon Bedrock 기반 AI Agent 샘플",
            Provider::Azure => "Azure OpenAI + Azure AI Search 패턴 샘플",
            Provider::Gcp => "Vertex AI Agent Engine 기반 멀티 에이전트 패턴 샘플 (모킹)",
        }
    }

    /// Default address for local runs of the sample backends.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Aws => "http://localhost:8080",
            Provider::Azure => "http://localhost:8081",
            Provider::Gcp => "http://localhost:8082",
        }
    }

    /// Example queries shown on the welcome screen. The first three exercise
    /// the backend tools, the rest its knowledge base.
    pub fn example_queries(&self) -> &'static [&'static str] {
        match self {
            Provider::Aws => &[
                "5 + 3 계산해줘",
                "현재 날씨 알려줘",
                "지금 몇 시야?",
                "Bedrock에 대해 알려줘",
                "RAG가 뭐야?",
            ],
            Provider::Azure => &[
                "5 + 3 계산해줘",
                "현재 날씨 알려줘",
                "지금 몇 시야?",
                "Azure OpenAI에 대해 알려줘",
                "Logic Apps가 뭐야?",
            ],
            Provider::Gcp => &[
                "5 + 3 계산해줘",
                "현재 날씨 알려줘",
                "지금 몇 시야?",
                "Vertex AI에 대해 알려줘",
                "Agent Engine이 뭐야?",
            ],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Provider {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Provider::Aws),
            "azure" => Ok(Provider::Azure),
            "gcp" => Ok(Provider::Gcp),
            other => Err(AgentError::ConfigError(format!(
                "unknown provider '{other}' (expected aws, azure, or gcp)"
            ))),
        }
    }
}

/// Where one agent backend lives, plus the user-facing copy tied to it.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub provider: Provider,
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(provider: Provider, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { provider, base_url }
    }

    /// Config pointing at the provider's default local address.
    pub fn for_provider(provider: Provider) -> Self {
        Self::new(provider, provider.default_base_url())
    }

    /// Resolve from explicit overrides and the environment.
    ///
    /// Precedence, per field:
    /// 1. the `provider` / `endpoint` arguments (CLI flags)
    /// 2. `NIMBUS_PROVIDER` / `NIMBUS_ENDPOINT` env vars
    /// 3. the AWS variant at its default local address
    pub fn resolve(
        provider: Option<Provider>,
        endpoint: Option<&str>,
    ) -> Result<Self, AgentError> {
        let provider = match provider {
            Some(p) => p,
            None => match std::env::var("NIMBUS_PROVIDER") {
                Ok(value) => value.parse()?,
                Err(_) => Provider::Aws,
            },
        };
        let base_url = match endpoint {
            Some(url) => url.to_string(),
            None => std::env::var("NIMBUS_ENDPOINT")
                .unwrap_or_else(|_| provider.default_base_url().to_string()),
        };
        Ok(Self::new(provider, base_url))
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/agent/chat", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/agent/health", self.base_url)
    }

    /// Fixed notice appended to the transcript when a turn fails.
    pub fn failure_notice(&self) -> String {
        format!(
            "죄송합니다. 오류가 발생했습니다. {} 백엔드 서버가 실행 중인지 확인해주세요.",
            self.provider.display_name()
        )
    }
}
