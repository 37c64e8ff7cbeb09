//! Session driver: wires the transition core to an agent endpoint.

use tracing::{debug, warn};

use crate::config::EndpointConfig;
use crate::message::Message;
use crate::state::{ChatEvent, ChatState};
use crate::AgentEndpoint;

/// One live conversation against an agent backend.
///
/// Owns the [`ChatState`] and performs the HTTP effect emitted by the
/// submit transition. Failures never escape [`ChatSession::submit`]; they
/// land in the transcript as `error` messages with the backend's fixed
/// notice.
pub struct ChatSession {
    state: ChatState,
}

impl ChatSession {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            state: ChatState::new(config.failure_notice()),
        }
    }

    /// Replace the draft input. No side effects, no request.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.state.apply(ChatEvent::DraftEdited(text.into()));
    }

    /// Submit the current draft as one chat turn.
    ///
    /// A blank draft or an already-outstanding turn makes this a no-op and
    /// returns `None`. Otherwise the user message is appended before the
    /// request goes out, the endpoint's resolution is fed back into the
    /// state, and the appended reply (or error) message is returned.
    pub async fn submit(&mut self, endpoint: &dyn AgentEndpoint) -> Option<&Message> {
        let turn = self.state.apply(ChatEvent::SubmitPressed)?;

        debug!(session = ?turn.session_id, "sending chat turn");
        let outcome = match endpoint.send_turn(&turn).await {
            Ok(reply) => ChatEvent::ReplyArrived(reply),
            Err(err) => {
                warn!(error = %err, "chat turn failed");
                ChatEvent::TurnFailed
            }
        };
        self.state.apply(outcome);
        self.state.transcript().last()
    }

    /// Convenience for line-oriented fronts: edit the draft, then submit.
    pub async fn send(
        &mut self,
        endpoint: &dyn AgentEndpoint,
        text: impl Into<String>,
    ) -> Option<&Message> {
        self.update_draft(text);
        self.submit(endpoint).await
    }

    /// Clear the transcript and drop the session identifier.
    pub fn reset(&mut self) {
        self.state.apply(ChatEvent::Cleared);
    }

    pub fn transcript(&self) -> &[Message] {
        self.state.transcript()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.state.session_id()
    }

    pub fn pending(&self) -> bool {
        self.state.pending()
    }

    pub fn draft(&self) -> &str {
        self.state.draft()
    }
}
