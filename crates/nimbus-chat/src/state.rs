//! Pure state-transition core for the chat session.
//!
//! Every behavior of the client is a transition `(state, event) -> state`;
//! the submit transition additionally emits the outbound [`TurnRequest`].
//! The HTTP call itself lives in [`crate::http`], and its resolution is
//! delivered back as a second event (`ReplyArrived` / `TurnFailed`), so the
//! state has exactly one writer and no transition performs I/O.

use crate::message::Message;
use crate::{AgentReply, TurnRequest};

/// A discrete input to the chat state machine.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// The draft input text changed.
    DraftEdited(String),
    /// The user asked to send the current draft.
    SubmitPressed,
    /// The outstanding request resolved successfully.
    ReplyArrived(AgentReply),
    /// The outstanding request failed: network, status, or malformed body.
    TurnFailed,
    /// The user cleared the conversation.
    Cleared,
}

/// Client state: transcript, session identifier, pending gate, and draft.
#[derive(Debug)]
pub struct ChatState {
    transcript: Vec<Message>,
    session_id: Option<String>,
    pending: bool,
    draft: String,
    failure_notice: String,
}

impl ChatState {
    /// `failure_notice` is the fixed copy appended to the transcript when a
    /// turn fails; see [`crate::EndpointConfig::failure_notice`].
    pub fn new(failure_notice: impl Into<String>) -> Self {
        Self {
            transcript: Vec::new(),
            session_id: None,
            pending: false,
            draft: String::new(),
            failure_notice: failure_notice.into(),
        }
    }

    /// Apply one event.
    ///
    /// Returns the outbound request when the event was an accepted submit;
    /// the caller owns performing it and feeding the outcome back as
    /// `ReplyArrived` or `TurnFailed`. Every other event returns `None`.
    pub fn apply(&mut self, event: ChatEvent) -> Option<TurnRequest> {
        match event {
            ChatEvent::DraftEdited(text) => {
                self.draft = text;
                None
            }
            ChatEvent::SubmitPressed => self.submit(),
            ChatEvent::ReplyArrived(reply) => {
                // Adopt the backend's session identifier once; later replies
                // never replace an identifier already held.
                if self.session_id.is_none() {
                    if let Some(id) = &reply.session_id {
                        self.session_id = Some(id.clone());
                    }
                }
                self.transcript.push(Message::agent(reply));
                self.pending = false;
                None
            }
            ChatEvent::TurnFailed => {
                self.transcript.push(Message::error(self.failure_notice.clone()));
                self.pending = false;
                None
            }
            ChatEvent::Cleared => {
                // Leaves `pending` alone: an in-flight turn is not cancelled
                // and still resolves against the fresh transcript.
                self.transcript.clear();
                self.session_id = None;
                None
            }
        }
    }

    fn submit(&mut self) -> Option<TurnRequest> {
        let message = self.draft.trim();
        if message.is_empty() || self.pending {
            return None;
        }
        let message = message.to_string();
        self.transcript.push(Message::user(message.clone()));
        self.draft.clear();
        self.pending = true;
        Some(TurnRequest {
            message,
            session_id: self.session_id.clone(),
        })
    }

    /// All messages exchanged so far, in append order.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Backend-assigned conversation identifier, once adopted.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Whether a request is outstanding. While `true`, submits are no-ops.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Current draft input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageKind;

    const NOTICE: &str = "죄송합니다. 오류가 발생했습니다. AWS 백엔드 서버가 실행 중인지 확인해주세요.";

    fn state() -> ChatState {
        ChatState::new(NOTICE)
    }

    fn reply(text: &str, session_id: Option<&str>) -> AgentReply {
        AgentReply {
            response: text.into(),
            session_id: session_id.map(String::from),
            ..AgentReply::default()
        }
    }

    fn submit(state: &mut ChatState, text: &str) -> Option<TurnRequest> {
        state.apply(ChatEvent::DraftEdited(text.into()));
        state.apply(ChatEvent::SubmitPressed)
    }

    #[test]
    fn empty_submit_is_a_no_op() {
        let mut state = state();
        for draft in ["", "   ", "\n\t "] {
            state.apply(ChatEvent::DraftEdited(draft.into()));
            assert!(state.apply(ChatEvent::SubmitPressed).is_none());
            assert!(state.transcript().is_empty());
            assert!(!state.pending());
        }
    }

    #[test]
    fn rejected_submit_leaves_draft_untouched() {
        let mut state = state();
        let turn = submit(&mut state, "첫 번째").unwrap();
        assert_eq!(turn.message, "첫 번째");

        // Second submit while pending: the draft must survive the no-op.
        state.apply(ChatEvent::DraftEdited("두 번째".into()));
        assert!(state.apply(ChatEvent::SubmitPressed).is_none());
        assert_eq!(state.draft(), "두 번째");
    }

    #[test]
    fn submit_trims_appends_and_clears_draft() {
        let mut state = state();
        let turn = submit(&mut state, "  5 + 3 계산해줘  ").unwrap();

        assert_eq!(turn.message, "5 + 3 계산해줘");
        assert!(turn.session_id.is_none());
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0].kind, MessageKind::User);
        assert_eq!(state.transcript()[0].content, "5 + 3 계산해줘");
        assert_eq!(state.draft(), "");
        assert!(state.pending());
    }

    #[test]
    fn no_double_send_while_pending() {
        let mut state = state();
        assert!(submit(&mut state, "첫 질문").is_some());
        assert!(submit(&mut state, "성급한 질문").is_none());
        assert_eq!(state.transcript().len(), 1);
        assert!(state.pending());
    }

    #[test]
    fn reply_appends_agent_message_and_clears_pending() {
        let mut state = state();
        submit(&mut state, "5 + 3 계산해줘");
        state.apply(ChatEvent::ReplyArrived(reply("8", Some("abc123"))));

        assert_eq!(state.transcript().len(), 2);
        assert_eq!(state.transcript()[1].kind, MessageKind::Agent);
        assert_eq!(state.transcript()[1].content, "8");
        assert_eq!(state.session_id(), Some("abc123"));
        assert!(!state.pending());
    }

    #[test]
    fn session_adopted_once_and_sticky() {
        let mut state = state();
        submit(&mut state, "안녕");
        state.apply(ChatEvent::ReplyArrived(reply("안녕하세요!", Some("abc123"))));

        let turn = submit(&mut state, "다시").unwrap();
        assert_eq!(turn.session_id.as_deref(), Some("abc123"));

        // A later reply advertising a different identifier is ignored.
        state.apply(ChatEvent::ReplyArrived(reply("네", Some("zzz999"))));
        assert_eq!(state.session_id(), Some("abc123"));
        let turn = submit(&mut state, "한 번 더").unwrap();
        assert_eq!(turn.session_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn reply_without_session_leaves_none() {
        let mut state = state();
        submit(&mut state, "안녕");
        state.apply(ChatEvent::ReplyArrived(reply("안녕하세요!", None)));
        assert!(state.session_id().is_none());
    }

    #[test]
    fn failure_appends_notice_and_keeps_session() {
        let mut state = state();
        submit(&mut state, "안녕");
        state.apply(ChatEvent::ReplyArrived(reply("안녕하세요!", Some("abc123"))));

        submit(&mut state, "다시");
        state.apply(ChatEvent::TurnFailed);

        let last = state.transcript().last().unwrap();
        assert_eq!(last.kind, MessageKind::Error);
        assert_eq!(last.content, NOTICE);
        assert!(!state.pending());
        assert_eq!(state.session_id(), Some("abc123"));
    }

    #[test]
    fn transcript_interleaves_in_submission_order() {
        let mut state = state();
        for (question, answer) in [("하나", "1"), ("둘", "2"), ("셋", "3")] {
            submit(&mut state, question);
            state.apply(ChatEvent::ReplyArrived(reply(answer, Some("abc123"))));
        }

        let kinds: Vec<MessageKind> = state.transcript().iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::User,
                MessageKind::Agent,
                MessageKind::User,
                MessageKind::Agent,
                MessageKind::User,
                MessageKind::Agent,
            ]
        );
        let contents: Vec<&str> = state.transcript().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["하나", "1", "둘", "2", "셋", "3"]);
    }

    #[test]
    fn clear_empties_transcript_and_session() {
        let mut state = state();
        submit(&mut state, "안녕");
        state.apply(ChatEvent::ReplyArrived(reply("안녕하세요!", Some("abc123"))));

        state.apply(ChatEvent::Cleared);
        assert!(state.transcript().is_empty());
        assert!(state.session_id().is_none());
        assert!(!state.pending());
    }

    #[test]
    fn clear_mid_flight_keeps_pending_and_accepts_late_reply() {
        let mut state = state();
        submit(&mut state, "느린 질문");

        state.apply(ChatEvent::Cleared);
        assert!(state.transcript().is_empty());
        assert!(state.pending(), "clearing must not cancel the in-flight turn");

        // The late resolution lands on the fresh transcript and may adopt a
        // session identifier into the now-empty session slot.
        state.apply(ChatEvent::ReplyArrived(reply("늦은 답변", Some("new456"))));
        assert_eq!(state.transcript().len(), 1);
        assert_eq!(state.transcript()[0].kind, MessageKind::Agent);
        assert_eq!(state.session_id(), Some("new456"));
        assert!(!state.pending());
    }

    #[test]
    fn pending_cleared_on_every_outcome() {
        let mut state = state();

        submit(&mut state, "성공하는 질문");
        state.apply(ChatEvent::ReplyArrived(reply("답", None)));
        assert!(!state.pending());

        submit(&mut state, "실패하는 질문");
        state.apply(ChatEvent::TurnFailed);
        assert!(!state.pending());
    }
}
