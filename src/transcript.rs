//! In-memory chat session state.

use crate::api::{ApiResult, WellnessApi};
use crate::types::ChatMessage;
use tracing::error;

pub const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// A submitted message waiting for its reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub message: String,
    /// Transcript as it was before `message` was appended.
    pub history: Vec<ChatMessage>,
}

/// The ordered chat turns of the current session plus the in-flight flag.
///
/// Sending is split in two so a UI can run the request on its own task:
/// [`begin_send`](Self::begin_send) appends the user's message and marks the
/// transcript loading, [`finish_send`](Self::finish_send) appends the reply and
/// clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns `None` for blank input or while a reply is outstanding.
    pub fn begin_send(&mut self, text: &str) -> Option<PendingTurn> {
        if text.trim().is_empty() || self.loading {
            return None;
        }
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.loading = true;
        Some(PendingTurn {
            message: text.to_string(),
            history,
        })
    }

    pub fn finish_send(&mut self, outcome: ApiResult<String>) {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                error!(error = %err, "chat request failed");
                CHAT_ERROR_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::model(reply));
        self.loading = false;
    }

    /// Send `text` and wait for the reply. Returns whether a request was made.
    pub async fn send<A>(&mut self, api: &A, text: &str) -> bool
    where
        A: WellnessApi + ?Sized,
    {
        let Some(turn) = self.begin_send(text) else {
            return false;
        };
        let outcome = api.chat(&turn.message, &turn.history).await;
        self.finish_send(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::types::Role;

    #[test]
    fn blank_input_is_rejected() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.begin_send("").is_none());
        assert!(transcript.begin_send(" \n\t").is_none());
        assert!(transcript.is_empty());
        assert!(!transcript.is_loading());
    }

    #[test]
    fn begin_send_snapshots_prior_history() {
        let mut transcript = ChatTranscript::new();
        let first = transcript.begin_send("hello").unwrap();
        assert!(first.history.is_empty());
        transcript.finish_send(Ok("Hi, I'm here.".to_string()));

        let second = transcript.begin_send("rough day").unwrap();
        assert_eq!(
            second.history,
            vec![ChatMessage::user("hello"), ChatMessage::model("Hi, I'm here.")]
        );
        assert_eq!(transcript.messages().len(), 3);
    }

    #[test]
    fn failure_appends_apology_and_clears_loading() {
        let mut transcript = ChatTranscript::new();
        transcript.begin_send("hello").unwrap();
        transcript.finish_send(Err(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }));

        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.text, CHAT_ERROR_REPLY);
        assert!(!transcript.is_loading());
    }
}
