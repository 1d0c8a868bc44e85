//! Chat transcript model for the active conversation.
//!
//! Mirrors the main chat panel: the transcript, the compose box, and the
//! typing indicator. Submitting returns the drafted text to the host, which
//! appends it to the store (and, after its simulated delay, the bot reply);
//! the model itself never touches a clock.

use inbox_core::conversation::{Message, Sender};
use inbox_core::responder::bot_reply;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatModel {
    conversation_id: String,
    transcript: Vec<Message>,
    compose: String,
    typing: bool,
}

impl ChatModel {
    #[must_use]
    pub fn new(conversation_id: &str, transcript: Vec<Message>) -> Self {
        Self {
            conversation_id: conversation_id.to_owned(),
            transcript,
            compose: String::new(),
            typing: false,
        }
    }

    #[must_use]
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn set_compose(&mut self, text: &str) {
        self.compose = text.to_owned();
    }

    #[must_use]
    pub fn compose(&self) -> &str {
        &self.compose
    }

    /// Submit the compose box: returns the drafted text (trimmed) and arms
    /// the typing indicator. An empty draft is a no-op.
    pub fn submit(&mut self) -> Option<String> {
        let text = self.compose.trim().to_owned();
        if text.is_empty() {
            return None;
        }
        self.compose.clear();
        self.typing = true;
        Some(text)
    }

    /// The bot reply the host should deliver next. The rotation is keyed by
    /// how many bot messages the transcript already holds.
    #[must_use]
    pub fn next_reply(&self) -> &'static str {
        let turn = self
            .transcript
            .iter()
            .filter(|message| message.sender == Sender::Bot)
            .count();
        bot_reply(turn)
    }

    /// Mirror a message appended to the store. A bot message clears the
    /// typing indicator.
    pub fn push_message(&mut self, message: Message) {
        if message.sender == Sender::Bot {
            self.typing = false;
        }
        self.transcript.push(message);
    }
}
