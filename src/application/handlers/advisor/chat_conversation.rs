//! ChatConversation - Transcript state owned by a chat widget.
//!
//! Holds the messages shown to the user and the "typing" indicator. The
//! conversation lives only as long as its owner; nothing is persisted.

use serde::Serialize;

use crate::domain::foundation::{MessageId, Timestamp};

use super::ask_advisor::{AskAdvisorCommand, AskAdvisorHandler};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp: Timestamp::now(),
        }
    }
}

/// Chat transcript plus typing indicator.
#[derive(Debug, Clone)]
pub struct ChatConversation {
    messages: Vec<ChatMessage>,
    is_typing: bool,
}

impl ChatConversation {
    /// Starts a conversation with the advisor's greeting.
    pub fn open(handler: &AskAdvisorHandler) -> Self {
        Self {
            messages: vec![ChatMessage::new(Sender::Bot, handler.greeting())],
            is_typing: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Sends user input and appends the advisor's reply.
    ///
    /// Blank input is ignored and returns `None`. If the returned future is
    /// dropped mid-pause, the user message stays in the transcript, no reply
    /// is appended and the typing indicator stays on until
    /// [`cancel_pending`](Self::cancel_pending) is called.
    pub async fn send(&mut self, text: &str, handler: &AskAdvisorHandler) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(Sender::User, text));
        self.is_typing = true;

        let reply = handler.handle(AskAdvisorCommand::new(text)).await;

        let bot_message = ChatMessage::new(Sender::Bot, reply.text);
        self.messages.push(bot_message.clone());
        self.is_typing = false;

        Some(bot_message)
    }

    /// Clears the typing indicator after an abandoned `send`.
    pub fn cancel_pending(&mut self) {
        self.is_typing = false;
    }
}
