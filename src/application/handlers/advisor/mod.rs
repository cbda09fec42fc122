//! Advisor handlers - Chat query handling and the chat transcript shell.

mod ask_advisor;
mod chat_conversation;

pub use ask_advisor::{AskAdvisorCommand, AskAdvisorHandler};
pub use chat_conversation::{ChatConversation, ChatMessage, Sender};
