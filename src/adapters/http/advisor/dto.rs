//! HTTP DTOs for advisor endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::advisor::{AdvisoryTopic, ChatReply};

/// Request carrying one chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequest {
    #[serde(default)]
    pub message: String,
}

/// Advisor reply.
#[derive(Debug, Clone, Serialize)]
pub struct RespondResponse {
    pub reply: String,
    pub topic: Option<AdvisoryTopic>,
}

impl From<ChatReply> for RespondResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            reply: reply.text.to_string(),
            topic: reply.topic,
        }
    }
}

/// Opening message for a new chat.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}
