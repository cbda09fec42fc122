//! AskAdvisorHandler - Answers a chat query after the simulated thinking pause.

use std::sync::Arc;

use crate::domain::advisor::{ChatReply, KeywordResponder};
use crate::ports::ProcessingDelay;

/// Command carrying one chat query.
#[derive(Debug, Clone)]
pub struct AskAdvisorCommand {
    pub query: String,
}

impl AskAdvisorCommand {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Handler for chat queries.
pub struct AskAdvisorHandler {
    responder: KeywordResponder,
    delay: Arc<dyn ProcessingDelay>,
}

impl AskAdvisorHandler {
    pub fn new(responder: KeywordResponder, delay: Arc<dyn ProcessingDelay>) -> Self {
        Self { responder, delay }
    }

    /// Opening message for a new conversation.
    pub fn greeting(&self) -> &'static str {
        self.responder.greeting()
    }

    pub async fn handle(&self, cmd: AskAdvisorCommand) -> ChatReply {
        tracing::trace!(delay = ?self.delay.duration(), "Advisor thinking");
        self.delay.pause().await;

        let reply = self.responder.respond(&cmd.query);
        match reply.topic {
            Some(topic) => tracing::debug!(topic = topic.label(), "Advisor rule matched"),
            None => tracing::debug!("No advisor rule matched, using default prompt"),
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::delay::NoDelay;
    use crate::domain::advisor::{AdvisoryTopic, DEFAULT_PROMPTS, GREETING};
    use crate::ports::FixedIndex;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingDelay {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProcessingDelay for CountingDelay {
        async fn pause(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        fn duration(&self) -> Duration {
            Duration::ZERO
        }
    }

    fn handler_with(delay: Arc<dyn ProcessingDelay>) -> AskAdvisorHandler {
        AskAdvisorHandler::new(KeywordResponder::new(Arc::new(FixedIndex(2))), delay)
    }

    #[tokio::test]
    async fn matched_query_returns_topic_reply() {
        let handler = handler_with(Arc::new(NoDelay));
        let reply = handler.handle(AskAdvisorCommand::new("When should I water?")).await;
        assert_eq!(reply.topic, Some(AdvisoryTopic::Irrigation));
    }

    #[tokio::test]
    async fn unmatched_query_uses_injected_pick() {
        let handler = handler_with(Arc::new(NoDelay));
        let reply = handler.handle(AskAdvisorCommand::new("hello")).await;
        assert_eq!(reply.text, DEFAULT_PROMPTS[2]);
    }

    #[tokio::test]
    async fn pauses_once_per_query() {
        let delay = Arc::new(CountingDelay {
            calls: AtomicUsize::new(0),
        });
        let handler = handler_with(delay.clone());

        handler.handle(AskAdvisorCommand::new("soil")).await;
        handler.handle(AskAdvisorCommand::new("")).await;

        assert_eq!(delay.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn exposes_greeting() {
        assert_eq!(handler_with(Arc::new(NoDelay)).greeting(), GREETING);
    }
}
