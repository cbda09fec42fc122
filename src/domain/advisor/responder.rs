//! Keyword Responder - First-match canned advice for free-text questions.

use std::sync::Arc;

use serde::Serialize;

use crate::ports::RandomSource;

use super::rules::{AdvisoryTopic, KeywordRule, ADVISORY_RULES, DEFAULT_PROMPTS, GREETING};

/// Reply chosen for a chat query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub text: &'static str,
    /// Matched topic, `None` when the reply came from the fallback pool.
    pub topic: Option<AdvisoryTopic>,
}

/// Maps free text to canned advice using the ordered rule table.
///
/// Stateless apart from the injected random source, which is only
/// consulted when no rule matches.
#[derive(Clone)]
pub struct KeywordResponder {
    random: Arc<dyn RandomSource>,
}

impl KeywordResponder {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Message a conversation opens with.
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Returns the first rule whose keywords occur in the query.
    pub fn classify(&self, query: &str) -> Option<&'static KeywordRule> {
        let lowered = query.to_lowercase();
        ADVISORY_RULES.iter().find(|rule| rule.matches(&lowered))
    }

    /// Answers a query. Never fails: empty or unmatched input falls back
    /// to a uniformly chosen default prompt.
    pub fn respond(&self, query: &str) -> ChatReply {
        match self.classify(query) {
            Some(rule) => ChatReply {
                text: rule.response,
                topic: Some(rule.topic),
            },
            None => {
                let index = self.random.pick(DEFAULT_PROMPTS.len()) % DEFAULT_PROMPTS.len();
                ChatReply {
                    text: DEFAULT_PROMPTS[index],
                    topic: None,
                }
            }
        }
    }
}

impl std::fmt::Debug for KeywordResponder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordResponder")
            .field("rules", &ADVISORY_RULES.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedIndex;
    use proptest::prelude::*;

    fn responder() -> KeywordResponder {
        KeywordResponder::new(Arc::new(FixedIndex(0)))
    }

    fn response_for(topic: AdvisoryTopic) -> &'static str {
        ADVISORY_RULES
            .iter()
            .find(|r| r.topic == topic)
            .map(|r| r.response)
            .unwrap()
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        let reply = responder().respond("irrigation and fertilizer needs");
        assert_eq!(reply.topic, Some(AdvisoryTopic::Irrigation));
        assert_eq!(reply.text, response_for(AdvisoryTopic::Irrigation));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = responder().respond("What about my SOIL?");
        assert_eq!(reply.topic, Some(AdvisoryTopic::SoilHealth));
    }

    #[test]
    fn thanks_resolves_by_rule_order_not_specificity() {
        let reply = responder().respond("thanks for the heart advice");
        assert_eq!(reply.topic, Some(AdvisoryTopic::Cardiovascular));

        let reply = responder().respond("thank you!");
        assert_eq!(reply.topic, Some(AdvisoryTopic::Acknowledgment));
        assert_eq!(reply.text, response_for(AdvisoryTopic::Acknowledgment));
    }

    #[test]
    fn multi_word_keyword_matches() {
        let reply = responder().respond("is my Blood Pressure ok");
        assert_eq!(reply.topic, Some(AdvisoryTopic::BloodPressure));
    }

    #[test]
    fn substring_matching_catches_embedded_keywords() {
        // "cad" inside "decade", "ph" inside "phone"
        assert_eq!(
            responder().respond("a decade ago").topic,
            Some(AdvisoryTopic::Cardiovascular)
        );
        assert_eq!(
            responder().respond("my phone").topic,
            Some(AdvisoryTopic::SoilHealth)
        );
    }

    #[test]
    fn every_rule_is_reachable_by_its_own_keywords() {
        for rule in ADVISORY_RULES {
            for kw in rule.keywords {
                let matched = responder().classify(kw).map(|r| r.topic);
                // An earlier rule may shadow a keyword; it must never be a later one.
                let position = ADVISORY_RULES.iter().position(|r| r.topic == rule.topic);
                let matched_position =
                    matched.and_then(|t| ADVISORY_RULES.iter().position(|r| r.topic == t));
                assert!(matched_position <= position, "keyword {kw} resolved past its rule");
            }
        }
    }

    #[test]
    fn empty_query_falls_back_to_default_pool() {
        let reply = responder().respond("");
        assert!(reply.topic.is_none());
        assert!(DEFAULT_PROMPTS.contains(&reply.text));
    }

    #[test]
    fn whitespace_query_falls_back_to_default_pool() {
        let reply = responder().respond("   \t ");
        assert!(reply.topic.is_none());
        assert!(DEFAULT_PROMPTS.contains(&reply.text));
    }

    #[test]
    fn fallback_uses_the_injected_source() {
        for (i, expected) in DEFAULT_PROMPTS.iter().enumerate() {
            let responder = KeywordResponder::new(Arc::new(FixedIndex(i)));
            assert_eq!(responder.respond("hello there").text, *expected);
        }
    }

    #[test]
    fn greeting_is_fixed() {
        assert_eq!(responder().greeting(), GREETING);
    }

    proptest! {
        #[test]
        fn respond_is_total_and_draws_from_known_texts(query in ".*", pick in 0usize..16) {
            let responder = KeywordResponder::new(Arc::new(FixedIndex(pick)));
            let reply = responder.respond(&query);
            let known = ADVISORY_RULES.iter().any(|r| r.response == reply.text)
                || DEFAULT_PROMPTS.contains(&reply.text);
            prop_assert!(known);
        }

        #[test]
        fn thank_without_domain_keywords_is_acknowledged(
            prefix in "[a-z .,!?']{0,24}",
            suffix in "[a-z .,!?']{0,24}",
        ) {
            let query = format!("{prefix}thank{suffix}");
            let hits_earlier_rule = ADVISORY_RULES
                .iter()
                .filter(|r| r.topic != AdvisoryTopic::Acknowledgment)
                .flat_map(|r| r.keywords.iter())
                .any(|keyword| query.contains(keyword));
            prop_assume!(!hits_earlier_rule);

            let reply = responder().respond(&query);
            prop_assert_eq!(reply.topic, Some(AdvisoryTopic::Acknowledgment));
        }
    }
}
