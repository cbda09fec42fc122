//! Advisor Module - Keyword-driven chatbot responses.
//!
//! The advisor answers agriculture and heart-health questions by scanning an
//! ordered keyword table. There is no language model: the first rule with a
//! keyword contained in the lowercased query supplies the answer, and
//! unmatched input gets one of four generic prompts.
//!
//! # Components
//!
//! - `ADVISORY_RULES` - Ordered keyword sets and canned responses
//! - `KeywordResponder` - First-match evaluation with injectable fallback randomness

mod responder;
mod rules;

pub use responder::{ChatReply, KeywordResponder};
pub use rules::{AdvisoryTopic, KeywordRule, ADVISORY_RULES, DEFAULT_PROMPTS, GREETING};
