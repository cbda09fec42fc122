//! Application handlers.
//!
//! Command handlers that pair a domain evaluator with the simulated
//! processing delay, and the shell state objects that drive them.

pub mod advisor;
pub mod cardio;

pub use advisor::{AskAdvisorCommand, AskAdvisorHandler, ChatConversation, ChatMessage, Sender};
pub use cardio::{AssessRiskCommand, AssessRiskError, AssessRiskHandler, RiskAssessmentForm};
