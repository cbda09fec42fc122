//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It also owns the explicit state objects that presentation shells hold
//! (chat transcript, assessment form) so no state is ambient or global.

pub mod handlers;

pub use handlers::{
    AskAdvisorCommand, AskAdvisorHandler, AssessRiskCommand, AssessRiskError, AssessRiskHandler,
    ChatConversation, ChatMessage, RiskAssessmentForm, Sender,
};
