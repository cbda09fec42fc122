//! AI-DSS - Rule-based decision support
//!
//! This crate implements the decision logic behind a smart-farming and
//! heart-health assistant: a keyword-driven chatbot advisor and an additive
//! cardiovascular risk scorer, exposed through a small JSON API.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
