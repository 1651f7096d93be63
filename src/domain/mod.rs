//! Domain layer containing the wizard's business logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, state machine, errors)
//! - `symptoms` - Symptom form and the submitted symptom list
//! - `personality` - The five-question quiz and its score
//! - `diagnosis` - Template catalog, escalation and afterlife roll
//! - `session` - Screen state machine, session and wizard orchestrator

pub mod diagnosis;
pub mod foundation;
pub mod personality;
pub mod session;
pub mod symptoms;
