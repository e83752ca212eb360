//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the analysis domain.

mod errors;
mod ids;
mod severity;
mod state_machine;

pub use errors::ValidationError;
pub use ids::AnalysisId;
pub use severity::Severity;
pub use state_machine::StateMachine;
