//! Application layer - Commands and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AnalysisError, AnalysisOrchestrator, AnalysisResponse, AnalyzeDocumentCommand,
    AnalyzeTextCommand, ResponseAssembler, RiskView,
};
