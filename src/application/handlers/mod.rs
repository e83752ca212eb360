//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod analysis;

pub use analysis::{
    AnalysisError, AnalysisOrchestrator, AnalysisResponse, AnalyzeDocumentCommand,
    AnalyzeTextCommand, ResponseAssembler, RiskView, DEFAULT_BOUNDARY_TIMEOUT,
};
