//! Analysis handlers.
//!
//! The orchestrator that runs the pipeline and the assembler that shapes
//! its result.

mod orchestrator;
mod response;

pub use orchestrator::{
    AnalysisError, AnalysisOrchestrator, AnalyzeDocumentCommand, AnalyzeTextCommand,
    DEFAULT_BOUNDARY_TIMEOUT,
};
pub use response::{AnalysisResponse, ResponseAssembler, RiskView};
