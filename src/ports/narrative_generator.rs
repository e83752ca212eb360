//! Narrative Generator Port - Plain-language document summaries.

use async_trait::async_trait;

use crate::domain::foundation::AnalysisId;

/// Port for producing a document summary.
///
/// # Contract
///
/// `summarize` never fails. An unconfigured backend, a too-short document
/// and a backend error all resolve to advisory text, so a summary problem
/// can never abort an analysis.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn summarize(&self, analysis_id: AnalysisId, text: &str) -> String;

    /// False when no generation backend is wired in.
    fn is_configured(&self) -> bool;
}
