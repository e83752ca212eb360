//! AnalysisOrchestrator - Runs one document through the analysis pipeline.
//!
//! Stages: `Start → Detected → Summarized → Rewritten → Assembled`.
//!
//! Only extraction can fail the analysis. Once text is in hand, risks are
//! always returned; the summary and rewrites degrade to absent values when
//! their backends are unconfigured, failing or slower than the boundary
//! timeout. Summary and rewrite requests run concurrently after detection,
//! and each backend is called at most once.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::domain::analysis::{merge_rewrites, AnalysisResult, AnalysisStage, TEXT_INPUT_NAME};
use crate::domain::foundation::{AnalysisId, StateMachine, ValidationError};
use crate::domain::risk::RiskDetector;
use crate::ports::{
    AIError, DocumentFormat, ExtractionError, NarrativeGenerator, RewriteOutcome,
    RewriteSuggester, TextExtractor,
};

/// Default upper bound on each backend call.
pub const DEFAULT_BOUNDARY_TIMEOUT: Duration = Duration::from_secs(90);

/// Command to analyse raw text.
#[derive(Debug, Clone)]
pub struct AnalyzeTextCommand {
    /// Defaults to "Text Input".
    pub document_name: Option<String>,
    pub text: String,
}

/// Command to analyse an uploaded file.
#[derive(Debug, Clone)]
pub struct AnalyzeDocumentCommand {
    /// Used for format detection and as the document name.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Errors that abort an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("invalid analysis stage transition: {0}")]
    InvalidStage(#[from] ValidationError),
}

pub struct AnalysisOrchestrator {
    detector: RiskDetector,
    narrative: Arc<dyn NarrativeGenerator>,
    rewriter: Arc<dyn RewriteSuggester>,
    extractor: Arc<dyn TextExtractor>,
    boundary_timeout: Duration,
}

impl AnalysisOrchestrator {
    pub fn new(
        detector: RiskDetector,
        narrative: Arc<dyn NarrativeGenerator>,
        rewriter: Arc<dyn RewriteSuggester>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            detector,
            narrative,
            rewriter,
            extractor,
            boundary_timeout: DEFAULT_BOUNDARY_TIMEOUT,
        }
    }

    pub fn with_boundary_timeout(mut self, boundary_timeout: Duration) -> Self {
        self.boundary_timeout = boundary_timeout;
        self
    }

    /// Extracts text from an upload, then analyses it.
    pub async fn analyze_document(
        &self,
        analysis_id: AnalysisId,
        cmd: AnalyzeDocumentCommand,
    ) -> Result<AnalysisResult, AnalysisError> {
        let format = DocumentFormat::from_file_name(&cmd.file_name)?;
        info!(
            %analysis_id,
            file_name = %cmd.file_name,
            %format,
            bytes = cmd.bytes.len(),
            "analysing document"
        );

        let text = self.extractor.extract(&cmd.bytes, format)?;

        self.analyze_text(
            analysis_id,
            AnalyzeTextCommand {
                document_name: Some(cmd.file_name),
                text,
            },
        )
        .await
    }

    /// Analyses plain text.
    pub async fn analyze_text(
        &self,
        analysis_id: AnalysisId,
        cmd: AnalyzeTextCommand,
    ) -> Result<AnalysisResult, AnalysisError> {
        let AnalyzeTextCommand {
            document_name,
            text,
        } = cmd;
        let document_name = document_name.unwrap_or_else(|| TEXT_INPUT_NAME.to_string());

        let mut stage = AnalysisStage::Start;

        let mut risks = self.detector.detect(&text);
        stage = advance(analysis_id, stage, AnalysisStage::Detected)?;

        let clauses: Vec<String> = risks.iter().map(|r| r.clause_text.clone()).collect();
        let (summary, rewrites) = tokio::join!(
            self.summarize(analysis_id, &text),
            self.request_rewrites(analysis_id, &clauses),
        );
        stage = advance(analysis_id, stage, AnalysisStage::Summarized)?;

        if !risks.is_empty() {
            match rewrites {
                Some(RewriteOutcome::Rewrites(rewrites)) => {
                    let attached = merge_rewrites(&mut risks, rewrites);
                    debug!(%analysis_id, attached, "rewrites merged");
                }
                Some(RewriteOutcome::Unavailable) => {
                    debug!(%analysis_id, "rewrites unavailable: no AI provider configured");
                }
                Some(RewriteOutcome::Failed(err)) => {
                    warn!(%analysis_id, error = %err, "continuing without rewrites");
                }
                None => {}
            }
            stage = advance(analysis_id, stage, AnalysisStage::Rewritten)?;
        }

        let result = AnalysisResult {
            document_name,
            text_length: text.chars().count(),
            risks,
            summary,
            original_text: text,
        };
        advance(analysis_id, stage, AnalysisStage::Assembled)?;

        info!(
            %analysis_id,
            document_name = %result.document_name,
            text_length = result.text_length,
            risks = result.risks_found(),
            rewrites = result.rewrites_attached(),
            summarized = result.summary.is_some(),
            "analysis complete"
        );

        Ok(result)
    }

    async fn summarize(&self, analysis_id: AnalysisId, text: &str) -> Option<String> {
        match timeout(self.boundary_timeout, self.narrative.summarize(analysis_id, text)).await {
            Ok(summary) => Some(summary),
            Err(_) => {
                warn!(
                    %analysis_id,
                    timeout_secs = self.boundary_timeout.as_secs(),
                    "summary timed out; omitting summary"
                );
                None
            }
        }
    }

    /// `None` when there is nothing to rewrite.
    async fn request_rewrites(
        &self,
        analysis_id: AnalysisId,
        clauses: &[String],
    ) -> Option<RewriteOutcome> {
        if clauses.is_empty() {
            return None;
        }

        let outcome = timeout(self.boundary_timeout, self.rewriter.suggest(analysis_id, clauses))
            .await
            .unwrap_or_else(|_| {
                RewriteOutcome::Failed(AIError::timeout(self.boundary_timeout.as_secs()))
            });

        Some(outcome)
    }
}

fn advance(
    analysis_id: AnalysisId,
    from: AnalysisStage,
    to: AnalysisStage,
) -> Result<AnalysisStage, AnalysisError> {
    let next = from.transition_to(to)?;
    debug!(%analysis_id, from = %from, to = %next, "analysis stage transition");
    Ok(next)
}
