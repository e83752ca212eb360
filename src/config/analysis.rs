//! Analysis pipeline tunables

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::risk::DetectorSettings;
use crate::domain::summary::SummaryPolicy;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Characters either side of a match when no sentence encloses it
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,

    #[serde(default = "default_summary_char_budget")]
    pub summary_char_budget: usize,

    #[serde(default = "default_min_summary_chars")]
    pub min_summary_chars: usize,

    /// Upper bound on each summary or rewrite call
    #[serde(default = "default_boundary_timeout")]
    pub boundary_timeout_secs: u64,

    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: usize,
}

impl AnalysisConfig {
    pub fn detector_settings(&self) -> DetectorSettings {
        DetectorSettings {
            context_radius: self.context_radius,
        }
    }

    pub fn summary_policy(&self) -> SummaryPolicy {
        SummaryPolicy {
            min_chars: self.min_summary_chars,
            char_budget: self.summary_char_budget,
        }
    }

    pub fn boundary_timeout(&self) -> Duration {
        Duration::from_secs(self.boundary_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.summary_char_budget == 0 {
            return Err(ValidationError::must_be_positive(
                "analysis.summary_char_budget",
            ));
        }
        if self.boundary_timeout_secs == 0 {
            return Err(ValidationError::must_be_positive(
                "analysis.boundary_timeout_secs",
            ));
        }
        if self.max_document_bytes == 0 {
            return Err(ValidationError::must_be_positive(
                "analysis.max_document_bytes",
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            context_radius: default_context_radius(),
            summary_char_budget: default_summary_char_budget(),
            min_summary_chars: default_min_summary_chars(),
            boundary_timeout_secs: default_boundary_timeout(),
            max_document_bytes: default_max_document_bytes(),
        }
    }
}

fn default_context_radius() -> usize {
    100
}

fn default_summary_char_budget() -> usize {
    8000
}

fn default_min_summary_chars() -> usize {
    50
}

fn default_boundary_timeout() -> u64 {
    90
}

fn default_max_document_bytes() -> usize {
    10 * 1024 * 1024
}
