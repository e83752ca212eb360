//! Risk Detector - Scans document text against the pattern catalog.
//!
//! # Algorithm
//!
//! 1. Split the text into sentence-like units.
//! 2. For each pattern in catalog order, walk every non-overlapping
//!    case-insensitive match in the original text.
//! 3. Pick the clause: enclosing sentence, else any sentence containing the
//!    matched words, else a character window around the match.
//! 4. Fingerprint `(risk type, clause)`; drop repeats within this call.
//! 5. Stable sort by severity, high first.
//!
//! Matching runs directly on the original text, so offsets never drift when
//! lowercasing would change the string's length. Regex iteration is
//! infallible: a pattern either yields matches or contributes nothing.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use super::clause::{context_window, CharOffsets, SentenceIndex};
use super::detected_risk::{fingerprint, DetectedRisk};
use super::PatternCatalog;

/// Default characters of context either side of a match when no sentence fits.
pub const DEFAULT_CONTEXT_RADIUS: usize = 100;

/// Tunables for clause extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorSettings {
    pub context_radius: usize,
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// Pattern-based clause detector. Stateless between calls.
#[derive(Debug, Clone)]
pub struct RiskDetector {
    catalog: Arc<PatternCatalog>,
    settings: DetectorSettings,
}

impl Default for RiskDetector {
    fn default() -> Self {
        Self::new(PatternCatalog::standard())
    }
}

impl RiskDetector {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self {
            catalog,
            settings: DetectorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DetectorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Detects risky clauses, ranked high to low severity.
    ///
    /// # Edge Cases
    /// - Empty or whitespace-only text: returns an empty Vec
    /// - Same clause, same category via two matches: reported once
    /// - Same clause, different categories: reported once per category
    pub fn detect(&self, text: &str) -> Vec<DetectedRisk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let sentences = SentenceIndex::build(text);
        let offsets = CharOffsets::new(text);
        let mut seen = HashSet::new();
        let mut risks = Vec::new();

        for pattern in self.catalog.iter() {
            for m in pattern.find_iter(text) {
                let matched = m.as_str();
                if matched.trim().is_empty() {
                    continue;
                }

                let clause = sentences
                    .sentence_for(m.start(), m.end(), matched)
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| {
                        context_window(text, m.start(), m.end(), self.settings.context_radius)
                    });

                let id = fingerprint(pattern.name(), clause);
                if !seen.insert(id.clone()) {
                    trace!(risk_type = pattern.name(), id = %id, "duplicate clause skipped");
                    continue;
                }

                risks.push(DetectedRisk {
                    id,
                    clause_text: clause.to_string(),
                    risk_type: pattern.name().to_string(),
                    severity: pattern.severity(),
                    explanation: pattern.explanation().to_string(),
                    matched_span: matched.to_string(),
                    start_offset: offsets.char_offset(m.start()),
                    end_offset: offsets.char_offset(m.end()),
                    suggested_rewrite: None,
                });
            }
        }

        risks.sort_by_key(|r| r.severity.rank());

        debug!(
            patterns = self.catalog.len(),
            sentences = sentences.len(),
            risks = risks.len(),
            "risk detection finished"
        );

        risks
    }
}
