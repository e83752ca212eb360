//! Analysis result and rewrite merge.

use serde::{Deserialize, Serialize};

use crate::domain::risk::DetectedRisk;

/// Document name used when raw text is analysed without a file.
pub const TEXT_INPUT_NAME: &str = "Text Input";

/// Outcome of one analysis. Built once by the orchestrator, then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub document_name: String,
    /// Character count of `original_text`.
    pub text_length: usize,
    /// Ranked high to low severity.
    pub risks: Vec<DetectedRisk>,
    pub summary: Option<String>,
    pub original_text: String,
}

impl AnalysisResult {
    pub fn risks_found(&self) -> usize {
        self.risks.len()
    }

    pub fn rewrites_attached(&self) -> usize {
        self.risks.iter().filter(|r| r.has_rewrite()).count()
    }
}

/// Attaches rewrite `i` to risk `i`. Risks past the end of `rewrites` keep
/// no rewrite; surplus rewrites are ignored.
pub fn merge_rewrites(risks: &mut [DetectedRisk], rewrites: Vec<String>) -> usize {
    let mut attached = 0;
    for (risk, rewrite) in risks.iter_mut().zip(rewrites) {
        risk.attach_rewrite(rewrite);
        attached += 1;
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Severity;
    use crate::domain::risk::fingerprint;

    fn risk(clause: &str) -> DetectedRisk {
        DetectedRisk {
            id: fingerprint("Governing Law", clause),
            clause_text: clause.to_string(),
            risk_type: "Governing Law".to_string(),
            severity: Severity::Low,
            explanation: String::new(),
            matched_span: clause.to_string(),
            start_offset: 0,
            end_offset: clause.chars().count(),
            suggested_rewrite: None,
        }
    }

    #[test]
    fn merges_by_position() {
        let mut risks = vec![risk("a"), risk("b")];
        let attached = merge_rewrites(&mut risks, vec!["A".into(), "B".into()]);

        assert_eq!(attached, 2);
        assert_eq!(risks[0].suggested_rewrite.as_deref(), Some("A"));
        assert_eq!(risks[1].suggested_rewrite.as_deref(), Some("B"));
    }

    #[test]
    fn short_rewrite_list_leaves_tail_untouched() {
        let mut risks = vec![risk("a"), risk("b"), risk("c")];
        let attached = merge_rewrites(&mut risks, vec!["A".into()]);

        assert_eq!(attached, 1);
        assert!(risks[0].has_rewrite());
        assert!(!risks[1].has_rewrite());
        assert!(!risks[2].has_rewrite());
    }

    #[test]
    fn surplus_rewrites_are_ignored() {
        let mut risks = vec![risk("a")];
        assert_eq!(merge_rewrites(&mut risks, vec!["A".into(), "B".into()]), 1);
    }

    #[test]
    fn counts_risks_and_rewrites() {
        let mut risks = vec![risk("a"), risk("b")];
        merge_rewrites(&mut risks, vec!["A".into()]);
        let result = AnalysisResult {
            document_name: TEXT_INPUT_NAME.to_string(),
            text_length: 2,
            risks,
            summary: None,
            original_text: "ab".to_string(),
        };

        assert_eq!(result.risks_found(), 2);
        assert_eq!(result.rewrites_attached(), 1);
    }
}
