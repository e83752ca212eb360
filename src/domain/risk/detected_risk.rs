//! DetectedRisk - One risky clause found in a document.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::foundation::Severity;

/// Hex characters kept from the clause digest.
pub const FINGERPRINT_LEN: usize = 12;

/// A clause matching one risk category.
///
/// Offsets are character positions of `matched_span` in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedRisk {
    /// Fingerprint of `(risk_type, clause_text)`.
    pub id: String,
    pub clause_text: String,
    pub risk_type: String,
    pub severity: Severity,
    pub explanation: String,
    pub matched_span: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub suggested_rewrite: Option<String>,
}

impl DetectedRisk {
    /// Attaches a proposed rewrite for this clause.
    pub fn attach_rewrite(&mut self, rewrite: impl Into<String>) {
        self.suggested_rewrite = Some(rewrite.into());
    }

    pub fn has_rewrite(&self) -> bool {
        self.suggested_rewrite.is_some()
    }
}

/// Stable identity of a risk: the first 12 hex chars of
/// SHA-256 over `"{risk_type}:{clause_text}"`.
pub fn fingerprint(risk_type: &str, clause_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(risk_type.as_bytes());
    hasher.update(b":");
    hasher.update(clause_text.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(FINGERPRINT_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic_and_short() {
        let a = fingerprint("Arbitration Clause", "Disputes go to binding arbitration");
        let b = fingerprint("Arbitration Clause", "Disputes go to binding arbitration");
        assert_eq!(a, b);
        assert_eq!(a.len(), FINGERPRINT_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fingerprint_differs_by_risk_type() {
        let clause = "You waive all rights to binding arbitration";
        assert_ne!(
            fingerprint("Arbitration Clause", clause),
            fingerprint("Waiver of Rights", clause)
        );
    }

    #[test]
    fn fingerprint_matches_known_digest_prefix() {
        // sha256("a:b")
        assert_eq!(fingerprint("a", "b"), "6783a31eabf6");
    }

    #[test]
    fn attach_rewrite_sets_suggestion() {
        let mut risk = DetectedRisk {
            id: fingerprint("Severability", "Severable."),
            clause_text: "Severable.".to_string(),
            risk_type: "Severability".to_string(),
            severity: Severity::Low,
            explanation: String::new(),
            matched_span: "Severable".to_string(),
            start_offset: 0,
            end_offset: 9,
            suggested_rewrite: None,
        };
        assert!(!risk.has_rewrite());
        risk.attach_rewrite("Each provision stands alone.");
        assert_eq!(
            risk.suggested_rewrite.as_deref(),
            Some("Each provision stands alone.")
        );
    }
}
