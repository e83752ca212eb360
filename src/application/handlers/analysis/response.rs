//! ResponseAssembler - Shapes an analysis result for callers.

use serde::Serialize;

use crate::domain::analysis::AnalysisResult;
use crate::domain::foundation::{AnalysisId, Severity};
use crate::domain::risk::DetectedRisk;

/// Externally-shaped analysis record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: AnalysisId,
    pub document_name: String,
    pub text_length: usize,
    pub risks_found: usize,
    pub risks: Vec<RiskView>,
    pub original_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One risk as shown to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskView {
    pub id: String,
    pub clause: String,
    pub risk_type: String,
    pub severity: Severity,
    pub explanation: String,
    /// The matched words, exactly as written in the document.
    pub original_text: String,
    pub start_position: usize,
    pub end_position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_rewrite: Option<String>,
}

impl From<&DetectedRisk> for RiskView {
    fn from(risk: &DetectedRisk) -> Self {
        Self {
            id: risk.id.clone(),
            clause: risk.clause_text.clone(),
            risk_type: risk.risk_type.clone(),
            severity: risk.severity,
            explanation: risk.explanation.clone(),
            original_text: risk.matched_span.clone(),
            start_position: risk.start_offset,
            end_position: risk.end_offset,
            suggested_rewrite: risk.suggested_rewrite.clone(),
        }
    }
}

/// Pure transform from result to response.
pub struct ResponseAssembler;

impl ResponseAssembler {
    pub fn assemble(analysis_id: AnalysisId, result: &AnalysisResult) -> AnalysisResponse {
        AnalysisResponse {
            analysis_id,
            document_name: result.document_name.clone(),
            text_length: result.text_length,
            risks_found: result.risks_found(),
            risks: result.risks.iter().map(RiskView::from).collect(),
            original_text: result.original_text.clone(),
            summary: result.summary.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::fingerprint;
    use serde_json::json;
    use uuid::Uuid;

    fn result(summary: Option<&str>, rewrite: Option<&str>) -> AnalysisResult {
        let clause = "Vendor shall indemnify Customer.";
        AnalysisResult {
            document_name: "msa.txt".to_string(),
            text_length: clause.len(),
            risks: vec![DetectedRisk {
                id: fingerprint("Indemnification", clause),
                clause_text: clause.to_string(),
                risk_type: "Indemnification".to_string(),
                severity: Severity::High,
                explanation: "You may have to cover the other party's losses.".to_string(),
                matched_span: "shall indemnify".to_string(),
                start_offset: 7,
                end_offset: 22,
                suggested_rewrite: rewrite.map(str::to_string),
            }],
            summary: summary.map(str::to_string),
            original_text: clause.to_string(),
        }
    }

    #[test]
    fn shapes_every_field() {
        let id = AnalysisId::from_uuid(Uuid::nil());
        let response = ResponseAssembler::assemble(id, &result(Some("An MSA."), Some("Mutual.")));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "analysis_id": "00000000-0000-0000-0000-000000000000",
                "document_name": "msa.txt",
                "text_length": 32,
                "risks_found": 1,
                "risks": [{
                    "id": fingerprint("Indemnification", "Vendor shall indemnify Customer."),
                    "clause": "Vendor shall indemnify Customer.",
                    "risk_type": "Indemnification",
                    "severity": "high",
                    "explanation": "You may have to cover the other party's losses.",
                    "original_text": "shall indemnify",
                    "start_position": 7,
                    "end_position": 22,
                    "suggested_rewrite": "Mutual."
                }],
                "original_text": "Vendor shall indemnify Customer.",
                "summary": "An MSA."
            })
        );
    }

    #[test]
    fn omits_absent_summary_and_rewrite() {
        let response = ResponseAssembler::assemble(AnalysisId::new(), &result(None, None));
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("summary").is_none());
        assert!(value["risks"][0].get("suggested_rewrite").is_none());
    }
}
