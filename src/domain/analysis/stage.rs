//! Analysis stage state machine.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Stage of a single analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Start,

    /// Risks detected. The only stage whose failure aborts the analysis.
    Detected,

    /// Summary resolved, possibly to an advisory or to nothing.
    Summarized,

    /// Rewrites resolved. Skipped when no risks were found.
    Rewritten,

    Assembled,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Start => "start",
            AnalysisStage::Detected => "detected",
            AnalysisStage::Summarized => "summarized",
            AnalysisStage::Rewritten => "rewritten",
            AnalysisStage::Assembled => "assembled",
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for AnalysisStage {
    fn valid_transitions(&self) -> Vec<Self> {
        use AnalysisStage::*;
        match self {
            Start => vec![Detected],
            Detected => vec![Summarized],
            // No risks means nothing to rewrite
            Summarized => vec![Rewritten, Assembled],
            Rewritten => vec![Assembled],
            Assembled => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnalysisStage::*;

    #[test]
    fn happy_path_reaches_assembled() {
        let stage = Start
            .transition_to(Detected)
            .and_then(|s| s.transition_to(Summarized))
            .and_then(|s| s.transition_to(Rewritten))
            .and_then(|s| s.transition_to(Assembled))
            .unwrap();
        assert_eq!(stage, Assembled);
        assert!(stage.is_terminal());
    }

    #[test]
    fn rewrite_stage_can_be_skipped() {
        assert!(Summarized.can_transition_to(&Assembled));
    }

    #[test]
    fn detection_cannot_be_skipped() {
        assert!(Start.transition_to(Summarized).is_err());
        assert!(Start.transition_to(Assembled).is_err());
    }

    #[test]
    fn stages_do_not_go_backwards() {
        assert!(!Rewritten.can_transition_to(&Summarized));
        assert!(!Assembled.can_transition_to(&Start));
    }

    #[test]
    fn only_assembled_is_terminal() {
        for stage in [Start, Detected, Summarized, Rewritten] {
            assert!(!stage.is_terminal(), "{} should not be terminal", stage);
        }
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(serde_json::to_string(&Summarized).unwrap(), "\"summarized\"");
    }
}
