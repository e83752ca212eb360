//! Rewrite Suggester Port - Safer alternatives for risky clauses.

use async_trait::async_trait;

use crate::domain::foundation::AnalysisId;
use crate::ports::AIError;

/// Result of one batched rewrite request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// One rewrite per requested clause, in request order.
    Rewrites(Vec<String>),
    /// No generation backend is configured.
    Unavailable,
    /// The backend failed; the analysis continues without rewrites.
    Failed(AIError),
}

impl RewriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteOutcome::Rewrites(_) => "rewrites",
            RewriteOutcome::Unavailable => "unavailable",
            RewriteOutcome::Failed(_) => "failed",
        }
    }

    /// The rewrites, if any were produced.
    pub fn into_rewrites(self) -> Option<Vec<String>> {
        match self {
            RewriteOutcome::Rewrites(rewrites) => Some(rewrites),
            _ => None,
        }
    }
}

/// Port for batched clause rewriting.
///
/// # Contract
///
/// Implementations must:
/// - Return `Rewrites(vec![])` for an empty batch without calling the backend
/// - Return exactly `clauses.len()` rewrites on success
/// - Make at most one backend call per invocation
/// - Report backend failures as `Failed`, never panic
#[async_trait]
pub trait RewriteSuggester: Send + Sync {
    async fn suggest(&self, analysis_id: AnalysisId, clauses: &[String]) -> RewriteOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rewrites_yield_values() {
        let ok = RewriteOutcome::Rewrites(vec!["x".to_string()]);
        assert_eq!(ok.as_str(), "rewrites");
        assert_eq!(ok.into_rewrites(), Some(vec!["x".to_string()]));

        assert_eq!(RewriteOutcome::Unavailable.into_rewrites(), None);
        assert_eq!(
            RewriteOutcome::Failed(AIError::AuthenticationFailed).into_rewrites(),
            None
        );
    }
}
