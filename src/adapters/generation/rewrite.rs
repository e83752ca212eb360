//! Batched clause rewriting over an AI provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::GenerationSettings;
use crate::domain::foundation::AnalysisId;
use crate::domain::rewrite::{
    parse_rewrites, parse_truncated_rewrites, RewritePrompt, REWRITE_SYSTEM_PROMPT,
};
use crate::ports::{
    AIProvider, CompletionRequest, FinishReason, GenerationPurpose, MessageRole,
    RequestMetadata, RewriteOutcome, RewriteSuggester,
};

pub struct AiRewriteSuggester {
    provider: Option<Arc<dyn AIProvider>>,
    settings: GenerationSettings,
}

impl AiRewriteSuggester {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            provider,
            settings: GenerationSettings::default(),
        }
    }

    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[async_trait]
impl RewriteSuggester for AiRewriteSuggester {
    async fn suggest(&self, analysis_id: AnalysisId, clauses: &[String]) -> RewriteOutcome {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return RewriteOutcome::Unavailable,
        };

        if clauses.is_empty() {
            return RewriteOutcome::Rewrites(Vec::new());
        }

        let prompt = RewritePrompt::build(clauses);
        let expected = prompt.clause_count();

        let request = CompletionRequest::new(RequestMetadata::new(
            analysis_id,
            GenerationPurpose::Rewrite,
        ))
        .with_system_prompt(REWRITE_SYSTEM_PROMPT)
        .with_message(MessageRole::User, prompt.into_text())
        .with_max_tokens(self.settings.max_output_tokens)
        .with_temperature(self.settings.temperature);

        match provider.complete(request).await {
            Ok(response) if response.finish_reason == FinishReason::Length => {
                warn!(
                    %analysis_id,
                    clauses = expected,
                    completion_tokens = response.usage.completion_tokens,
                    "rewrite reply hit the output token limit; dropping its last rewrite"
                );
                RewriteOutcome::Rewrites(parse_truncated_rewrites(&response.content, expected))
            }
            Ok(response) => {
                let rewrites = parse_rewrites(&response.content, expected);
                debug!(%analysis_id, clauses = expected, "rewrites generated");
                RewriteOutcome::Rewrites(rewrites)
            }
            Err(err) => {
                warn!(
                    %analysis_id,
                    error = %err,
                    transient = err.is_transient(),
                    "rewrite generation failed"
                );
                RewriteOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::rewrite::REWRITE_PLACEHOLDER;
    use crate::ports::AIError;

    fn clauses(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn suggester(mock: &MockAIProvider) -> AiRewriteSuggester {
        AiRewriteSuggester::new(Some(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn unconfigured_is_unavailable() {
        let outcome = AiRewriteSuggester::unconfigured()
            .suggest(AnalysisId::new(), &clauses(&["a"]))
            .await;
        assert_eq!(outcome, RewriteOutcome::Unavailable);
    }

    #[tokio::test]
    async fn empty_batch_skips_provider() {
        let mock = MockAIProvider::new();
        let outcome = suggester(&mock).suggest(AnalysisId::new(), &[]).await;

        assert_eq!(outcome, RewriteOutcome::Rewrites(vec![]));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn batches_all_clauses_into_one_call() {
        let mock = MockAIProvider::new().with_response("REWRITE 1: A2\nREWRITE 2: B2");
        let outcome = suggester(&mock)
            .suggest(AnalysisId::new(), &clauses(&["A", "B"]))
            .await;

        assert_eq!(
            outcome,
            RewriteOutcome::Rewrites(vec!["A2".to_string(), "B2".to_string()])
        );
        assert_eq!(mock.call_count(), 1);

        let call = &mock.get_calls()[0];
        assert_eq!(call.metadata.purpose, GenerationPurpose::Rewrite);
        assert!(call.user_text().contains("CLAUSE 1:\nA"));
        assert!(call.user_text().contains("CLAUSE 2:\nB"));
    }

    #[tokio::test]
    async fn partial_reply_is_padded() {
        let mock = MockAIProvider::new().with_response("REWRITE 1: one\nREWRITE 2: two");
        let outcome = suggester(&mock)
            .suggest(AnalysisId::new(), &clauses(&["a", "b", "c"]))
            .await;

        let rewrites = outcome.into_rewrites().unwrap();
        assert_eq!(rewrites.len(), 3);
        assert_eq!(rewrites[2], REWRITE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn length_limited_reply_loses_its_last_rewrite() {
        let mock = MockAIProvider::new().with_response_full(
            "REWRITE 1: Both parties agree. REWRITE 2: The Buy",
            FinishReason::Length,
        );
        let outcome = suggester(&mock)
            .suggest(AnalysisId::new(), &clauses(&["a", "b"]))
            .await;

        assert_eq!(
            outcome,
            RewriteOutcome::Rewrites(vec![
                "Both parties agree.".to_string(),
                REWRITE_PLACEHOLDER.to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let mock = MockAIProvider::new().with_error(AIError::AuthenticationFailed);
        let outcome = suggester(&mock)
            .suggest(AnalysisId::new(), &clauses(&["a"]))
            .await;

        assert_eq!(outcome, RewriteOutcome::Failed(AIError::AuthenticationFailed));
    }
}
