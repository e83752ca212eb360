//! Summary generation over an AI provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::GenerationSettings;
use crate::domain::foundation::AnalysisId;
use crate::domain::summary::{
    summary_failure, SummaryInput, SummaryPolicy, SUMMARY_SYSTEM_PROMPT, SUMMARY_TOO_SHORT,
    SUMMARY_UNCONFIGURED,
};
use crate::ports::{
    AIProvider, CompletionRequest, FinishReason, GenerationPurpose, MessageRole,
    NarrativeGenerator, RequestMetadata,
};

pub struct AiNarrativeGenerator {
    provider: Option<Arc<dyn AIProvider>>,
    policy: SummaryPolicy,
    settings: GenerationSettings,
}

impl AiNarrativeGenerator {
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self {
            provider,
            policy: SummaryPolicy::default(),
            settings: GenerationSettings::default(),
        }
    }

    /// A generator with no backend; every summary is the unconfigured advisory.
    pub fn unconfigured() -> Self {
        Self::new(None)
    }

    pub fn with_policy(mut self, policy: SummaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[async_trait]
impl NarrativeGenerator for AiNarrativeGenerator {
    async fn summarize(&self, analysis_id: AnalysisId, text: &str) -> String {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return SUMMARY_UNCONFIGURED.to_string(),
        };

        let excerpt = match self.policy.prepare(text) {
            SummaryInput::TooShort => return SUMMARY_TOO_SHORT.to_string(),
            SummaryInput::Ready(excerpt) => excerpt,
        };

        let request = CompletionRequest::new(RequestMetadata::new(
            analysis_id,
            GenerationPurpose::Summary,
        ))
        .with_system_prompt(SUMMARY_SYSTEM_PROMPT)
        .with_message(MessageRole::User, self.policy.prompt(excerpt))
        .with_max_tokens(self.settings.max_output_tokens)
        .with_temperature(self.settings.temperature);

        match provider.complete(request).await {
            Ok(response) => {
                if response.finish_reason == FinishReason::Length {
                    warn!(%analysis_id, "summary hit the output token limit and may be cut short");
                }
                debug!(
                    %analysis_id,
                    provider = %provider.provider_info().name,
                    completion_tokens = response.usage.completion_tokens,
                    "summary generated"
                );
                response.content.trim().to_string()
            }
            Err(err) => {
                warn!(%analysis_id, error = %err, "summary generation failed");
                summary_failure(err)
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.provider.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::ports::AIError;

    const CONTRACT: &str = "This Services Agreement is entered into by Acme Corp and Beta LLC \
                            for the provision of consulting services through December 2025.";

    fn generator(mock: &MockAIProvider) -> AiNarrativeGenerator {
        AiNarrativeGenerator::new(Some(Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn unconfigured_returns_advisory() {
        let generator = AiNarrativeGenerator::unconfigured();

        assert!(!generator.is_configured());
        assert_eq!(
            generator.summarize(AnalysisId::new(), CONTRACT).await,
            SUMMARY_UNCONFIGURED
        );
    }

    #[tokio::test]
    async fn short_text_skips_provider() {
        let mock = MockAIProvider::new();
        let summary = generator(&mock).summarize(AnalysisId::new(), "Too short.").await;

        assert_eq!(summary, SUMMARY_TOO_SHORT);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn returns_trimmed_summary() {
        let mock = MockAIProvider::new().with_response("\n  A consulting agreement.  \n");
        let summary = generator(&mock).summarize(AnalysisId::new(), CONTRACT).await;

        assert_eq!(summary, "A consulting agreement.");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn sends_truncated_excerpt_with_summary_metadata() {
        let mock = MockAIProvider::new().with_response("ok");
        let policy = SummaryPolicy {
            min_chars: 10,
            char_budget: 20,
        };
        let id = AnalysisId::new();
        generator(&mock).with_policy(policy).summarize(id, CONTRACT).await;

        let call = &mock.get_calls()[0];
        assert_eq!(call.metadata.analysis_id, id);
        assert_eq!(call.metadata.purpose, GenerationPurpose::Summary);
        assert_eq!(call.system_prompt.as_deref(), Some(SUMMARY_SYSTEM_PROMPT));
        let prompt = call.user_text();
        assert!(prompt.contains(&CONTRACT[..20]));
        assert!(!prompt.contains(&CONTRACT[..21]));
    }

    #[tokio::test]
    async fn provider_failure_becomes_advisory() {
        let mock = MockAIProvider::new().with_error(AIError::unavailable("overloaded"));
        let summary = generator(&mock).summarize(AnalysisId::new(), CONTRACT).await;

        assert_eq!(
            summary,
            "Unable to generate summary: provider unavailable: overloaded"
        );
    }
}
