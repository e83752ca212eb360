//! Generation Adapters.
//!
//! Implement the summary and rewrite ports on top of any `AIProvider`.
//! Both hold an optional provider; `None` means the backend is unconfigured
//! and each port answers with its "unavailable" result.

mod narrative;
mod rewrite;

pub use narrative::AiNarrativeGenerator;
pub use rewrite::AiRewriteSuggester;

/// Output cap per request. Thinking models count reasoning tokens against
/// it, so it is sized for a batch of rewrites plus reasoning.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 16384;

/// Sampling settings shared by both generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: 0.3,
        }
    }
}
