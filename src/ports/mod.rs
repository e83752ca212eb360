//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the analysis pipeline and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text generation backend (Gemini, mock)
//! - `NarrativeGenerator` - Document summaries
//! - `RewriteSuggester` - Batched clause rewrites
//! - `TextExtractor` - Plain text from PDF, DOCX and TXT uploads

mod ai_provider;
mod narrative_generator;
mod rewrite_suggester;
mod text_extractor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, GenerationPurpose,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use narrative_generator::NarrativeGenerator;
pub use rewrite_suggester::{RewriteOutcome, RewriteSuggester};
pub use text_extractor::{DocumentFormat, ExtractionError, TextExtractor};
