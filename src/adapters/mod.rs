//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Text generation backends (Gemini, mock)
//! - `generation` - Summary and rewrite generators over an AI provider
//! - `extraction` - PDF, DOCX and plain text extraction

pub mod ai;
pub mod extraction;
pub mod generation;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use extraction::DocumentTextExtractor;
pub use generation::{AiNarrativeGenerator, AiRewriteSuggester, GenerationSettings};
