//! Analysis module - Lifecycle and result of one document analysis.
//!
//! # Components
//!
//! - `AnalysisStage` - Request lifecycle (`Start → Detected → Summarized → Rewritten → Assembled`)
//! - `AnalysisResult` - Immutable outcome handed to the response assembler
//! - `merge_rewrites` - Positional merge of rewrites into detected risks

mod result;
mod stage;

pub use result::{merge_rewrites, AnalysisResult, TEXT_INPUT_NAME};
pub use stage::AnalysisStage;
