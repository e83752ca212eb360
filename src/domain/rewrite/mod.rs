//! Rewrite module - Prompt and reply contract for batched clause rewrites.
//!
//! Clauses go out in one prompt as numbered `CLAUSE <n>:` blocks; the reply
//! is free text expected to carry `REWRITE <n>:` markers. The reply is never
//! trusted to be well-formed, so parsing is total.

mod parser;
mod prompt;

pub use parser::{parse_rewrites, parse_truncated_rewrites, REWRITE_PLACEHOLDER};
pub use prompt::{RewritePrompt, REWRITE_SYSTEM_PROMPT};
