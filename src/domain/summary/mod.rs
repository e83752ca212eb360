//! Summary module - Rules for producing a plain-language document summary.

mod policy;

pub use policy::{
    summary_failure, SummaryInput, SummaryPolicy, DEFAULT_MIN_SUMMARY_CHARS,
    DEFAULT_SUMMARY_CHAR_BUDGET, SUMMARY_SYSTEM_PROMPT, SUMMARY_TOO_SHORT, SUMMARY_UNCONFIGURED,
};
