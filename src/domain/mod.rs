//! Domain layer containing analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, severity, errors, state machine)
//! - `risk` - Pattern catalog, risk detection and clause extraction
//! - `summary` - Summary policy and prompt
//! - `rewrite` - Rewrite prompt and reply parsing
//! - `analysis` - Analysis lifecycle and result

pub mod analysis;
pub mod foundation;
pub mod rewrite;
pub mod risk;
pub mod summary;
