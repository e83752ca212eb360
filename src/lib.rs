//! Contract Lens - Legal document risk analysis
//!
//! Scans contract text for risky clauses with a fixed pattern catalog,
//! then asks a text generation backend for a plain-language summary and
//! balanced rewrites of each flagged clause. Detection is local and always
//! succeeds; generation degrades to absent values when the backend is
//! unconfigured or failing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
