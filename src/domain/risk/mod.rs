//! Risk module - Catalog of risky clause categories and the detector
//! that finds them in contract text.

mod catalog;
mod clause;
mod detected_risk;
mod detector;

pub use catalog::{CatalogError, PatternCatalog, RiskDefinition, RiskPattern, STANDARD_DEFINITIONS};
pub use detected_risk::{fingerprint, DetectedRisk, FINGERPRINT_LEN};
pub use detector::{DetectorSettings, RiskDetector, DEFAULT_CONTEXT_RADIUS};
