//! Application configuration module
//!
//! Typed configuration loaded from environment variables with the `config`
//! and `dotenvy` crates. Variables use the `CONTRACT_LENS` prefix and `__`
//! between nested keys. Every value has a default, so an empty environment
//! yields a working configuration with the AI backend unconfigured.
//!
//! # Example
//!
//! ```no_run
//! use contract_lens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Gemini configured: {}", config.ai.has_gemini_key());
//! ```

mod ai;
mod analysis;
mod error;
mod telemetry;

pub use ai::AiConfig;
pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gemini backend for summaries and rewrites
    #[serde(default)]
    pub ai: AiConfig,

    /// Detector, summary and extraction tunables
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `CONTRACT_LENS__*` variables:
    ///
    /// - `CONTRACT_LENS__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key`
    /// - `CONTRACT_LENS__ANALYSIS__CONTEXT_RADIUS=80` -> `analysis.context_radius`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONTRACT_LENS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.analysis.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
