//! Configuration error types

use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Semantic configuration problems
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}

impl ValidationError {
    pub fn must_be_positive(field: &'static str) -> Self {
        Self::MustBePositive { field }
    }

    pub fn out_of_range(field: &'static str, min: f64, max: f64) -> Self {
        Self::OutOfRange { field, min, max }
    }
}
