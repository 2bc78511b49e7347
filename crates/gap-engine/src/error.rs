//! Engine error types.
//!
//! Evaluation itself is total over its input; these errors only arise while
//! assembling a battery or service from configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A rule id named in configuration does not exist in the battery.
    #[error("Unknown rule id: {0}")]
    UnknownRule(String),

    /// Configuration failed validation.
    #[error(transparent)]
    Config(#[from] gap_config::ConfigError),
}
