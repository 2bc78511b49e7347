//! Cross-cutting error types for Gapcheck.
//!
//! Crate-specific errors (`ConfigError`, `SchemaError`, `EngineError`) live in
//! their own crates. The binary converges everything through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Gapcheck crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
