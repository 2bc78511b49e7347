//! # gap-schema
//!
//! JSON Schema generation, validation, and registry for Gapcheck.
//!
//! Snapshot, report, and view types are defined in `gap-core` with
//! `#[derive(JsonSchema)]`. This crate builds their schemas once and validates
//! incoming JSON (snapshot files fed to `gapck`) before it is deserialized.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
