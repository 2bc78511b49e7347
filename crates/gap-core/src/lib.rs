//! # gap-core
//!
//! Core types for the Gapcheck completeness engine.
//!
//! This crate provides the types shared across all Gapcheck crates:
//! - Snapshot structs (analysis state, outline, design documents)
//! - Finding and report entities
//! - Severity, phase, and category enums
//! - Finding id formatting
//! - View types for the display layer
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
