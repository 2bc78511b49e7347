//! ID prefixes and formatting helpers.
//!
//! Finding ids are `fnd-<run>-<seq>`: the store's run sequence number and the
//! finding's position in that run. They are unique within a store and are
//! never reused by a later run.

/// Prefix for finding ids.
pub const PREFIX_FINDING: &str = "fnd";

/// Format the id of the `seq`-th finding (zero-based) of run `run`.
#[must_use]
pub fn finding_id(run: u64, seq: usize) -> String {
    format!("{PREFIX_FINDING}-{run:04}-{:03}", seq + 1)
}
