use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Finding;
use crate::enums::Phase;

/// Summary line reported when a run produces no gaps.
pub const ALL_CLEAR_SUMMARY: &str =
    "All components are in place. No gaps were found in the course design.";

/// Result of one checklist item in a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistResult {
    pub rule_id: String,
    pub phase: Phase,
    pub weight: u32,
    pub satisfied: bool,
}

/// Output of one run of a rule battery against a project.
///
/// ```text
/// no report ──run──▶ present ──run──▶ present (replaced)
///                       │
///                       └─resolve(id)─▶ present (one finding resolved)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Report {
    pub project_id: String,
    /// Name of the battery that produced this report.
    pub battery: String,
    /// Per-store run sequence number.
    pub run: u64,
    /// Completeness score in `0..=100`.
    pub score: u8,
    pub findings: Vec<Finding>,
    pub checklist: Vec<ChecklistResult>,
    pub summary: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn finding_mut(&mut self, id: &str) -> Option<&mut Finding> {
        self.findings.iter_mut().find(|finding| finding.id == id)
    }

    /// Unresolved gap findings in report order.
    pub fn open_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|finding| finding.is_open())
    }
}
