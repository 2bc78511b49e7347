//! View types handed to the display layer and printed by `gapck`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Finding;
use crate::enums::{GapCategory, Phase, Severity};

/// Completed/expected checklist weight for one lifecycle phase.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PhaseScore {
    pub phase: Phase,
    pub completed: u32,
    pub expected: u32,
}

/// Open findings ordered critical, then warning, then info.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionItemsView {
    pub project_id: String,
    pub battery: String,
    pub score: u8,
    /// Open findings before any limit was applied.
    pub total_open: usize,
    pub items: Vec<Finding>,
}

/// Findings partitioned by display category, in report order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GapBuckets {
    pub lifecycle: Vec<Finding>,
    pub assessment: Vec<Finding>,
    pub content_coverage: Vec<Finding>,
    pub structure: Vec<Finding>,
}

impl GapBuckets {
    #[must_use]
    pub fn bucket(&self, category: GapCategory) -> &[Finding] {
        match category {
            GapCategory::Lifecycle => &self.lifecycle,
            GapCategory::Assessment => &self.assessment,
            GapCategory::ContentCoverage => &self.content_coverage,
            GapCategory::Structure => &self.structure,
        }
    }

    pub fn bucket_mut(&mut self, category: GapCategory) -> &mut Vec<Finding> {
        match category {
            GapCategory::Lifecycle => &mut self.lifecycle,
            GapCategory::Assessment => &mut self.assessment,
            GapCategory::ContentCoverage => &mut self.content_coverage,
            GapCategory::Structure => &mut self.structure,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        GapCategory::ALL
            .iter()
            .map(|category| self.bucket(*category).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Count of findings at one severity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeverityCount {
    pub severity: Severity,
    pub open: usize,
    pub resolved: usize,
}

/// Compact report overview with duplicate messages collapsed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportSummaryView {
    pub project_id: String,
    pub battery: String,
    pub score: u8,
    pub summary: String,
    pub counts: Vec<SeverityCount>,
    pub phases: Vec<PhaseScore>,
    /// Distinct open-finding descriptions, first occurrence kept.
    pub messages: Vec<String>,
}

/// Description of a rule in a battery, for listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RuleDescriptor {
    pub id: String,
    pub phase: Phase,
    pub category: GapCategory,
    /// Weight in the completeness score; `None` for rules that are not
    /// checklist items.
    pub weight: Option<u32>,
    pub summary: String,
}
