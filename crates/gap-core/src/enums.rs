//! Severity, lifecycle phase, category, and snapshot tag enums for Gapcheck.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for display and table rendering.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// How urgently a finding needs attention.
///
/// Variants are declared from most to least urgent, so the derived `Ord`
/// sorts `critical` first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocking gap.
    Critical,
    /// Should be fixed before delivery.
    Warning,
    /// Nice to fix.
    Info,
    /// No issue; only emitted when pass reporting is enabled.
    Pass,
}

impl Severity {
    /// Severities that represent an actual gap, most urgent first.
    pub const GAPS: [Self; 3] = [Self::Critical, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Pass => "pass",
        }
    }

    /// Whether this severity represents a gap the designer should act on.
    #[must_use]
    pub const fn is_gap(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// ADDIE lifecycle phase a rule belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Analysis,
    Design,
    Development,
    Implementation,
    Evaluation,
}

impl Phase {
    /// All phases in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Analysis,
        Self::Design,
        Self::Development,
        Self::Implementation,
        Self::Evaluation,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Design => "design",
            Self::Development => "development",
            Self::Implementation => "implementation",
            Self::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GapCategory
// ---------------------------------------------------------------------------

/// Display bucket a finding is grouped under.
///
/// Assigned by the originating rule at emission time; classification never
/// inspects finding text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    /// A whole lifecycle phase artifact is missing or thin.
    Lifecycle,
    /// Objectives, strategies, or lessons lacking assessment.
    Assessment,
    /// Modules or lessons lacking content.
    ContentCoverage,
    /// Shape of the outline itself.
    Structure,
}

impl GapCategory {
    pub const ALL: [Self; 4] = [
        Self::Lifecycle,
        Self::Assessment,
        Self::ContentCoverage,
        Self::Structure,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lifecycle => "lifecycle",
            Self::Assessment => "assessment",
            Self::ContentCoverage => "content_coverage",
            Self::Structure => "structure",
        }
    }
}

impl fmt::Display for GapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DocumentFormat
// ---------------------------------------------------------------------------

/// Format tag of a generated design document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    SlideDeck,
    ParticipantWorkbook,
    FacilitatorGuide,
    JobAid,
    Storyboard,
    AssessmentBank,
}

impl DocumentFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SlideDeck => "slide_deck",
            Self::ParticipantWorkbook => "participant_workbook",
            Self::FacilitatorGuide => "facilitator_guide",
            Self::JobAid => "job_aid",
            Self::Storyboard => "storyboard",
            Self::AssessmentBank => "assessment_bank",
        }
    }

    /// Whether this format is an instructor/facilitator guide.
    #[must_use]
    pub const fn is_facilitator_guide(self) -> bool {
        matches!(self, Self::FacilitatorGuide)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CognitiveLevel
// ---------------------------------------------------------------------------

/// Bloom's taxonomy level of a learning objective.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl CognitiveLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remember => "remember",
            Self::Understand => "understand",
            Self::Apply => "apply",
            Self::Analyze => "analyze",
            Self::Evaluate => "evaluate",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssessmentType
// ---------------------------------------------------------------------------

/// Assessment attached to a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentType {
    KnowledgeCheck,
    Quiz,
    Assignment,
    Project,
    Discussion,
    Simulation,
    Exam,
}

impl AssessmentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KnowledgeCheck => "knowledge_check",
            Self::Quiz => "quiz",
            Self::Assignment => "assignment",
            Self::Project => "project",
            Self::Discussion => "discussion",
            Self::Simulation => "simulation",
            Self::Exam => "exam",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResolutionPolicy
// ---------------------------------------------------------------------------

/// What happens to resolved findings when a project is re-run.
///
/// ```text
/// reset          every finding of the new report starts unresolved
/// carry_forward  findings whose fingerprint was resolved stay resolved
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    #[default]
    Reset,
    CarryForward,
}

impl ResolutionPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::CarryForward => "carry_forward",
        }
    }
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_most_urgent_first() {
        let mut severities = vec![
            Severity::Info,
            Severity::Pass,
            Severity::Critical,
            Severity::Warning,
        ];
        severities.sort();
        assert_eq!(
            severities,
            vec![
                Severity::Critical,
                Severity::Warning,
                Severity::Info,
                Severity::Pass
            ]
        );
    }

    #[test]
    fn pass_is_not_a_gap() {
        assert!(Severity::Critical.is_gap());
        assert!(Severity::Info.is_gap());
        assert!(!Severity::Pass.is_gap());
    }

    #[test]
    fn serde_matches_as_str() {
        for phase in Phase::ALL {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.as_str()));
        }
        for category in GapCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        let json = serde_json::to_string(&ResolutionPolicy::CarryForward).unwrap();
        assert_eq!(json, "\"carry_forward\"");
    }

    #[test]
    fn only_facilitator_guide_is_facilitator_guide() {
        assert!(DocumentFormat::FacilitatorGuide.is_facilitator_guide());
        assert!(!DocumentFormat::SlideDeck.is_facilitator_guide());
        assert!(!DocumentFormat::ParticipantWorkbook.is_facilitator_guide());
    }

    #[test]
    fn resolution_policy_defaults_to_reset() {
        assert_eq!(ResolutionPolicy::default(), ResolutionPolicy::Reset);
    }
}
