use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GapCategory, Phase, Severity};

/// A single reported gap, owned by the report of the run that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Finding {
    /// Unique within one run; regenerated on every run.
    pub id: String,
    /// Id of the rule that emitted this finding.
    pub rule_id: String,
    pub category: GapCategory,
    pub phase: Phase,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Module/lesson path or project area the finding refers to.
    pub location: String,
    /// Outline ids (`module` or `module/lesson`) or project area behind
    /// `location`. Unlike the label it does not change when modules move.
    #[serde(default)]
    pub subject: String,
    pub suggestion: String,
    #[serde(default)]
    pub resolved: bool,
}

impl Finding {
    /// Identity that is stable across runs: `rule_id@subject`.
    ///
    /// Falls back to the location label when no subject was recorded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let subject = if self.subject.is_empty() {
            &self.location
        } else {
            &self.subject
        };
        format!("{}@{subject}", self.rule_id)
    }

    /// Mark resolved. Returns `true` if the flag changed.
    pub fn resolve(&mut self) -> bool {
        let changed = !self.resolved;
        self.resolved = true;
        changed
    }

    /// Unresolved and an actual gap.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.resolved && self.severity.is_gap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding() -> Finding {
        Finding {
            id: "fnd-0001-001".into(),
            rule_id: "coverage.lesson_activities".into(),
            category: GapCategory::ContentCoverage,
            phase: Phase::Development,
            severity: Severity::Warning,
            title: "Lesson without activities".into(),
            description: "Lesson has no learning activities.".into(),
            location: "Module 1 > Lesson 1".into(),
            subject: "mod-1/les-1".into(),
            suggestion: "Add activities.".into(),
            resolved: false,
        }
    }

    #[test]
    fn fingerprint_joins_rule_and_subject() {
        assert_eq!(
            finding().fingerprint(),
            "coverage.lesson_activities@mod-1/les-1"
        );
    }

    #[test]
    fn fingerprint_ignores_the_positional_label() {
        let mut moved = finding();
        moved.location = "Module 3 > Lesson 1".into();
        assert_eq!(moved.fingerprint(), finding().fingerprint());
    }

    #[test]
    fn fingerprint_falls_back_to_location_without_subject() {
        let mut legacy = finding();
        legacy.subject.clear();
        assert_eq!(
            legacy.fingerprint(),
            "coverage.lesson_activities@Module 1 > Lesson 1"
        );
    }

    #[test]
    fn resolve_is_one_way() {
        let mut finding = finding();
        assert!(finding.is_open());
        assert!(finding.resolve());
        assert!(!finding.resolve());
        assert!(finding.resolved);
        assert!(!finding.is_open());
    }

    #[test]
    fn pass_findings_are_never_open() {
        let mut finding = finding();
        finding.severity = Severity::Pass;
        assert!(!finding.is_open());
    }
}
