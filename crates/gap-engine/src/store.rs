//! Latest report per (project, battery) plus resolution tracking.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use gap_core::entities::{Finding, Report};
use gap_core::enums::ResolutionPolicy;
use gap_core::errors::CoreError;

use crate::report::summary_line;

/// Key of one stored report.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportKey {
    pub project_id: String,
    pub battery: String,
}

impl ReportKey {
    #[must_use]
    pub fn new(project_id: impl Into<String>, battery: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            battery: battery.into(),
        }
    }
}

/// Owns every report. Each key holds only the most recent run.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: HashMap<ReportKey, Report>,
    runs: u64,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next run number. Finding ids embed it, so ids from
    /// different runs never collide.
    pub fn next_run(&mut self) -> u64 {
        self.runs += 1;
        self.runs
    }

    /// Store `report`, replacing the previous one for its key wholesale.
    ///
    /// Under [`ResolutionPolicy::CarryForward`], findings whose fingerprint
    /// was resolved in the replaced report start resolved and drop out of the
    /// summary line. Returns the stored report.
    pub fn replace(&mut self, mut report: Report, policy: ResolutionPolicy) -> &Report {
        let key = ReportKey::new(&report.project_id, &report.battery);

        if policy == ResolutionPolicy::CarryForward {
            if let Some(previous) = self.reports.get(&key) {
                let resolved: HashSet<String> = previous
                    .findings
                    .iter()
                    .filter(|finding| finding.resolved)
                    .map(Finding::fingerprint)
                    .collect();
                let mut carried = 0usize;
                for finding in &mut report.findings {
                    if resolved.contains(&finding.fingerprint()) {
                        finding.resolved = true;
                        carried += 1;
                    }
                }
                if carried > 0 {
                    report.summary = summary_line(&report.findings);
                }
                tracing::debug!(
                    project = %key.project_id,
                    battery = %key.battery,
                    carried,
                    "carried resolution state forward"
                );
            }
        }

        match self.reports.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(report);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(report),
        }
    }

    #[must_use]
    pub fn get(&self, project_id: &str, battery: &str) -> Option<&Report> {
        self.reports.get(&ReportKey::new(project_id, battery))
    }

    /// Like [`get`](Self::get), but a missing report is an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` when no run has been stored for the key.
    pub fn require(&self, project_id: &str, battery: &str) -> Result<&Report, CoreError> {
        self.get(project_id, battery).ok_or_else(|| CoreError::NotFound {
            entity_type: "report".to_string(),
            id: format!("{project_id}/{battery}"),
        })
    }

    /// Mark one finding resolved without rerunning.
    ///
    /// An unknown project, battery or finding id is a no-op. Returns `true`
    /// only when a flag actually changed.
    pub fn resolve(&mut self, project_id: &str, battery: &str, finding_id: &str) -> bool {
        let Some(finding) = self
            .reports
            .get_mut(&ReportKey::new(project_id, battery))
            .and_then(|report| report.finding_mut(finding_id))
        else {
            tracing::debug!(project_id, battery, finding_id, "resolve: no such finding");
            return false;
        };
        finding.resolve()
    }

    /// Drop every report owned by `project_id`. Returns how many were removed.
    pub fn remove_project(&mut self, project_id: &str) -> usize {
        let before = self.reports.len();
        self.reports.retain(|key, _| key.project_id != project_id);
        before - self.reports.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use gap_core::enums::{GapCategory, Phase, Severity};
    use pretty_assertions::assert_eq;

    use super::*;

    fn finding(id: &str, location: &str, subject: &str) -> Finding {
        Finding {
            id: id.into(),
            rule_id: "structure.module_description".into(),
            category: GapCategory::Structure,
            phase: Phase::Design,
            severity: Severity::Warning,
            title: "Module missing description".into(),
            description: format!("{location} has no description."),
            location: location.into(),
            subject: subject.into(),
            suggestion: "Summarize what the module covers.".into(),
            resolved: false,
        }
    }

    /// One finding per module id, labelled by position like the rules do.
    fn report(project_id: &str, run: u64, module_ids: &[&str]) -> Report {
        Report {
            project_id: project_id.into(),
            battery: "completeness".into(),
            run,
            score: 50,
            findings: module_ids
                .iter()
                .enumerate()
                .map(|(i, module_id)| {
                    finding(
                        &gap_core::ids::finding_id(run, i),
                        &format!("Module {}", i + 1),
                        module_id,
                    )
                })
                .collect(),
            checklist: Vec::new(),
            summary: String::new(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn run_numbers_increase() {
        let mut store = ReportStore::new();
        assert_eq!(store.next_run(), 1);
        assert_eq!(store.next_run(), 2);
    }

    #[test]
    fn resolve_flips_exactly_one_flag() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &["ma", "mb"]), ResolutionPolicy::Reset);

        assert!(store.resolve("prj-1", "completeness", "fnd-0001-002"));
        let stored = store.get("prj-1", "completeness").expect("stored");
        assert!(!stored.findings[0].resolved);
        assert!(stored.findings[1].resolved);

        // already resolved
        assert!(!store.resolve("prj-1", "completeness", "fnd-0001-002"));
    }

    #[test]
    fn resolve_unknown_targets_is_noop() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &["ma"]), ResolutionPolicy::Reset);
        let before = store.get("prj-1", "completeness").cloned();

        assert!(!store.resolve("prj-1", "completeness", "fnd-9999-001"));
        assert!(!store.resolve("prj-2", "completeness", "fnd-0001-001"));
        assert!(!store.resolve("prj-1", "other", "fnd-0001-001"));
        assert_eq!(store.get("prj-1", "completeness").cloned(), before);
    }

    #[test]
    fn reset_policy_drops_resolution_on_replace() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &["ma"]), ResolutionPolicy::Reset);
        store.resolve("prj-1", "completeness", "fnd-0001-001");

        let stored = store.replace(report("prj-1", 2, &["ma"]), ResolutionPolicy::Reset);
        assert_eq!(stored.run, 2);
        assert!(!stored.findings[0].resolved);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn carry_forward_follows_the_module_not_its_position() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &["ma", "mb"]), ResolutionPolicy::CarryForward);
        // "Module 1" is ma
        store.resolve("prj-1", "completeness", "fnd-0001-001");

        let stored = store.replace(
            report("prj-1", 2, &["mb", "ma"]),
            ResolutionPolicy::CarryForward,
        );
        assert_eq!(stored.findings[0].location, "Module 1");
        assert_eq!(stored.findings[0].subject, "mb");
        assert!(!stored.findings[0].resolved);
        assert_eq!(stored.findings[1].location, "Module 2");
        assert_eq!(stored.findings[1].subject, "ma");
        assert!(stored.findings[1].resolved);
        assert_eq!(stored.summary, "1 gap found: 0 critical, 1 warning, 0 info.");
    }

    #[test]
    fn carry_forward_without_prior_resolution_keeps_summary() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &["ma"]), ResolutionPolicy::CarryForward);
        let stored = store.replace(report("prj-1", 2, &["ma"]), ResolutionPolicy::CarryForward);
        assert!(!stored.findings[0].resolved);
        assert_eq!(stored.summary, "");
    }

    #[test]
    fn require_reports_missing_key() {
        let store = ReportStore::new();
        let err = store.require("prj-1", "completeness").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref id, .. } if id == "prj-1/completeness"));
    }

    #[test]
    fn remove_project_drops_only_its_reports() {
        let mut store = ReportStore::new();
        store.replace(report("prj-1", 1, &[]), ResolutionPolicy::Reset);
        let mut other_battery = report("prj-1", 2, &[]);
        other_battery.battery = "structure-only".into();
        store.replace(other_battery, ResolutionPolicy::Reset);
        store.replace(report("prj-2", 3, &[]), ResolutionPolicy::Reset);

        assert_eq!(store.remove_project("prj-1"), 2);
        assert_eq!(store.len(), 1);
        assert!(store.get("prj-2", "completeness").is_some());
        assert_eq!(store.remove_project("prj-1"), 0);
    }
}
