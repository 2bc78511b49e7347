//! Service layer tying the reader, battery, scorer and report store together.
//!
//! `GapService` owns the collaborator source, one configured battery and the
//! report store. Every run follows the same steps:
//! 1. Read a fresh snapshot from the source
//! 2. Evaluate the battery (findings + checklist)
//! 3. Score the checklist and build the report
//! 4. Replace the stored report for (project, battery)

use chrono::Utc;
use gap_config::EngineConfig;
use gap_core::entities::Report;
use gap_core::errors::CoreError;
use gap_core::responses::{ActionItemsView, GapBuckets, ReportSummaryView};

use crate::battery::Battery;
use crate::classify;
use crate::error::EngineError;
use crate::reader::{self, ProjectSource};
use crate::report;
use crate::settings::EngineSettings;
use crate::store::ReportStore;

/// Gap-analysis engine for one battery over one project source.
#[derive(Debug)]
pub struct GapService<S> {
    source: S,
    battery: Battery,
    settings: EngineSettings,
    store: ReportStore,
}

impl<S: ProjectSource> GapService<S> {
    #[must_use]
    pub fn new(source: S, battery: Battery, settings: EngineSettings) -> Self {
        Self {
            source,
            battery,
            settings,
            store: ReportStore::new(),
        }
    }

    /// Standard battery named and trimmed per `config`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` if a threshold is out of range, or
    /// `EngineError::UnknownRule` if a disabled rule id does not exist.
    pub fn from_config(source: S, config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let battery = Battery::standard()
            .renamed(config.battery.clone())
            .without(&config.disabled_rules)?;
        tracing::debug!(
            battery = battery.name(),
            rules = battery.rules().len(),
            disabled = config.disabled_rules.len(),
            "battery configured"
        );
        Ok(Self::new(source, battery, EngineSettings::from(config)))
    }

    /// Evaluate the project and store the result, replacing any previous
    /// report for this battery.
    pub fn run_analysis(&mut self, project_id: &str) -> &Report {
        let snapshot = reader::read_snapshot(&self.source, project_id);
        let evaluation = self.battery.evaluate(&snapshot, &self.settings);
        let run = self.store.next_run();
        let report = report::build(
            project_id,
            self.battery.name(),
            run,
            evaluation,
            Utc::now(),
        );
        tracing::info!(
            project_id,
            battery = self.battery.name(),
            run,
            score = report.score,
            findings = report.findings.len(),
            "analysis complete"
        );
        self.store.replace(report, self.settings.resolution_policy)
    }

    #[must_use]
    pub fn report(&self, project_id: &str, battery: &str) -> Option<&Report> {
        self.store.get(project_id, battery)
    }

    /// Mark one finding resolved. Unknown ids are ignored; returns whether a
    /// flag changed.
    pub fn resolve_finding(&mut self, project_id: &str, battery: &str, finding_id: &str) -> bool {
        self.store.resolve(project_id, battery, finding_id)
    }

    /// Drop every stored report of a project. Returns how many were removed.
    pub fn close_project(&mut self, project_id: &str) -> usize {
        let removed = self.store.remove_project(project_id);
        tracing::debug!(project_id, removed, "project closed");
        removed
    }

    /// Open findings of this battery's latest report, most urgent first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the project has not been analyzed.
    pub fn action_items(
        &self,
        project_id: &str,
        limit: Option<usize>,
    ) -> Result<ActionItemsView, CoreError> {
        let report = self.store.require(project_id, self.battery.name())?;
        Ok(classify::action_items(report, limit))
    }

    /// Gap findings of this battery's latest report by category.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the project has not been analyzed.
    pub fn gap_buckets(&self, project_id: &str) -> Result<GapBuckets, CoreError> {
        let report = self.store.require(project_id, self.battery.name())?;
        Ok(classify::classify(&report.findings))
    }

    /// Summary view of this battery's latest report.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the project has not been analyzed.
    pub fn summary(&self, project_id: &str) -> Result<ReportSummaryView, CoreError> {
        let report = self.store.require(project_id, self.battery.name())?;
        Ok(classify::summarize(report))
    }

    #[must_use]
    pub const fn battery(&self) -> &Battery {
        &self.battery
    }

    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Collaborator data can change between runs; the next run sees it.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use gap_core::enums::ResolutionPolicy;

    use super::*;
    use crate::reader::InMemoryProjects;
    use crate::rules::{fixtures, ids};

    fn service() -> GapService<InMemoryProjects> {
        let projects: InMemoryProjects = [fixtures::complete()].into_iter().collect();
        GapService::new(projects, Battery::standard(), EngineSettings::default())
    }

    #[test]
    fn views_require_a_run() {
        let service = service();
        assert!(matches!(
            service.summary("prj-complete"),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn complete_project_has_no_action_items() {
        let mut service = service();
        service.run_analysis("prj-complete");
        let view = service.action_items("prj-complete", None).expect("analyzed");
        assert_eq!(view.score, 100);
        assert!(view.items.is_empty());
        assert!(service.gap_buckets("prj-complete").expect("analyzed").is_empty());
    }

    #[test]
    fn from_config_applies_name_and_disabled_rules() {
        let config = EngineConfig {
            battery: "lite".into(),
            disabled_rules: vec![ids::STRUCTURE_MODULE_COUNT.into()],
            resolution_policy: ResolutionPolicy::CarryForward,
            ..EngineConfig::default()
        };
        let service = GapService::from_config(InMemoryProjects::new(), &config).expect("valid");
        assert_eq!(service.battery().name(), "lite");
        assert!(service
            .battery()
            .rules()
            .iter()
            .all(|rule| rule.id != ids::STRUCTURE_MODULE_COUNT));
        assert_eq!(
            service.settings().resolution_policy,
            ResolutionPolicy::CarryForward
        );
    }

    #[test]
    fn from_config_rejects_unknown_disabled_rule() {
        let config = EngineConfig {
            disabled_rules: vec!["structure.nonsense".into()],
            ..EngineConfig::default()
        };
        let err = GapService::from_config(InMemoryProjects::new(), &config).unwrap_err();
        assert!(matches!(err, EngineError::UnknownRule(_)));
    }

    #[test]
    fn from_config_rejects_invalid_ratio() {
        let config = EngineConfig {
            module_coverage_ratio: 1.5,
            ..EngineConfig::default()
        };
        let err = GapService::from_config(InMemoryProjects::new(), &config).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn close_project_forgets_reports() {
        let mut service = service();
        service.run_analysis("prj-complete");
        assert_eq!(service.close_project("prj-complete"), 1);
        assert!(service.report("prj-complete", "completeness").is_none());
    }
}
