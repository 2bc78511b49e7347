//! Snapshot assembly from the three collaborator interfaces.
//!
//! The engine never caches what it reads: every run asks the collaborators
//! again and works on the returned point-in-time copy.

use std::collections::HashMap;

use gap_core::entities::{AnalysisState, CourseOutline, DesignDocument, ProjectSnapshot};

/// Needs-analysis collaborator.
pub trait AnalysisSource {
    /// Completion status and report. Unknown projects read as not started.
    fn analysis(&self, project_id: &str) -> AnalysisState;
}

/// Outline collaborator.
pub trait OutlineSource {
    fn outline(&self, project_id: &str) -> Option<CourseOutline>;
}

/// Design-document collaborator.
pub trait DocumentSource {
    fn documents(&self, project_id: &str) -> Vec<DesignDocument>;
}

/// Anything that can answer all three collaborator questions.
pub trait ProjectSource: AnalysisSource + OutlineSource + DocumentSource {}

impl<T: AnalysisSource + OutlineSource + DocumentSource> ProjectSource for T {}

/// Build the snapshot for `project_id`.
///
/// Documents that reference a module missing from the outline are kept (they
/// count toward "any document exists") but logged, since they cover nothing.
#[must_use]
pub fn read_snapshot<S: ProjectSource + ?Sized>(source: &S, project_id: &str) -> ProjectSnapshot {
    let snapshot = ProjectSnapshot {
        project_id: project_id.to_string(),
        analysis: source.analysis(project_id),
        outline: source.outline(project_id),
        documents: source.documents(project_id),
    };

    if snapshot.outline.is_some() {
        for document in &snapshot.documents {
            if !snapshot
                .modules()
                .iter()
                .any(|module| module.id == document.module_id)
            {
                tracing::warn!(
                    project_id,
                    document = %document.id,
                    module = %document.module_id,
                    "document references a module not in the outline"
                );
            }
        }
    }

    tracing::debug!(
        project_id,
        modules = snapshot.modules().len(),
        documents = snapshot.documents.len(),
        analysis_completed = snapshot.analysis.completed,
        "snapshot read"
    );
    snapshot
}

/// In-memory collaborator backed by whole snapshots keyed by project id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjects {
    projects: HashMap<String, ProjectSnapshot>,
}

impl InMemoryProjects {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a project, keyed by its `project_id`.
    pub fn insert(&mut self, snapshot: ProjectSnapshot) {
        self.projects.insert(snapshot.project_id.clone(), snapshot);
    }

    pub fn get_mut(&mut self, project_id: &str) -> Option<&mut ProjectSnapshot> {
        self.projects.get_mut(project_id)
    }
}

impl FromIterator<ProjectSnapshot> for InMemoryProjects {
    fn from_iter<I: IntoIterator<Item = ProjectSnapshot>>(iter: I) -> Self {
        let mut projects = Self::new();
        for snapshot in iter {
            projects.insert(snapshot);
        }
        projects
    }
}

impl AnalysisSource for InMemoryProjects {
    fn analysis(&self, project_id: &str) -> AnalysisState {
        self.projects
            .get(project_id)
            .map(|snapshot| snapshot.analysis.clone())
            .unwrap_or_default()
    }
}

impl OutlineSource for InMemoryProjects {
    fn outline(&self, project_id: &str) -> Option<CourseOutline> {
        self.projects
            .get(project_id)
            .and_then(|snapshot| snapshot.outline.clone())
    }
}

impl DocumentSource for InMemoryProjects {
    fn documents(&self, project_id: &str) -> Vec<DesignDocument> {
        self.projects
            .get(project_id)
            .map(|snapshot| snapshot.documents.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use gap_core::enums::DocumentFormat;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::fixtures;

    #[test]
    fn unknown_project_reads_as_empty() {
        let projects = InMemoryProjects::new();
        assert_eq!(
            read_snapshot(&projects, "prj-missing"),
            ProjectSnapshot::empty("prj-missing")
        );
    }

    #[test]
    fn known_project_round_trips() {
        let projects: InMemoryProjects = [fixtures::complete()].into_iter().collect();
        assert_eq!(read_snapshot(&projects, "prj-complete"), fixtures::complete());
    }

    #[test]
    fn reads_see_later_mutations() {
        let mut projects: InMemoryProjects = [fixtures::complete()].into_iter().collect();
        projects
            .get_mut("prj-complete")
            .expect("inserted")
            .documents
            .push(fixtures::document("doc-x", "m-gone", DocumentFormat::JobAid));
        let snapshot = read_snapshot(&projects, "prj-complete");
        assert_eq!(snapshot.documents.len(), 4);
        assert_eq!(snapshot.covered_modules(), 3);
    }
}
