use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::{AnalysisState, CourseOutline, DesignDocument, Module};

/// Read-only, point-in-time view of a project fed into the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub project_id: String,
    #[serde(default)]
    pub analysis: AnalysisState,
    #[serde(default)]
    pub outline: Option<CourseOutline>,
    #[serde(default)]
    pub documents: Vec<DesignDocument>,
}

impl ProjectSnapshot {
    /// Snapshot of a project with no analysis, outline, or documents.
    #[must_use]
    pub fn empty(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    /// Outline modules, or an empty slice when there is no outline.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        self.outline
            .as_ref()
            .map_or(&[], |outline| outline.modules.as_slice())
    }

    /// Number of documents tagged with `module_id`.
    #[must_use]
    pub fn documents_for(&self, module_id: &str) -> usize {
        self.documents
            .iter()
            .filter(|document| document.module_id == module_id)
            .count()
    }

    /// Number of outline modules with at least one associated document.
    #[must_use]
    pub fn covered_modules(&self) -> usize {
        self.modules()
            .iter()
            .filter(|module| self.documents_for(&module.id) > 0)
            .count()
    }

    /// Check that module ids are non-empty and unique, and that lesson and
    /// objective ids are unique within their module.
    ///
    /// Documents pointing at unknown modules are allowed; they simply cover
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending id.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut module_ids = HashSet::new();
        for (index, module) in self.modules().iter().enumerate() {
            if module.id.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "{} has an empty id",
                    module.label(index)
                )));
            }
            if !module_ids.insert(module.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate module id '{}'",
                    module.id
                )));
            }

            let mut lesson_ids = HashSet::new();
            for lesson in &module.lessons {
                if !lesson_ids.insert(lesson.id.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "duplicate lesson id '{}' in module '{}'",
                        lesson.id, module.id
                    )));
                }
            }

            let mut objective_ids = HashSet::new();
            for objective in &module.objectives {
                if !objective_ids.insert(objective.id.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "duplicate objective id '{}' in module '{}'",
                        objective.id, module.id
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DocumentFormat;

    fn document(id: &str, module_id: &str) -> DesignDocument {
        DesignDocument {
            id: id.into(),
            module_id: module_id.into(),
            format: DocumentFormat::SlideDeck,
            title: String::new(),
        }
    }

    #[test]
    fn empty_snapshot_has_no_modules() {
        let snapshot = ProjectSnapshot::empty("prj-1");
        assert_eq!(snapshot.project_id, "prj-1");
        assert!(snapshot.modules().is_empty());
        assert_eq!(snapshot.covered_modules(), 0);
    }

    #[test]
    fn covered_modules_ignores_orphan_documents() {
        let snapshot = ProjectSnapshot {
            project_id: "prj-1".into(),
            outline: Some(CourseOutline {
                modules: vec![
                    Module {
                        id: "mod-1".into(),
                        ..Default::default()
                    },
                    Module {
                        id: "mod-2".into(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }),
            documents: vec![
                document("doc-1", "mod-1"),
                document("doc-2", "mod-1"),
                document("doc-3", "mod-gone"),
            ],
            ..Default::default()
        };
        assert_eq!(snapshot.documents_for("mod-1"), 2);
        assert_eq!(snapshot.covered_modules(), 1);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_module_ids() {
        let module = Module {
            id: "mod-1".into(),
            ..Default::default()
        };
        let snapshot = ProjectSnapshot {
            project_id: "prj-1".into(),
            outline: Some(CourseOutline {
                modules: vec![module.clone(), module],
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate module id 'mod-1'"));
    }

    #[test]
    fn validate_rejects_blank_module_id() {
        let snapshot = ProjectSnapshot {
            project_id: "prj-1".into(),
            outline: Some(CourseOutline {
                modules: vec![Module::default()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(matches!(snapshot.validate(), Err(CoreError::Validation(_))));
    }
}
