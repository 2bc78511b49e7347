use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssessmentType, CognitiveLevel};

/// Course outline as exposed by the outline collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CourseOutline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl CourseOutline {
    #[must_use]
    pub fn has_goal(&self) -> bool {
        !self.goal.trim().is_empty()
    }
}

/// A course module, in outline order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub assessment_strategy: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub objectives: Vec<LearningObjective>,
}

impl Module {
    /// Location label, e.g. `Module 2: Safety Basics`.
    ///
    /// `index` is the zero-based position in the outline.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("Module {}", index + 1)
        } else {
            format!("Module {}: {title}", index + 1)
        }
    }

    /// Position-independent key for findings about this module.
    #[must_use]
    pub fn subject(&self) -> String {
        self.id.clone()
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    #[must_use]
    pub fn has_assessment_strategy(&self) -> bool {
        !self.assessment_strategy.trim().is_empty()
    }

    #[must_use]
    pub fn unaligned_objectives(&self) -> usize {
        self.objectives
            .iter()
            .filter(|objective| !objective.has_aligned_assessment)
            .count()
    }

    #[must_use]
    pub fn lessons_without_assessment(&self) -> usize {
        self.lessons
            .iter()
            .filter(|lesson| lesson.assessment_type.is_none())
            .count()
    }
}

/// A learning objective attached to a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearningObjective {
    pub id: String,
    pub text: String,
    pub cognitive_level: CognitiveLevel,
    #[serde(default)]
    pub has_aligned_assessment: bool,
}

/// A lesson within a module.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Duration in minutes.
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub assessment_type: Option<AssessmentType>,
}

impl Lesson {
    /// Location label nested under its module, e.g.
    /// `Module 1: Intro > Lesson 2: Hazards`.
    #[must_use]
    pub fn label(&self, module_label: &str, index: usize) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("{module_label} > Lesson {}", index + 1)
        } else {
            format!("{module_label} > Lesson {}: {title}", index + 1)
        }
    }

    /// `module_id/lesson_id`.
    #[must_use]
    pub fn subject(&self, module_id: &str) -> String {
        format!("{module_id}/{}", self.id)
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fall_back_to_position() {
        let module = Module {
            id: "mod-1".into(),
            ..Default::default()
        };
        let label = module.label(0);
        assert_eq!(label, "Module 1");

        let lesson = Lesson {
            id: "les-1".into(),
            title: "  ".into(),
            ..Default::default()
        };
        assert_eq!(lesson.label(&label, 2), "Module 1 > Lesson 3");
    }

    #[test]
    fn labels_include_titles() {
        let module = Module {
            id: "mod-1".into(),
            title: "Safety Basics".into(),
            ..Default::default()
        };
        let lesson = Lesson {
            id: "les-1".into(),
            title: "Hazards".into(),
            ..Default::default()
        };
        let module_label = module.label(1);
        assert_eq!(module_label, "Module 2: Safety Basics");
        assert_eq!(
            lesson.label(&module_label, 0),
            "Module 2: Safety Basics > Lesson 1: Hazards"
        );
    }

    #[test]
    fn subjects_use_ids_not_positions() {
        let module = Module {
            id: "mod-7".into(),
            ..Default::default()
        };
        let lesson = Lesson {
            id: "les-2".into(),
            ..Default::default()
        };
        assert_eq!(module.subject(), "mod-7");
        assert_eq!(lesson.subject(&module.id), "mod-7/les-2");
    }

    #[test]
    fn unaligned_objectives_counts_only_missing_alignment() {
        let objective = |id: &str, aligned: bool| LearningObjective {
            id: id.into(),
            text: "Identify hazards".into(),
            cognitive_level: CognitiveLevel::Remember,
            has_aligned_assessment: aligned,
        };
        let module = Module {
            id: "mod-1".into(),
            objectives: vec![objective("obj-1", true), objective("obj-2", false)],
            ..Default::default()
        };
        assert_eq!(module.unaligned_objectives(), 1);
    }

    #[test]
    fn blank_strategy_is_not_a_strategy() {
        let module = Module {
            id: "mod-1".into(),
            assessment_strategy: " \n".into(),
            ..Default::default()
        };
        assert!(!module.has_assessment_strategy());
    }
}
