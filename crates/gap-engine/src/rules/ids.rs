//! Stable rule ids. Findings carry these as `rule_id`, and configuration uses
//! them in `engine.disabled_rules`.

pub const ANALYSIS_REPORT: &str = "analysis.report";
pub const ANALYSIS_LEARNER_PROFILE: &str = "analysis.learner_profile";
pub const ANALYSIS_CONSTRAINTS: &str = "analysis.constraints";
pub const DESIGN_OUTLINE: &str = "design.outline";
pub const DESIGN_OBJECTIVES: &str = "design.objectives";
pub const DESIGN_ASSESSMENT_STRATEGY: &str = "design.assessment_strategy";
pub const DEVELOPMENT_DOCUMENTS: &str = "development.documents";
pub const DEVELOPMENT_COVERAGE: &str = "development.coverage";
pub const IMPLEMENTATION_FACILITATOR_GUIDE: &str = "implementation.facilitator_guide";
pub const EVALUATION_SUCCESS_METRICS: &str = "evaluation.success_metrics";

pub const ASSESSMENT_OBJECTIVE_ALIGNMENT: &str = "assessment.objective_alignment";
pub const ASSESSMENT_MODULE_STRATEGY: &str = "assessment.module_strategy";
pub const ASSESSMENT_LESSON_TYPES: &str = "assessment.lesson_types";
pub const ASSESSMENT_SUMMATIVE: &str = "assessment.summative";

pub const COVERAGE_MODULE_DOCUMENTS: &str = "coverage.module_documents";
pub const COVERAGE_LESSON_DURATION: &str = "coverage.lesson_duration";
pub const COVERAGE_LESSON_ACTIVITIES: &str = "coverage.lesson_activities";

pub const STRUCTURE_COURSE_GOAL: &str = "structure.course_goal";
pub const STRUCTURE_MODULE_COUNT: &str = "structure.module_count";
pub const STRUCTURE_LESSON_COUNT: &str = "structure.lesson_count";
pub const STRUCTURE_MODULE_DESCRIPTION: &str = "structure.module_description";
pub const STRUCTURE_LESSON_DESCRIPTION: &str = "structure.lesson_description";
