use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Needs-analysis wizard state as exposed by the analysis collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisState {
    /// Whether the wizard was completed.
    #[serde(default)]
    pub completed: bool,
    /// Structured report, present once the wizard produced one.
    #[serde(default)]
    pub report: Option<AnalysisReport>,
}

impl AnalysisState {
    /// The report, but only when the wizard is marked completed.
    #[must_use]
    pub fn completed_report(&self) -> Option<&AnalysisReport> {
        if self.completed {
            self.report.as_ref()
        } else {
            None
        }
    }
}

/// Structured needs-analysis report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisReport {
    #[serde(default)]
    pub learner_profile: Option<LearnerProfile>,
    #[serde(default)]
    pub constraints: Option<Constraints>,
    #[serde(default)]
    pub success_metrics: Vec<SuccessMetric>,
}

impl AnalysisReport {
    #[must_use]
    pub fn has_learner_profile(&self) -> bool {
        self.learner_profile
            .as_ref()
            .is_some_and(|profile| !profile.is_empty())
    }

    #[must_use]
    pub fn has_constraints(&self) -> bool {
        self.constraints
            .as_ref()
            .is_some_and(|constraints| !constraints.is_empty())
    }

    /// Whether at least one metric with a non-blank name is defined.
    #[must_use]
    pub fn has_success_metrics(&self) -> bool {
        self.success_metrics
            .iter()
            .any(|metric| !metric.name.trim().is_empty())
    }
}

/// Who the course is for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LearnerProfile {
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub prior_knowledge: String,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

impl LearnerProfile {
    /// A profile with no audience, prior knowledge, or characteristics is
    /// treated as an absent section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audience.trim().is_empty()
            && self.prior_knowledge.trim().is_empty()
            && self.characteristics.iter().all(|c| c.trim().is_empty())
    }
}

/// Delivery constraints captured during needs analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Constraints {
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub technology: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Constraints {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());
        blank(&self.timeline)
            && blank(&self.budget)
            && blank(&self.notes)
            && self.technology.iter().all(|t| t.trim().is_empty())
    }
}

/// A measurable outcome the course should move.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SuccessMetric {
    pub name: String,
    #[serde(default)]
    pub target: Option<String>,
}
