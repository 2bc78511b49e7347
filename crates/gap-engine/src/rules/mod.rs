//! Rule objects that make up a battery.
//!
//! Every rule carries its own identity, phase, category, severity and text
//! template. A rule is either a checklist item (one yes/no probe that also
//! feeds the completeness score) or a scan (walks the outline and reports
//! every offending module or lesson).
//!
//! Rules are plain data with `fn` pointers, so they are pure, cheap to clone,
//! and testable in isolation through [`Rule::evaluate`].

pub mod assessment;
pub mod coverage;
pub mod ids;
pub mod lifecycle;
pub mod structure;

use gap_core::entities::{ChecklistResult, Module, ProjectSnapshot};
use gap_core::enums::{GapCategory, Phase, Severity};
use gap_core::responses::RuleDescriptor;

use crate::settings::EngineSettings;

/// What a rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a ProjectSnapshot,
    pub settings: &'a EngineSettings,
}

/// Result of a checklist probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// The expected artifact is present and adequate.
    Satisfied,
    /// The artifact is missing; carries the finding description.
    Missing(String),
    /// The item cannot be satisfied because its subject does not exist
    /// (e.g. no report to hold a learner profile). Scored as missing, but no
    /// finding is emitted since the parent gap is already reported.
    Suppressed,
}

/// One offending artifact reported by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub location: String,
    /// Id-based key of the artifact, see [`Gap::subject`].
    pub subject: String,
    pub description: String,
}

impl Hit {
    /// A hit on a whole project area, which is its own subject.
    #[must_use]
    pub fn area(area: &str, description: String) -> Self {
        Self {
            location: area.to_string(),
            subject: area.to_string(),
            description,
        }
    }

    /// A hit on a module; `describe` receives the module's location label.
    #[must_use]
    pub fn module(module: &Module, index: usize, describe: impl FnOnce(&str) -> String) -> Self {
        let location = module.label(index);
        Self {
            description: describe(&location),
            subject: module.subject(),
            location,
        }
    }
}

/// How a rule inspects the snapshot.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// Checklist item scored by the completeness scorer.
    Item {
        weight: u32,
        /// Project area named in the finding's location.
        location: &'static str,
        /// Title of the `pass` finding emitted when pass reporting is on.
        pass_title: &'static str,
        probe: fn(&RuleContext<'_>) -> Probe,
    },
    /// Reports every offending artifact; not scored.
    Scan(fn(&RuleContext<'_>) -> Vec<Hit>),
}

/// A finding before it is given an id by the report store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    pub rule_id: &'static str,
    pub category: GapCategory,
    pub phase: Phase,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Outline ids or project area; resolution carries forward on this.
    pub subject: String,
    pub suggestion: String,
}

/// Gaps and checklist result produced by one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub gaps: Vec<Gap>,
    pub checklist: Option<ChecklistResult>,
}

/// A single named check.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub phase: Phase,
    pub category: GapCategory,
    /// Severity of the findings this rule emits.
    pub severity: Severity,
    pub title: &'static str,
    pub suggestion: &'static str,
    pub check: Check,
}

impl Rule {
    /// Weight in the completeness score, or `None` for scans.
    #[must_use]
    pub const fn weight(&self) -> Option<u32> {
        match self.check {
            Check::Item { weight, .. } => Some(weight),
            Check::Scan(_) => None,
        }
    }

    /// Evaluate the rule against a snapshot.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        match self.check {
            Check::Item {
                weight,
                location,
                pass_title,
                probe,
            } => {
                let probe = probe(ctx);
                let satisfied = probe == Probe::Satisfied;
                let gaps = match probe {
                    Probe::Missing(description) => {
                        vec![self.gap(self.severity, self.title, description, location, location)]
                    }
                    Probe::Satisfied if ctx.settings.report_passes => {
                        let mut gap = self.gap(
                            Severity::Pass,
                            pass_title,
                            format!("{pass_title}."),
                            location,
                            location,
                        );
                        gap.suggestion = "No action needed.".to_string();
                        vec![gap]
                    }
                    Probe::Satisfied | Probe::Suppressed => Vec::new(),
                };
                RuleOutcome {
                    gaps,
                    checklist: Some(ChecklistResult {
                        rule_id: self.id.to_string(),
                        phase: self.phase,
                        weight,
                        satisfied,
                    }),
                }
            }
            Check::Scan(scan) => RuleOutcome {
                gaps: scan(ctx)
                    .into_iter()
                    .map(|hit| {
                        self.gap(
                            self.severity,
                            self.title,
                            hit.description,
                            &hit.location,
                            &hit.subject,
                        )
                    })
                    .collect(),
                checklist: None,
            },
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor {
            id: self.id.to_string(),
            phase: self.phase,
            category: self.category,
            weight: self.weight(),
            summary: self.title.to_string(),
        }
    }

    fn gap(
        &self,
        severity: Severity,
        title: &str,
        description: String,
        location: &str,
        subject: &str,
    ) -> Gap {
        Gap {
            rule_id: self.id,
            category: self.category,
            phase: self.phase,
            severity,
            title: title.to_string(),
            description,
            location: location.to_string(),
            subject: subject.to_string(),
            suggestion: self.suggestion.to_string(),
        }
    }
}

/// `1 lesson`, `2 lessons`.
pub(crate) fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// `part / whole` as a float; `0.0` when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use gap_core::entities::{
        AnalysisReport, AnalysisState, Constraints, CourseOutline, DesignDocument,
        LearnerProfile, LearningObjective, Lesson, Module, ProjectSnapshot, SuccessMetric,
    };
    use gap_core::enums::{AssessmentType, CognitiveLevel, DocumentFormat};

    pub fn full_analysis() -> AnalysisState {
        AnalysisState {
            completed: true,
            report: Some(AnalysisReport {
                learner_profile: Some(LearnerProfile {
                    audience: "New supervisors".into(),
                    ..Default::default()
                }),
                constraints: Some(Constraints {
                    timeline: Some("4 weeks".into()),
                    ..Default::default()
                }),
                success_metrics: vec![SuccessMetric {
                    name: "Retention".into(),
                    target: None,
                }],
            }),
        }
    }

    pub fn lesson(id: &str) -> Lesson {
        Lesson {
            id: id.into(),
            title: format!("Lesson {id}"),
            description: "Walkthrough".into(),
            duration_minutes: 30,
            activities: vec!["role play".into()],
            assessment_type: Some(AssessmentType::KnowledgeCheck),
        }
    }

    pub fn module(id: &str) -> Module {
        Module {
            id: id.into(),
            title: format!("Topic {id}"),
            description: "Overview".into(),
            assessment_strategy: "Knowledge checks".into(),
            lessons: vec![lesson(&format!("{id}-l1")), lesson(&format!("{id}-l2"))],
            objectives: vec![LearningObjective {
                id: format!("{id}-o1"),
                text: "Explain the policy".into(),
                cognitive_level: CognitiveLevel::Understand,
                has_aligned_assessment: true,
            }],
        }
    }

    pub fn document(id: &str, module_id: &str, format: DocumentFormat) -> DesignDocument {
        DesignDocument {
            id: id.into(),
            module_id: module_id.into(),
            format,
            title: String::new(),
        }
    }

    /// Three complete modules, each with a facilitator guide; the last
    /// module's strategy is summative.
    pub fn complete() -> ProjectSnapshot {
        let mut modules = vec![module("m1"), module("m2"), module("m3")];
        modules[2].assessment_strategy = "Summative case study".into();
        let documents = modules
            .iter()
            .map(|m| document(&format!("doc-{}", m.id), &m.id, DocumentFormat::FacilitatorGuide))
            .collect();
        ProjectSnapshot {
            project_id: "prj-complete".into(),
            analysis: full_analysis(),
            outline: Some(CourseOutline {
                title: "Leading teams".into(),
                goal: "Lead a team through change".into(),
                modules,
            }),
            documents,
        }
    }
}
