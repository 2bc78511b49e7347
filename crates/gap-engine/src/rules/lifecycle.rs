//! Checklist items, one group per ADDIE phase. These are the only rules the
//! completeness score is computed from.

use gap_core::enums::{GapCategory, Phase, Severity};

use super::ids;
use super::{Check, Probe, Rule, RuleContext, count_noun, share};

const NEEDS_ANALYSIS: &str = "Needs Analysis";
const COURSE_OUTLINE: &str = "Course Outline";
const DESIGN_DOCUMENTS: &str = "Design Documents";

/// The ten checklist items in phase order.
#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        // --- Analysis ---
        Rule {
            id: ids::ANALYSIS_REPORT,
            phase: Phase::Analysis,
            category: GapCategory::Lifecycle,
            severity: Severity::Critical,
            title: "No needs analysis report",
            suggestion: "Complete the needs analysis wizard to generate a report.",
            check: Check::Item {
                weight: 1,
                location: NEEDS_ANALYSIS,
                pass_title: "Needs analysis report is complete",
                probe: analysis_report,
            },
        },
        Rule {
            id: ids::ANALYSIS_LEARNER_PROFILE,
            phase: Phase::Analysis,
            category: GapCategory::Lifecycle,
            severity: Severity::Warning,
            title: "Needs analysis missing learner profile",
            suggestion: "Describe the target audience, their prior knowledge, and characteristics.",
            check: Check::Item {
                weight: 1,
                location: NEEDS_ANALYSIS,
                pass_title: "Learner profile is documented",
                probe: learner_profile,
            },
        },
        Rule {
            id: ids::ANALYSIS_CONSTRAINTS,
            phase: Phase::Analysis,
            category: GapCategory::Lifecycle,
            severity: Severity::Warning,
            title: "Needs analysis missing constraints",
            suggestion: "Record the timeline, budget, and technology constraints for delivery.",
            check: Check::Item {
                weight: 1,
                location: NEEDS_ANALYSIS,
                pass_title: "Delivery constraints are documented",
                probe: constraints,
            },
        },
        // --- Design ---
        Rule {
            id: ids::DESIGN_OUTLINE,
            phase: Phase::Design,
            category: GapCategory::Lifecycle,
            severity: Severity::Critical,
            title: "No course outline",
            suggestion: "Create a course outline with modules, lessons, and objectives.",
            check: Check::Item {
                weight: 1,
                location: COURSE_OUTLINE,
                pass_title: "Course outline exists",
                probe: outline,
            },
        },
        Rule {
            id: ids::DESIGN_OBJECTIVES,
            phase: Phase::Design,
            category: GapCategory::Lifecycle,
            severity: Severity::Critical,
            title: "No learning objectives defined",
            suggestion: "Write measurable learning objectives for each module.",
            check: Check::Item {
                weight: 1,
                location: COURSE_OUTLINE,
                pass_title: "Learning objectives are defined",
                probe: objectives,
            },
        },
        Rule {
            id: ids::DESIGN_ASSESSMENT_STRATEGY,
            phase: Phase::Design,
            category: GapCategory::Lifecycle,
            severity: Severity::Warning,
            title: "No assessment strategy defined",
            suggestion: "Describe how learning will be assessed in at least one module.",
            check: Check::Item {
                weight: 1,
                location: COURSE_OUTLINE,
                pass_title: "Assessment strategy is defined",
                probe: assessment_strategy,
            },
        },
        // --- Development ---
        Rule {
            id: ids::DEVELOPMENT_DOCUMENTS,
            phase: Phase::Development,
            category: GapCategory::Lifecycle,
            severity: Severity::Critical,
            title: "No design documents generated",
            suggestion: "Generate slides, workbooks, or guides for the course modules.",
            check: Check::Item {
                weight: 1,
                location: DESIGN_DOCUMENTS,
                pass_title: "Design documents exist",
                probe: documents,
            },
        },
        Rule {
            id: ids::DEVELOPMENT_COVERAGE,
            phase: Phase::Development,
            category: GapCategory::Lifecycle,
            severity: Severity::Warning,
            title: "Low design document coverage",
            suggestion: "Generate design documents for the modules that have none.",
            check: Check::Item {
                weight: 1,
                location: DESIGN_DOCUMENTS,
                pass_title: "Design documents cover the course",
                probe: coverage,
            },
        },
        // --- Implementation ---
        Rule {
            id: ids::IMPLEMENTATION_FACILITATOR_GUIDE,
            phase: Phase::Implementation,
            category: GapCategory::Lifecycle,
            severity: Severity::Info,
            title: "No facilitator guide",
            suggestion: "Generate a facilitator guide so instructors can deliver the course.",
            check: Check::Item {
                weight: 1,
                location: DESIGN_DOCUMENTS,
                pass_title: "Facilitator guide exists",
                probe: facilitator_guide,
            },
        },
        // --- Evaluation ---
        Rule {
            id: ids::EVALUATION_SUCCESS_METRICS,
            phase: Phase::Evaluation,
            category: GapCategory::Lifecycle,
            severity: Severity::Info,
            title: "No success metrics defined",
            suggestion: "Add success metrics to the needs analysis so course impact can be evaluated.",
            check: Check::Item {
                weight: 1,
                location: NEEDS_ANALYSIS,
                pass_title: "Success metrics are defined",
                probe: success_metrics,
            },
        },
    ]
}

fn analysis_report(ctx: &RuleContext<'_>) -> Probe {
    if ctx.snapshot.analysis.completed_report().is_some() {
        Probe::Satisfied
    } else {
        Probe::Missing(
            "The needs analysis has not been completed, so learner needs and performance gaps are undocumented."
                .to_string(),
        )
    }
}

fn learner_profile(ctx: &RuleContext<'_>) -> Probe {
    match ctx.snapshot.analysis.completed_report() {
        None => Probe::Suppressed,
        Some(report) if report.has_learner_profile() => Probe::Satisfied,
        Some(_) => Probe::Missing(
            "The needs analysis report has no learner profile section.".to_string(),
        ),
    }
}

fn constraints(ctx: &RuleContext<'_>) -> Probe {
    match ctx.snapshot.analysis.completed_report() {
        None => Probe::Suppressed,
        Some(report) if report.has_constraints() => Probe::Satisfied,
        Some(_) => {
            Probe::Missing("The needs analysis report has no constraints section.".to_string())
        }
    }
}

fn outline(ctx: &RuleContext<'_>) -> Probe {
    if ctx.snapshot.outline.is_some() {
        Probe::Satisfied
    } else {
        Probe::Missing("The project has no course outline.".to_string())
    }
}

fn objectives(ctx: &RuleContext<'_>) -> Probe {
    if ctx.snapshot.outline.is_none() {
        return Probe::Suppressed;
    }
    let modules = ctx.snapshot.modules();
    if modules.iter().any(|module| !module.objectives.is_empty()) {
        Probe::Satisfied
    } else {
        Probe::Missing(format!(
            "None of the course's {} has a learning objective.",
            count_noun(modules.len(), "module", "modules")
        ))
    }
}

fn assessment_strategy(ctx: &RuleContext<'_>) -> Probe {
    if ctx.snapshot.outline.is_none() {
        return Probe::Suppressed;
    }
    if ctx
        .snapshot
        .modules()
        .iter()
        .any(gap_core::entities::Module::has_assessment_strategy)
    {
        Probe::Satisfied
    } else {
        Probe::Missing("No module in the outline describes an assessment strategy.".to_string())
    }
}

fn documents(ctx: &RuleContext<'_>) -> Probe {
    if ctx.snapshot.documents.is_empty() {
        Probe::Missing("No design documents have been generated for this course.".to_string())
    } else {
        Probe::Satisfied
    }
}

fn coverage(ctx: &RuleContext<'_>) -> Probe {
    let total = ctx.snapshot.modules().len();
    if ctx.snapshot.documents.is_empty() || total == 0 {
        return Probe::Suppressed;
    }
    let covered = ctx.snapshot.covered_modules();
    if share(covered, total) >= ctx.settings.module_coverage_ratio {
        Probe::Satisfied
    } else {
        Probe::Missing(format!(
            "Only {covered} of {} have at least one design document.",
            count_noun(total, "module", "modules")
        ))
    }
}

fn facilitator_guide(ctx: &RuleContext<'_>) -> Probe {
    if ctx
        .snapshot
        .documents
        .iter()
        .any(|document| document.format.is_facilitator_guide())
    {
        Probe::Satisfied
    } else {
        Probe::Missing(
            "No design document is a facilitator guide, so instructors have no delivery notes."
                .to_string(),
        )
    }
}

fn success_metrics(ctx: &RuleContext<'_>) -> Probe {
    match ctx.snapshot.analysis.completed_report() {
        None => Probe::Suppressed,
        Some(report) if report.has_success_metrics() => Probe::Satisfied,
        Some(_) => Probe::Missing(
            "The needs analysis report defines no success metrics for evaluating the course."
                .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use gap_core::entities::{AnalysisState, ProjectSnapshot};
    use gap_core::enums::DocumentFormat;
    use rstest::rstest;

    use super::*;
    use crate::rules::fixtures;
    use crate::settings::EngineSettings;

    fn probe_of(id: &str, snapshot: &ProjectSnapshot) -> Probe {
        let settings = EngineSettings::default();
        let ctx = RuleContext {
            snapshot,
            settings: &settings,
        };
        let rule = rules()
            .into_iter()
            .find(|rule| rule.id == id)
            .expect("checklist rule exists");
        match rule.check {
            Check::Item { probe, .. } => probe(&ctx),
            Check::Scan(_) => panic!("lifecycle rules are checklist items"),
        }
    }

    #[test]
    fn ten_items_across_all_phases() {
        let rules = rules();
        assert_eq!(rules.len(), 10);
        for phase in Phase::ALL {
            assert!(rules.iter().any(|rule| rule.phase == phase), "{phase}");
        }
        assert!(rules.iter().all(|rule| rule.weight() == Some(1)));
    }

    #[rstest]
    #[case(ids::ANALYSIS_REPORT)]
    #[case(ids::ANALYSIS_LEARNER_PROFILE)]
    #[case(ids::ANALYSIS_CONSTRAINTS)]
    #[case(ids::DESIGN_OUTLINE)]
    #[case(ids::DESIGN_OBJECTIVES)]
    #[case(ids::DESIGN_ASSESSMENT_STRATEGY)]
    #[case(ids::DEVELOPMENT_DOCUMENTS)]
    #[case(ids::DEVELOPMENT_COVERAGE)]
    #[case(ids::IMPLEMENTATION_FACILITATOR_GUIDE)]
    #[case(ids::EVALUATION_SUCCESS_METRICS)]
    fn complete_project_satisfies_item(#[case] id: &str) {
        assert_eq!(probe_of(id, &fixtures::complete()), Probe::Satisfied);
    }

    #[rstest]
    #[case(ids::ANALYSIS_REPORT, false)]
    #[case(ids::ANALYSIS_LEARNER_PROFILE, true)]
    #[case(ids::ANALYSIS_CONSTRAINTS, true)]
    #[case(ids::DESIGN_OUTLINE, false)]
    #[case(ids::DESIGN_OBJECTIVES, true)]
    #[case(ids::DESIGN_ASSESSMENT_STRATEGY, true)]
    #[case(ids::DEVELOPMENT_DOCUMENTS, false)]
    #[case(ids::DEVELOPMENT_COVERAGE, true)]
    #[case(ids::IMPLEMENTATION_FACILITATOR_GUIDE, false)]
    #[case(ids::EVALUATION_SUCCESS_METRICS, true)]
    fn empty_project_item(#[case] id: &str, #[case] suppressed: bool) {
        let probe = probe_of(id, &ProjectSnapshot::empty("prj-empty"));
        if suppressed {
            assert_eq!(probe, Probe::Suppressed);
        } else {
            assert!(matches!(probe, Probe::Missing(_)), "{id}: {probe:?}");
        }
    }

    #[test]
    fn incomplete_wizard_hides_its_report() {
        let mut snapshot = fixtures::complete();
        snapshot.analysis = AnalysisState {
            completed: false,
            ..fixtures::full_analysis()
        };
        assert!(matches!(
            probe_of(ids::ANALYSIS_REPORT, &snapshot),
            Probe::Missing(_)
        ));
        assert_eq!(
            probe_of(ids::ANALYSIS_LEARNER_PROFILE, &snapshot),
            Probe::Suppressed
        );
    }

    #[test]
    fn empty_learner_profile_counts_as_missing() {
        let mut snapshot = fixtures::complete();
        if let Some(report) = snapshot.analysis.report.as_mut() {
            report.learner_profile = Some(Default::default());
        }
        assert!(matches!(
            probe_of(ids::ANALYSIS_LEARNER_PROFILE, &snapshot),
            Probe::Missing(_)
        ));
    }

    #[test]
    fn coverage_below_half_is_missing() {
        let mut snapshot = fixtures::complete();
        snapshot.documents.truncate(1);
        let Probe::Missing(description) = probe_of(ids::DEVELOPMENT_COVERAGE, &snapshot) else {
            panic!("coverage of 1/3 should be missing");
        };
        assert_eq!(
            description,
            "Only 1 of 3 modules have at least one design document."
        );
    }

    #[test]
    fn coverage_at_exactly_half_is_satisfied() {
        let mut snapshot = fixtures::complete();
        if let Some(outline) = snapshot.outline.as_mut() {
            outline.modules.push(fixtures::module("m4"));
        }
        snapshot.documents.truncate(2);
        assert_eq!(
            probe_of(ids::DEVELOPMENT_COVERAGE, &snapshot),
            Probe::Satisfied
        );
    }

    #[test]
    fn facilitator_guide_requires_matching_format() {
        let mut snapshot = fixtures::complete();
        for document in &mut snapshot.documents {
            document.format = DocumentFormat::SlideDeck;
        }
        assert!(matches!(
            probe_of(ids::IMPLEMENTATION_FACILITATOR_GUIDE, &snapshot),
            Probe::Missing(_)
        ));
    }

    #[test]
    fn outline_without_objectives_is_missing() {
        let mut snapshot = fixtures::complete();
        if let Some(outline) = snapshot.outline.as_mut() {
            for module in &mut outline.modules {
                module.objectives.clear();
            }
        }
        let Probe::Missing(description) = probe_of(ids::DESIGN_OBJECTIVES, &snapshot) else {
            panic!("objectives should be missing");
        };
        assert!(description.contains("3 modules"));
    }
}
