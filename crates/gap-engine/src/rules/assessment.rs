//! Per-module assessment alignment checks.

use gap_core::enums::{GapCategory, Phase, Severity};

use super::ids;
use super::{Check, Hit, Rule, RuleContext, count_noun, share};

#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: ids::ASSESSMENT_OBJECTIVE_ALIGNMENT,
            phase: Phase::Design,
            category: GapCategory::Assessment,
            severity: Severity::Critical,
            title: "Objectives without assessments",
            suggestion: "Align an assessment item with every objective, or revise objectives that cannot be assessed.",
            check: Check::Scan(objective_alignment),
        },
        Rule {
            id: ids::ASSESSMENT_MODULE_STRATEGY,
            phase: Phase::Design,
            category: GapCategory::Assessment,
            severity: Severity::Warning,
            title: "Module missing assessment strategy",
            suggestion: "Describe how this module's objectives will be assessed.",
            check: Check::Scan(module_strategy),
        },
        Rule {
            id: ids::ASSESSMENT_LESSON_TYPES,
            phase: Phase::Design,
            category: GapCategory::Assessment,
            severity: Severity::Warning,
            title: "Lessons without assessment type",
            suggestion: "Tag lessons with the assessment used to check understanding.",
            check: Check::Scan(lesson_types),
        },
        Rule {
            id: ids::ASSESSMENT_SUMMATIVE,
            phase: Phase::Evaluation,
            category: GapCategory::Assessment,
            severity: Severity::Info,
            title: "No summative assessment",
            suggestion: "Add a summative assessment, such as a final exam or capstone, to the last module.",
            check: Check::Scan(summative),
        },
    ]
}

fn objective_alignment(ctx: &RuleContext<'_>) -> Vec<Hit> {
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter_map(|(index, module)| {
            let unaligned = module.unaligned_objectives();
            (unaligned > 0).then(|| {
                let verb = if unaligned == 1 { "has" } else { "have" };
                Hit::module(module, index, |label| {
                    format!(
                        "{unaligned} of {} in {label} {verb} no aligned assessment.",
                        count_noun(
                            module.objectives.len(),
                            "learning objective",
                            "learning objectives"
                        )
                    )
                })
            })
        })
        .collect()
}

fn module_strategy(ctx: &RuleContext<'_>) -> Vec<Hit> {
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter(|(_, module)| !module.has_assessment_strategy())
        .map(|(index, module)| {
            Hit::module(module, index, |label| format!("{label} has no assessment strategy."))
        })
        .collect()
}

fn lesson_types(ctx: &RuleContext<'_>) -> Vec<Hit> {
    let threshold = ctx.settings.lesson_assessment_gap_ratio;
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter_map(|(index, module)| {
            let untagged = module.lessons_without_assessment();
            let total = module.lessons.len();
            (total > 0 && share(untagged, total) > threshold).then(|| {
                Hit::module(module, index, |label| {
                    format!(
                        "{untagged} of {} in {label} have no assessment type.",
                        count_noun(total, "lesson", "lessons")
                    )
                })
            })
        })
        .collect()
}

fn summative(ctx: &RuleContext<'_>) -> Vec<Hit> {
    let modules = ctx.snapshot.modules();
    let Some((index, last)) = modules.iter().enumerate().next_back() else {
        return Vec::new();
    };
    if ctx.settings.mentions_summative(&last.assessment_strategy) {
        return Vec::new();
    }
    vec![Hit::module(last, index, |label| {
        format!(
            "The assessment strategy of {label}, the final module, does not mention a summative assessment."
        )
    })]
}
