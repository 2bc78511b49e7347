//! Shape of the outline: goal, module and lesson counts, descriptions.

use gap_core::enums::{GapCategory, Phase, Severity};

use super::coverage::lesson_hits;
use super::ids;
use super::{Check, Hit, Rule, RuleContext, count_noun};

const COURSE_OUTLINE: &str = "Course Outline";

#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: ids::STRUCTURE_COURSE_GOAL,
            phase: Phase::Design,
            category: GapCategory::Structure,
            severity: Severity::Critical,
            title: "Course goal missing",
            suggestion: "State the overall performance goal the course supports.",
            check: Check::Scan(course_goal),
        },
        Rule {
            id: ids::STRUCTURE_MODULE_COUNT,
            phase: Phase::Design,
            category: GapCategory::Structure,
            severity: Severity::Info,
            title: "Too few modules",
            suggestion: "Consider splitting content into more modules.",
            check: Check::Scan(module_count),
        },
        Rule {
            id: ids::STRUCTURE_LESSON_COUNT,
            phase: Phase::Design,
            category: GapCategory::Structure,
            severity: Severity::Info,
            title: "Too few lessons",
            suggestion: "Consider breaking the module into more lessons.",
            check: Check::Scan(lesson_count),
        },
        Rule {
            id: ids::STRUCTURE_MODULE_DESCRIPTION,
            phase: Phase::Design,
            category: GapCategory::Structure,
            severity: Severity::Warning,
            title: "Module missing description",
            suggestion: "Summarize what the module covers.",
            check: Check::Scan(module_description),
        },
        Rule {
            id: ids::STRUCTURE_LESSON_DESCRIPTION,
            phase: Phase::Design,
            category: GapCategory::Structure,
            severity: Severity::Warning,
            title: "Lesson missing description",
            suggestion: "Summarize what the lesson covers.",
            check: Check::Scan(lesson_description),
        },
    ]
}

fn course_goal(ctx: &RuleContext<'_>) -> Vec<Hit> {
    match &ctx.snapshot.outline {
        Some(outline) if !outline.has_goal() => vec![Hit::area(
            COURSE_OUTLINE,
            "The course outline has no stated goal.".to_string(),
        )],
        _ => Vec::new(),
    }
}

fn module_count(ctx: &RuleContext<'_>) -> Vec<Hit> {
    let Some(outline) = &ctx.snapshot.outline else {
        return Vec::new();
    };
    let count = outline.modules.len();
    let min = ctx.settings.min_modules;
    if count >= min {
        return Vec::new();
    }
    vec![Hit::area(
        COURSE_OUTLINE,
        format!(
            "The course has {}; at least {min} are recommended.",
            count_noun(count, "module", "modules")
        ),
    )]
}

fn lesson_count(ctx: &RuleContext<'_>) -> Vec<Hit> {
    let min = ctx.settings.min_lessons_per_module;
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter(|(_, module)| module.lessons.len() < min)
        .map(|(index, module)| {
            Hit::module(module, index, |label| {
                format!(
                    "{label} has {}; at least {min} are recommended.",
                    count_noun(module.lessons.len(), "lesson", "lessons")
                )
            })
        })
        .collect()
}

fn module_description(ctx: &RuleContext<'_>) -> Vec<Hit> {
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter(|(_, module)| !module.has_description())
        .map(|(index, module)| {
            Hit::module(module, index, |label| format!("{label} has no description."))
        })
        .collect()
}

fn lesson_description(ctx: &RuleContext<'_>) -> Vec<Hit> {
    lesson_hits(
        ctx.snapshot.modules(),
        |lesson| !lesson.has_description(),
        |label| format!("{label} has no description."),
    )
}
