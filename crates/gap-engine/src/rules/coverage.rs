//! Content coverage: every module needs documents, every lesson needs time
//! and activities.

use gap_core::entities::{Lesson, Module};
use gap_core::enums::{GapCategory, Phase, Severity};

use super::ids;
use super::{Check, Hit, Rule, RuleContext};

#[must_use]
pub fn rules() -> Vec<Rule> {
    vec![
        Rule {
            id: ids::COVERAGE_MODULE_DOCUMENTS,
            phase: Phase::Development,
            category: GapCategory::ContentCoverage,
            severity: Severity::Critical,
            title: "Module without design documents",
            suggestion: "Generate at least one design document for this module.",
            check: Check::Scan(module_documents),
        },
        Rule {
            id: ids::COVERAGE_LESSON_DURATION,
            phase: Phase::Development,
            category: GapCategory::ContentCoverage,
            severity: Severity::Info,
            title: "Lesson has no duration",
            suggestion: "Estimate how many minutes the lesson takes.",
            check: Check::Scan(lesson_duration),
        },
        Rule {
            id: ids::COVERAGE_LESSON_ACTIVITIES,
            phase: Phase::Development,
            category: GapCategory::ContentCoverage,
            severity: Severity::Warning,
            title: "Lesson without activities",
            suggestion: "Add at least one learning activity to the lesson.",
            check: Check::Scan(lesson_activities),
        },
    ]
}

fn module_documents(ctx: &RuleContext<'_>) -> Vec<Hit> {
    ctx.snapshot
        .modules()
        .iter()
        .enumerate()
        .filter(|(_, module)| ctx.snapshot.documents_for(&module.id) == 0)
        .map(|(index, module)| {
            Hit::module(module, index, |label| format!("{label} has no design documents."))
        })
        .collect()
}

fn lesson_duration(ctx: &RuleContext<'_>) -> Vec<Hit> {
    lesson_hits(ctx.snapshot.modules(), |lesson| lesson.duration_minutes == 0, |label| {
        format!("{label} has a duration of 0 minutes.")
    })
}

fn lesson_activities(ctx: &RuleContext<'_>) -> Vec<Hit> {
    lesson_hits(ctx.snapshot.modules(), |lesson| lesson.activities.is_empty(), |label| {
        format!("{label} has no learning activities.")
    })
}

/// One hit per lesson matching `offending`, in outline order.
pub(crate) fn lesson_hits(
    modules: &[Module],
    offending: impl Fn(&Lesson) -> bool,
    describe: impl Fn(&str) -> String,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    for (module_index, module) in modules.iter().enumerate() {
        let module_label = module.label(module_index);
        for (lesson_index, lesson) in module.lessons.iter().enumerate() {
            if offending(lesson) {
                let label = lesson.label(&module_label, lesson_index);
                hits.push(Hit {
                    description: describe(&label),
                    subject: lesson.subject(&module.id),
                    location: label,
                });
            }
        }
    }
    hits
}
