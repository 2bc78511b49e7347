//! Completeness score over the checklist items of a battery.
//!
//! The score is `round(100 * satisfied_weight / total_weight)`. Checklist
//! items are the same rule objects the evaluator emits lifecycle findings
//! from, so the score and the findings cannot disagree.

use gap_core::entities::ChecklistResult;
use gap_core::enums::Phase;
use gap_core::responses::PhaseScore;

/// Score in `0..=100`, rounded half up.
///
/// A checklist with no weight scores 100: nothing expected, nothing missing.
#[must_use]
pub fn score(checklist: &[ChecklistResult]) -> u8 {
    let expected: u64 = checklist.iter().map(|item| u64::from(item.weight)).sum();
    if expected == 0 {
        return 100;
    }
    let completed: u64 = checklist
        .iter()
        .filter(|item| item.satisfied)
        .map(|item| u64::from(item.weight))
        .sum();
    let rounded = (200 * completed + expected) / (2 * expected);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Completed/expected weight per phase, in lifecycle order. Phases with no
/// checklist items are omitted.
#[must_use]
pub fn phase_scores(checklist: &[ChecklistResult]) -> Vec<PhaseScore> {
    Phase::ALL
        .iter()
        .filter_map(|phase| {
            let items = checklist.iter().filter(|item| item.phase == *phase);
            let (completed, expected) = items.fold((0u32, 0u32), |(done, total), item| {
                let done = if item.satisfied {
                    done + item.weight
                } else {
                    done
                };
                (done, total + item.weight)
            });
            (expected > 0).then_some(PhaseScore {
                phase: *phase,
                completed,
                expected,
            })
        })
        .collect()
}
