//! Turning an [`Evaluation`] into a stored [`Report`].

use chrono::{DateTime, Utc};
use gap_core::entities::{ALL_CLEAR_SUMMARY, Finding, Report};
use gap_core::enums::Severity;
use gap_core::ids::finding_id;

use crate::battery::Evaluation;
use crate::rules::count_noun;
use crate::scorer;

/// Assign ids to every gap and attach score, summary and timestamp.
#[must_use]
pub fn build(
    project_id: &str,
    battery: &str,
    run: u64,
    evaluation: Evaluation,
    generated_at: DateTime<Utc>,
) -> Report {
    let findings: Vec<Finding> = evaluation
        .gaps
        .into_iter()
        .enumerate()
        .map(|(seq, gap)| Finding {
            id: finding_id(run, seq),
            rule_id: gap.rule_id.to_string(),
            category: gap.category,
            phase: gap.phase,
            severity: gap.severity,
            title: gap.title,
            description: gap.description,
            location: gap.location,
            subject: gap.subject,
            suggestion: gap.suggestion,
            resolved: false,
        })
        .collect();

    Report {
        project_id: project_id.to_string(),
        battery: battery.to_string(),
        run,
        score: scorer::score(&evaluation.checklist),
        summary: summary_line(&findings),
        findings,
        checklist: evaluation.checklist,
        generated_at,
    }
}

/// One-line summary: the all-clear text, or open gap counts by severity.
///
/// Findings already resolved when the report is stored (carried forward)
/// are not counted. Later resolve toggles leave the line as it was.
#[must_use]
pub fn summary_line(findings: &[Finding]) -> String {
    let count = |severity: Severity| {
        findings
            .iter()
            .filter(|finding| finding.is_open() && finding.severity == severity)
            .count()
    };
    let critical = count(Severity::Critical);
    let warning = count(Severity::Warning);
    let info = count(Severity::Info);
    let total = critical + warning + info;

    if total == 0 {
        return ALL_CLEAR_SUMMARY.to_string();
    }

    let verb = if total == 1 { "gap found" } else { "gaps found" };
    format!(
        "{total} {verb}: {critical} critical, {}, {info} info.",
        count_noun(warning, "warning", "warnings")
    )
}
