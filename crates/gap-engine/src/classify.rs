//! Display-side views over a stored report: category buckets, action items,
//! and a deduplicated summary.

use std::collections::HashSet;

use gap_core::entities::{Finding, Report};
use gap_core::enums::Severity;
use gap_core::responses::{ActionItemsView, GapBuckets, ReportSummaryView, SeverityCount};

use crate::scorer;

/// Partition gap findings by the category their rule tagged them with.
/// `pass` findings are left out.
#[must_use]
pub fn classify<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> GapBuckets {
    let mut buckets = GapBuckets::default();
    for finding in findings {
        if finding.severity.is_gap() {
            buckets.bucket_mut(finding.category).push(finding.clone());
        }
    }
    buckets
}

/// Keep the first finding for each distinct description.
#[must_use]
pub fn dedup_by_message<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Vec<&'a Finding> {
    let mut seen = HashSet::new();
    findings
        .into_iter()
        .filter(|finding| seen.insert(finding.description.as_str()))
        .collect()
}

/// Open findings, critical first, stable within a severity.
///
/// `limit` of `None` or `Some(0)` returns every open finding.
#[must_use]
pub fn action_items(report: &Report, limit: Option<usize>) -> ActionItemsView {
    let mut items: Vec<Finding> = report.open_findings().cloned().collect();
    items.sort_by_key(|finding| finding.severity);
    let total_open = items.len();
    if let Some(limit) = limit.filter(|limit| *limit > 0) {
        items.truncate(limit);
    }
    ActionItemsView {
        project_id: report.project_id.clone(),
        battery: report.battery.clone(),
        score: report.score,
        total_open,
        items,
    }
}

/// Score, severity counts, phase breakdown and distinct open messages.
#[must_use]
pub fn summarize(report: &Report) -> ReportSummaryView {
    let counts = Severity::GAPS
        .iter()
        .map(|severity| {
            let (resolved, open): (Vec<&Finding>, Vec<&Finding>) = report
                .findings
                .iter()
                .filter(|finding| finding.severity == *severity)
                .partition(|finding| finding.resolved);
            SeverityCount {
                severity: *severity,
                open: open.len(),
                resolved: resolved.len(),
            }
        })
        .collect();

    let messages = dedup_by_message(report.open_findings())
        .into_iter()
        .map(|finding| finding.description.clone())
        .collect();

    ReportSummaryView {
        project_id: report.project_id.clone(),
        battery: report.battery.clone(),
        score: report.score,
        summary: report.summary.clone(),
        counts,
        phases: scorer::phase_scores(&report.checklist),
        messages,
    }
}
