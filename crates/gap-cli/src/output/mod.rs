use gap_core::entities::{Finding, Report};
use gap_core::enums::GapCategory;
use gap_core::responses::{ActionItemsView, GapBuckets, ReportSummaryView, RuleDescriptor};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// A response that can be laid out as an aligned table.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;

    /// Lines printed above the table.
    fn caption(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(value, table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Tabular>(value: &T, options: table::TableOptions) -> String {
    let mut lines = value.caption();
    let rows = value.rows();
    if rows.is_empty() {
        lines.push(String::from("(no rows)"));
    } else {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(table::render_entity_table(&value.headers(), &rows, options));
    }
    lines.join("\n")
}

const FINDING_HEADERS: [&str; 6] = ["id", "severity", "phase", "location", "title", "resolved"];

fn finding_row(finding: &Finding) -> Vec<String> {
    vec![
        finding.id.clone(),
        finding.severity.to_string(),
        finding.phase.to_string(),
        finding.location.clone(),
        finding.title.clone(),
        finding.resolved.to_string(),
    ]
}

impl Tabular for Report {
    fn headers(&self) -> Vec<&'static str> {
        FINDING_HEADERS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.findings.iter().map(finding_row).collect()
    }

    fn caption(&self) -> Vec<String> {
        vec![
            format!(
                "{} [{}] run {} score {}%",
                self.project_id, self.battery, self.run, self.score
            ),
            self.summary.clone(),
        ]
    }
}

impl Tabular for ActionItemsView {
    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "severity", "location", "title", "suggestion"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|finding| {
                vec![
                    finding.id.clone(),
                    finding.severity.to_string(),
                    finding.location.clone(),
                    finding.title.clone(),
                    finding.suggestion.clone(),
                ]
            })
            .collect()
    }

    fn caption(&self) -> Vec<String> {
        vec![format!(
            "{} [{}] score {}%, showing {} of {} open",
            self.project_id,
            self.battery,
            self.score,
            self.items.len(),
            self.total_open
        )]
    }
}

impl Tabular for GapBuckets {
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["category"];
        headers.extend(FINDING_HEADERS);
        headers
    }

    fn rows(&self) -> Vec<Vec<String>> {
        GapCategory::ALL
            .iter()
            .flat_map(|category| {
                self.bucket(*category).iter().map(move |finding| {
                    let mut row = vec![category.to_string()];
                    row.extend(finding_row(finding));
                    row
                })
            })
            .collect()
    }
}

impl Tabular for ReportSummaryView {
    fn headers(&self) -> Vec<&'static str> {
        vec!["severity", "open", "resolved"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.counts
            .iter()
            .map(|count| {
                vec![
                    count.severity.to_string(),
                    count.open.to_string(),
                    count.resolved.to_string(),
                ]
            })
            .collect()
    }

    fn caption(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} [{}] score {}%", self.project_id, self.battery, self.score),
            self.summary.clone(),
        ];
        lines.extend(
            self.phases
                .iter()
                .map(|phase| format!("  {}: {}/{}", phase.phase, phase.completed, phase.expected)),
        );
        lines.extend(self.messages.iter().map(|message| format!("  - {message}")));
        lines
    }
}

impl Tabular for Vec<RuleDescriptor> {
    fn headers(&self) -> Vec<&'static str> {
        vec!["id", "phase", "category", "weight", "summary"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|rule| {
                vec![
                    rule.id.clone(),
                    rule.phase.to_string(),
                    rule.category.to_string(),
                    rule.weight.map_or_else(|| String::from("-"), |w| w.to_string()),
                    rule.summary.clone(),
                ]
            })
            .collect()
    }
}

/// Schema names for `gapck schema` without an argument.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct SchemaNames(pub Vec<&'static str>);

impl Tabular for SchemaNames {
    fn headers(&self) -> Vec<&'static str> {
        vec!["schema"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0.iter().map(|name| vec![(*name).to_string()]).collect()
    }
}
