use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the battery and print the full report.
    Analyze(SnapshotArgs),
    /// Open findings, most urgent first.
    Actions(SnapshotArgs),
    /// Score, severity counts, and distinct gap messages.
    Summary(SnapshotArgs),
    /// Gap findings grouped by category.
    Gaps(SnapshotArgs),
    /// List the rules in the configured battery.
    Rules,
    /// Print a JSON Schema, or list schema names.
    Schema(SchemaArgs),
}

/// Input shared by every command that evaluates a project.
#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Project snapshot JSON file (`-` reads stdin).
    pub snapshot: PathBuf,

    /// Mark a finding resolved after the run (repeatable).
    #[arg(long = "resolve", value_name = "FINDING_ID")]
    pub resolve: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `project_snapshot`. Lists names when omitted.
    pub name: Option<String>,
}
