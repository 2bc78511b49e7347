use anyhow::Context;
use gap_config::GapConfig;

use crate::cli::{GlobalFlags, SnapshotArgs};
use crate::commands::shared;
use crate::output::output;

/// Handle `gapck analyze`.
pub fn handle(args: &SnapshotArgs, config: &GapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (service, project_id) = shared::analyzed(args, config)?;
    let report = service
        .report(&project_id, service.battery().name())
        .context("analysis produced no report")?;
    output(report, flags.format)
}
