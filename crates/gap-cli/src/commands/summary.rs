use gap_config::GapConfig;

use crate::cli::{GlobalFlags, SnapshotArgs};
use crate::commands::shared;
use crate::output::output;

/// Handle `gapck summary`.
pub fn handle(args: &SnapshotArgs, config: &GapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (service, project_id) = shared::analyzed(args, config)?;
    output(&service.summary(&project_id)?, flags.format)
}
