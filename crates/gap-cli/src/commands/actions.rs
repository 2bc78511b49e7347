use gap_config::GapConfig;

use crate::cli::{GlobalFlags, SnapshotArgs};
use crate::commands::shared;
use crate::output::output;

/// Handle `gapck actions`.
pub fn handle(args: &SnapshotArgs, config: &GapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (service, project_id) = shared::analyzed(args, config)?;
    let limit = shared::effective_limit(flags.limit, config);
    let view = service.action_items(&project_id, Some(limit))?;
    output(&view, flags.format)
}
