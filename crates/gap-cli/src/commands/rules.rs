use anyhow::Context;
use gap_config::GapConfig;
use gap_engine::{GapService, InMemoryProjects};

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `gapck rules`: the configured battery, disabled rules removed.
pub fn handle(config: &GapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = GapService::from_config(InMemoryProjects::new(), &config.engine)
        .context("failed to configure rule battery")?;
    output(&service.battery().descriptors(), flags.format)
}
