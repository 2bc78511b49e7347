use std::io::Read;
use std::path::Path;

use anyhow::Context;
use gap_config::GapConfig;
use gap_core::entities::ProjectSnapshot;
use gap_engine::{GapService, InMemoryProjects};
use gap_schema::SchemaRegistry;

use crate::cli::SnapshotArgs;

/// Read a snapshot file (or stdin for `-`), check it against the
/// `project_snapshot` schema, then deserialize and validate ids.
pub fn load_snapshot(path: &Path) -> anyhow::Result<ProjectSnapshot> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?
    };
    parse_snapshot(&text).with_context(|| format!("invalid snapshot {}", path.display()))
}

pub fn parse_snapshot(text: &str) -> anyhow::Result<ProjectSnapshot> {
    let value: serde_json::Value = serde_json::from_str(text).context("not valid JSON")?;
    SchemaRegistry::new()?.validate("project_snapshot", &value)?;
    let snapshot: ProjectSnapshot = serde_json::from_value(value)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Load the snapshot, run the configured battery once, and apply any
/// `--resolve` ids. Returns the service and the analyzed project id.
pub fn analyzed(
    args: &SnapshotArgs,
    config: &GapConfig,
) -> anyhow::Result<(GapService<InMemoryProjects>, String)> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let project_id = snapshot.project_id.clone();

    let mut projects = InMemoryProjects::new();
    projects.insert(snapshot);
    let mut service = GapService::from_config(projects, &config.engine)
        .context("failed to configure rule battery")?;

    service.run_analysis(&project_id);

    let battery = service.battery().name().to_string();
    for finding_id in &args.resolve {
        if !service.resolve_finding(&project_id, &battery, finding_id) {
            tracing::warn!(finding_id, "--resolve: no unresolved finding with this id");
        }
    }
    Ok((service, project_id))
}

/// Compute effective limit with precedence: global flag -> config default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, config: &GapConfig) -> usize {
    flag.unwrap_or(config.general.default_limit) as usize
}
