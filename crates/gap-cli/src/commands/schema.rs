use anyhow::Context;
use gap_schema::SchemaRegistry;

use crate::cli::{GlobalFlags, OutputFormat, SchemaArgs};
use crate::output::{SchemaNames, output};

/// Handle `gapck schema`. Schemas are always printed as JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new()?;
    let Some(name) = &args.name else {
        return output(&SchemaNames(registry.list()), flags.format);
    };

    let schema = registry
        .get(name)
        .with_context(|| format!("unknown schema '{name}'; run 'gapck schema' to list names"))?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(schema)?
    } else {
        serde_json::to_string_pretty(schema)?
    };
    println!("{rendered}");
    Ok(())
}
