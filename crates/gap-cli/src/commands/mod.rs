use gap_config::GapConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod actions;
pub mod analyze;
pub mod gaps;
pub mod rules;
pub mod schema;
pub mod shared;
pub mod summary;

/// Route a parsed command to its handler.
pub fn dispatch(command: Commands, config: &GapConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(&args, config, flags),
        Commands::Actions(args) => actions::handle(&args, config, flags),
        Commands::Summary(args) => summary::handle(&args, config, flags),
        Commands::Gaps(args) => gaps::handle(&args, config, flags),
        Commands::Rules => rules::handle(config, flags),
        Commands::Schema(args) => schema::handle(&args, flags),
    }
}
