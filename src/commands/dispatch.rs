//! Command dispatch logic for knightpath

use std::time::Instant;

use knightpath_core::config::Config;
use knightpath_core::error::Result;
use knightpath_core::trace_time;
use tracing::debug;

use super::{distances, moves, path, CommandContext};
use crate::cli::{Cli, Commands};

/// Resolve config and flags into the context every command runs with.
///
/// Flags take precedence over the config file.
pub fn context(cli: &Cli) -> Result<CommandContext> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = match cli.format {
        Some(arg) => arg.into(),
        None => config.output_format()?,
    };

    Ok(CommandContext {
        format,
        quiet: cli.quiet,
        limits: config.search_limits(cli.max_nodes),
    })
}

pub fn run(cli: &Cli, ctx: &CommandContext, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), format = %ctx.format, max_nodes = ?ctx.limits.max_nodes, "resolve_context");

    let result = match &cli.command {
        Commands::Moves { square } => moves::execute(ctx, *square),
        Commands::Path { from, to } => path::execute(ctx, *from, *to),
        Commands::Distances { source, graph } => {
            distances::execute(ctx, source, graph.as_deref())
        }
    };

    trace_time!(start, "execute_command");
    result
}
