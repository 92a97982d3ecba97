//! Command dispatch logic for graphplay
use std::path::Path;
use std::time::Instant;

use graphplay_core::config::EngineConfig;
use graphplay_core::error::Result;
use graphplay_core::graph::Weight;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use crate::commands::spanning::SpanningAlgorithm;

/// Settings resolved from command-line flags and the config file
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: OutputFormat,
    pub quiet: bool,
    pub default_weight: Weight,
}

impl Context {
    pub fn new(cli: &Cli, config: &EngineConfig) -> Self {
        Context {
            format: cli.format.unwrap_or(config.format),
            quiet: cli.quiet,
            default_weight: config.default_weight,
        }
    }
}

/// Load `--config`, else `graphplay.toml` in the working directory, else defaults
pub fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::discover(Path::new(".")),
    }
}

pub fn run(cli: &Cli, config: &EngineConfig, start: Instant) -> Result<()> {
    let ctx = Context::new(cli, config);
    tracing::debug!(
        format = %ctx.format,
        default_weight = ctx.default_weight,
        elapsed = ?start.elapsed(),
        "resolve_context"
    );

    match &cli.command {
        Commands::Show(args) => commands::show::execute(&ctx, &args.graph),
        Commands::Topo(args) => commands::topo::execute(&ctx, &args.graph),
        Commands::Bfs(args) => {
            commands::traverse::execute_bfs(&ctx, &args.graph, args.start.as_deref())
        }
        Commands::Dfs(args) => {
            commands::traverse::execute_dfs(&ctx, &args.graph, args.start.as_deref())
        }
        Commands::Scc(args) => commands::scc::execute(&ctx, &args.graph),
        Commands::Prim(args) => {
            commands::spanning::execute(&ctx, &args.graph, SpanningAlgorithm::Prim)
        }
        Commands::Kruskal(args) => {
            commands::spanning::execute(&ctx, &args.graph, SpanningAlgorithm::Kruskal)
        }
        Commands::Dijkstra(args) => commands::dijkstra::execute(&ctx, &args.graph, &args.start),
    }?;

    tracing::debug!(elapsed = ?start.elapsed(), "command_complete");
    Ok(())
}
