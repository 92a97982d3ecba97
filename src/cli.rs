//! CLI argument parsing for graphplay
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use graphplay_core::format::OutputFormat;
pub use parse::parse_output_format;

/// Graphplay - run classic graph algorithms over graph description files
#[derive(Parser, Debug)]
#[command(name = "graphplay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json [default: config file value, else human]
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Configuration file [default: ./graphplay.toml if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "graphplay_core=trace")
    #[arg(long, global = true, env = "GRAPHPLAY_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print vertices and incidence lists
    Show(GraphArgs),

    /// Topological order (Kahn); partial if the graph has a cycle
    Topo(GraphArgs),

    /// Breadth-first order from a vertex, or over the whole graph
    Bfs(TraversalArgs),

    /// Depth-first order from a vertex, or whole-graph finishing order
    Dfs(TraversalArgs),

    /// Strongly connected components (Kosaraju)
    Scc(GraphArgs),

    /// Minimum spanning tree (Prim)
    Prim(GraphArgs),

    /// Minimum spanning tree (Kruskal)
    Kruskal(GraphArgs),

    /// Shortest-path tree and distances (Dijkstra)
    Dijkstra(SourceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph description file (.json or .toml)
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct TraversalArgs {
    /// Graph description file (.json or .toml)
    pub graph: PathBuf,

    /// Start vertex; omit to cover every vertex
    #[arg(long, short)]
    pub start: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Graph description file (.json or .toml)
    pub graph: PathBuf,

    /// Source vertex
    #[arg(long, short)]
    pub start: String,
}
