//! `graphplay show` - print a graph's vertices and incidence lists

use std::path::Path;

use graphplay_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_graph;
use crate::commands::output::print_json;

pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let graph = load_graph(path, ctx.default_weight)?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::to_value(graph.components())?),
        OutputFormat::Human => {
            if !ctx.quiet {
                println!(
                    "{} vertices, {} edges ({}, {})",
                    graph.num_vertices(),
                    graph.num_edges(),
                    graph.edge_type(),
                    if graph.is_weighted() { "weighted" } else { "unweighted" }
                );
            }
            print!("{}", graph);
            Ok(())
        }
    }
}
