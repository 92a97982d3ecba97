//! `graphplay scc` - strongly connected components

use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::strongly_connected_components;

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_graph;
use crate::commands::output::print_json;

pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let graph = load_graph(path, ctx.default_weight)?;
    let components = strongly_connected_components(graph.provider());

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "count": components.len(),
            "components": components,
        })),
        OutputFormat::Human => {
            for (index, component) in components.iter().enumerate() {
                println!("{}: {}", index + 1, component.join(" "));
            }
            Ok(())
        }
    }
}
