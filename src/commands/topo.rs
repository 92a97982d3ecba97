//! `graphplay topo` - topological order

use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::topological_sort;

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_graph;
use crate::commands::output::{note, print_json};

pub fn execute(ctx: &Context, path: &Path) -> Result<()> {
    let graph = load_graph(path, ctx.default_weight)?;
    let order = topological_sort(graph.provider());
    let total = graph.num_vertices();
    let complete = order.len() == total;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "order": order,
            "complete": complete,
        })),
        OutputFormat::Human => {
            for vertex in &order {
                println!("{}", vertex);
            }
            if !complete {
                note(
                    ctx,
                    &format!(
                        "cycle detected: {} of {} vertices could not be ordered",
                        total - order.len(),
                        total
                    ),
                );
            }
            Ok(())
        }
    }
}
