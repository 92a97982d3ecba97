//! `graphplay prim` / `graphplay kruskal` - minimum spanning trees

use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::{kruskals, prims, GraphProvider};

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_weighted;
use crate::commands::output::{edges_json, note, print_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanningAlgorithm {
    Prim,
    Kruskal,
}

impl SpanningAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SpanningAlgorithm::Prim => "prim",
            SpanningAlgorithm::Kruskal => "kruskal",
        }
    }
}

pub fn execute(ctx: &Context, path: &Path, algorithm: SpanningAlgorithm) -> Result<()> {
    let graph = load_weighted(path, ctx.default_weight)?;
    let tree = match algorithm {
        SpanningAlgorithm::Prim => prims(&graph),
        SpanningAlgorithm::Kruskal => kruskals(&graph),
    };

    let edges = tree.edge_list();
    // A forest over c components has |V| - c edges
    let connected = edges.len() + 1 >= graph.num_vertices();

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "algorithm": algorithm.name(),
            "total_weight": tree.total_weight(),
            "connected": connected,
            "edges": edges_json(&edges),
        })),
        OutputFormat::Human => {
            for edge in &edges {
                println!("{} - {} ({})", edge.from(), edge.to(), edge.weight());
            }
            println!("total weight: {}", tree.total_weight());
            if !connected {
                note(ctx, "graph is disconnected: result is a spanning forest");
            }
            Ok(())
        }
    }
}
