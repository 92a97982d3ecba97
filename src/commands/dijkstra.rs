//! `graphplay dijkstra` - shortest-path tree from a source vertex

use std::collections::HashMap;
use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::{shortest_paths, GraphProvider, ShortestPaths};

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_weighted;
use crate::commands::output::{edges_json, print_json};

pub fn execute(ctx: &Context, path: &Path, source: &str) -> Result<()> {
    let graph = load_weighted(path, ctx.default_weight)?;
    let source = source.to_string();

    let ShortestPaths { tree, distances } = shortest_paths(&graph, &source)?;
    let unreachable: Vec<&String> = graph
        .vertices()
        .filter(|vertex| !distances.contains_key(*vertex))
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "source": source,
            "distances": distances,
            "unreachable": unreachable,
            "edges": edges_json(&tree.edge_list()),
        })),
        OutputFormat::Human => {
            let parents: HashMap<&String, &String> = tree
                .edge_list()
                .into_iter()
                .map(|edge| (edge.to(), edge.from()))
                .collect();

            for vertex in graph.vertices() {
                match distances.get(vertex) {
                    Some(distance) => {
                        println!("{}\t{}\t{}", vertex, distance, path_to(&parents, vertex).join(" -> "))
                    }
                    None => println!("{}\tunreachable", vertex),
                }
            }
            Ok(())
        }
    }
}

/// Follow tree parents back to the source
fn path_to<'a>(parents: &HashMap<&'a String, &'a String>, vertex: &'a String) -> Vec<&'a str> {
    let mut path = vec![vertex.as_str()];
    let mut current = vertex;
    while let Some(&parent) = parents.get(current) {
        path.push(parent.as_str());
        current = parent;
    }
    path.reverse();
    path
}
