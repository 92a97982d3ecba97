//! `graphplay bfs` / `graphplay dfs` - traversal orders

use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::{
    breadth_first_search, breadth_first_search_all, depth_first_finish_order, depth_first_search,
};

use crate::cli::OutputFormat;
use crate::commands::dispatch::Context;
use crate::commands::load::load_graph;
use crate::commands::output::print_json;

/// Breadth-first order from `start`, or over every vertex without one
pub fn execute_bfs(ctx: &Context, path: &Path, start: Option<&str>) -> Result<()> {
    let graph = load_graph(path, ctx.default_weight)?;
    let provider = graph.provider();

    let order = match start {
        Some(start) => breadth_first_search(provider, &start.to_string())?,
        None => breadth_first_search_all(provider),
    };
    print_order(ctx, "bfs", start, &order)
}

/// Depth-first pre-order from `start`, or whole-graph finishing order without one
pub fn execute_dfs(ctx: &Context, path: &Path, start: Option<&str>) -> Result<()> {
    let graph = load_graph(path, ctx.default_weight)?;
    let provider = graph.provider();

    match start {
        Some(start) => {
            let order = depth_first_search(provider, &start.to_string())?;
            print_order(ctx, "dfs", Some(start), &order)
        }
        None => {
            let order = depth_first_finish_order(provider);
            print_order(ctx, "dfs_finish", None, &order)
        }
    }
}

fn print_order(ctx: &Context, traversal: &str, start: Option<&str>, order: &[String]) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "traversal": traversal,
            "start": start,
            "order": order,
        })),
        OutputFormat::Human => {
            for vertex in order {
                println!("{}", vertex);
            }
            Ok(())
        }
    }
}
