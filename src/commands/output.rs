//! Shared output helpers

use graphplay_core::error::Result;
use graphplay_core::graph::Edge;

use crate::commands::dispatch::Context;

pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn edges_json(edges: &[&Edge<String>]) -> serde_json::Value {
    edges
        .iter()
        .map(|edge| {
            serde_json::json!({
                "from": edge.from(),
                "to": edge.to(),
                "weight": edge.weight(),
            })
        })
        .collect()
}

/// Informational message on stderr, suppressed by `--quiet`
pub fn note(ctx: &Context, message: &str) {
    if !ctx.quiet {
        eprintln!("{}", message);
    }
}
