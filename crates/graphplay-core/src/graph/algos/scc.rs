use crate::graph::adjacency::AdjacencyMap;
use crate::graph::algos::dfs::depth_first_finish_order;
use crate::graph::algos::shared::traverse_from;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use crate::trace_time;
use std::collections::HashSet;
use std::time::Instant;

/// Kosaraju's algorithm.
///
/// Two vertices share a component exactly when each is reachable from the
/// other. Components are emitted in decreasing finish time of the first pass;
/// within a component, vertices appear in depth-first order over the
/// transposed graph. For undirected graphs this is the connected components.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn strongly_connected_components<T: Vertex>(graph: &dyn GraphProvider<T>) -> Vec<Vec<T>> {
    let start = Instant::now();

    let finished = depth_first_finish_order(graph);
    let transposed = AdjacencyMap::transpose_of(graph);

    let mut visited = HashSet::with_capacity(graph.num_vertices());
    let mut stack: Vec<T> = Vec::new();
    let mut components = Vec::new();

    for vertex in finished.iter().rev() {
        if visited.contains(vertex) {
            continue;
        }
        let mut component = Vec::new();
        traverse_from(&transposed, vertex, &mut visited, &mut stack, &mut component);
        components.push(component);
    }

    tracing::debug!(components = components.len(), "strongly_connected_components");
    trace_time!(start, "strongly_connected_components");
    components
}
