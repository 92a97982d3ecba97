use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, EdgeType, Vertex, Weight};
use crate::graph::weighted::WeightedGraph;
use crate::heap::IndexedMinHeap;
use crate::trace_time;
use std::collections::HashMap;
use std::time::Instant;

/// Prim's minimum spanning tree (a forest if the input is disconnected).
///
/// Every vertex starts in the queue at infinite cost; the first one popped is
/// the smallest vertex. A vertex's cost drops whenever a cheaper edge from the
/// growing tree reaches it. The result is an undirected graph containing all
/// input vertices and one edge per vertex that was reached from the tree.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn prims<T: Vertex>(graph: &WeightedGraph<T>) -> WeightedGraph<T> {
    let start = Instant::now();

    let mut queue = IndexedMinHeap::with_capacity(graph.num_vertices());
    for vertex in graph.vertices() {
        queue.push(vertex.clone(), Distance::Infinite);
    }

    // vertex -> (tree neighbor, connecting weight)
    let mut connections: HashMap<T, (T, Weight)> = HashMap::with_capacity(graph.num_vertices());

    while let Some((vertex, _)) = queue.pop() {
        for edge in graph.edges(&vertex) {
            let Some(current) = queue.key_of(edge.to()) else {
                continue;
            };
            let offered = Distance::Finite(edge.weight());
            if offered < current {
                connections.insert(edge.to().clone(), (vertex.clone(), edge.weight()));
                queue.change_key(edge.to(), offered);
            }
        }
    }

    let mut tree = WeightedGraph::with_vertices(graph.vertices().cloned(), EdgeType::Undirected)
        .with_default_weight(graph.default_weight());
    for vertex in graph.vertices() {
        if let Some((parent, weight)) = connections.remove(vertex) {
            tree.link(parent, vertex.clone(), weight);
        }
    }

    tracing::debug!(
        edges = tree.num_edges(),
        total_weight = tree.total_weight(),
        "prims"
    );
    trace_time!(start, "prims");
    tree
}
