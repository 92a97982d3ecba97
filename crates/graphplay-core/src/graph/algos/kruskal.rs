use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, EdgeType, Vertex};
use crate::graph::weighted::WeightedGraph;
use crate::trace_time;
use crate::union_find::UnionFind;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Min-heap entry ordered by edge weight, then by insertion sequence
#[derive(Debug)]
struct HeapEntry<'a, T> {
    edge: &'a Edge<T>,
    sequence: usize,
}

impl<T> PartialEq for HeapEntry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<'_, T> {}

impl<T> PartialOrd for HeapEntry<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<'_, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.edge
            .cmp_weight(other.edge)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Kruskal's minimum spanning tree (a forest if the input is disconnected).
///
/// Stored edges are taken cheapest first and kept when they join two
/// different components. Equal weights are taken in storage order. The
/// result is an undirected graph containing all input vertices.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn kruskals<T: Vertex>(graph: &WeightedGraph<T>) -> WeightedGraph<T> {
    let start = Instant::now();

    let mut components = UnionFind::with_capacity(graph.num_vertices());
    for vertex in graph.vertices() {
        components.add(vertex.clone());
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry<'_, T>>> = graph
        .stored_edges()
        .enumerate()
        .map(|(sequence, edge)| Reverse(HeapEntry { edge, sequence }))
        .collect();

    let mut tree = WeightedGraph::with_vertices(graph.vertices().cloned(), EdgeType::Undirected)
        .with_default_weight(graph.default_weight());
    let needed = graph.num_vertices().saturating_sub(1);
    let mut kept = 0usize;

    while let Some(Reverse(HeapEntry { edge, .. })) = heap.pop() {
        if kept == needed {
            break;
        }
        // Every endpoint was registered above, so join cannot fail
        if matches!(components.join(edge.from(), edge.to()), Ok(true)) {
            tree.link(edge.from().clone(), edge.to().clone(), edge.weight());
            kept += 1;
        }
    }

    tracing::debug!(
        edges = kept,
        total_weight = tree.total_weight(),
        "kruskals"
    );
    trace_time!(start, "kruskals");
    tree
}
