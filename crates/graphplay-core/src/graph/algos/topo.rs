use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use crate::trace_time;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Kahn's algorithm.
///
/// Every vertex is emitted after all of its predecessors. If the graph has a
/// cycle, vertices on or downstream of it never reach in-degree zero and the
/// result is shorter than the vertex count. Undirected graphs with any edge
/// therefore sort only their isolated vertices.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn topological_sort<T: Vertex>(graph: &dyn GraphProvider<T>) -> Vec<T> {
    let start = Instant::now();

    let mut in_degrees: HashMap<&T, usize> = graph.vertices().map(|v| (v, 0)).collect();
    for vertex in graph.vertices() {
        for edge in graph.edges(vertex) {
            *in_degrees.entry(edge.to()).or_insert(0) += 1;
        }
    }

    let mut ready: VecDeque<&T> = graph
        .vertices()
        .filter(|v| in_degrees.get(v).copied().unwrap_or(0) == 0)
        .collect();

    let mut sorted = Vec::with_capacity(graph.num_vertices());
    while let Some(vertex) = ready.pop_front() {
        sorted.push(vertex.clone());
        for edge in graph.edges(vertex) {
            if let Some(degree) = in_degrees.get_mut(edge.to()) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push_back(edge.to());
                }
            }
        }
    }

    if sorted.len() < graph.num_vertices() {
        tracing::debug!(
            sorted = sorted.len(),
            unsorted = graph.num_vertices() - sorted.len(),
            "cycle detected, returning partial order"
        );
    }
    trace_time!(start, "topological_sort", sorted = sorted.len());
    sorted
}

/// Whether the topological sort covers every vertex
pub fn is_acyclic<T: Vertex>(graph: &dyn GraphProvider<T>) -> bool {
    topological_sort(graph).len() == graph.num_vertices()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeType, Graph};

    fn position<T: PartialEq>(order: &[T], item: &T) -> usize {
        order.iter().position(|x| x == item).unwrap()
    }

    #[test]
    fn test_sort_dag() {
        let mut graph = Graph::with_vertices(["shirt", "tie", "jacket", "belt", "pants"], EdgeType::Directed);
        graph.add_edge("shirt", "tie").unwrap();
        graph.add_edge("tie", "jacket").unwrap();
        graph.add_edge("pants", "belt").unwrap();
        graph.add_edge("belt", "jacket").unwrap();
        graph.add_edge("shirt", "belt").unwrap();

        let order = topological_sort(&graph);
        assert_eq!(order.len(), 5);
        for vertex in graph.vertices() {
            for edge in graph.edges(vertex) {
                assert!(position(&order, edge.from()) < position(&order, edge.to()));
            }
        }
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_ties_follow_vertex_order() {
        let graph = Graph::with_vertices([3, 1, 2], EdgeType::Directed);
        assert_eq!(topological_sort(&graph), vec![1, 2, 3]);
    }

    #[test]
    fn test_cycle_gives_partial_order() {
        let mut graph = Graph::with_vertices(["A", "B", "C", "D"], EdgeType::Directed);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("C", "B").unwrap();
        graph.add_edge("C", "D").unwrap();

        assert_eq!(topological_sort(&graph), vec!["A"]);
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut graph = Graph::with_vertices([1, 2], EdgeType::Directed);
        graph.add_edge(1, 1).unwrap();
        assert_eq!(topological_sort(&graph), vec![2]);
    }

    #[test]
    fn test_parallel_edges_counted() {
        let mut graph = Graph::with_vertices(["A", "B"], EdgeType::Directed);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "B").unwrap();
        assert_eq!(topological_sort(&graph), vec!["A", "B"]);
    }

    #[test]
    fn test_undirected_only_isolated_vertices_sort() {
        let mut graph = Graph::with_vertices(["A", "B", "C"], EdgeType::Undirected);
        graph.add_edge("A", "B").unwrap();
        assert_eq!(topological_sort(&graph), vec!["C"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u8> = Graph::directed();
        assert!(topological_sort(&graph).is_empty());
        assert!(is_acyclic(&graph));
    }
}
