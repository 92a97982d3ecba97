use crate::error::Result;
use crate::graph::algos::shared::{require_vertex, traverse_from};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use crate::trace_time;
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

/// Vertices reachable from `start` in breadth-first order.
///
/// Neighbors are expanded in incidence order, so the result is deterministic.
#[tracing::instrument(skip(graph, start), fields(start = ?start, vertices = graph.num_vertices()))]
pub fn breadth_first_search<T: Vertex>(graph: &dyn GraphProvider<T>, start: &T) -> Result<Vec<T>> {
    require_vertex(graph, start)?;
    let timer = Instant::now();

    let mut visited = HashSet::with_capacity(graph.num_vertices());
    let mut order = Vec::new();
    traverse_from(graph, start, &mut visited, &mut VecDeque::<T>::new(), &mut order);

    tracing::debug!(visited = order.len(), "breadth_first_search");
    trace_time!(timer, "breadth_first_search");
    Ok(order)
}

/// Breadth-first order over the whole graph, restarting at each unvisited
/// vertex in vertex order
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn breadth_first_search_all<T: Vertex>(graph: &dyn GraphProvider<T>) -> Vec<T> {
    let mut visited = HashSet::with_capacity(graph.num_vertices());
    let mut order = Vec::with_capacity(graph.num_vertices());
    let mut queue: VecDeque<T> = VecDeque::new();

    for vertex in graph.vertices() {
        if !visited.contains(vertex) {
            traverse_from(graph, vertex, &mut visited, &mut queue, &mut order);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::{EdgeType, Graph};

    fn tree() -> Graph<&'static str> {
        let mut graph = Graph::with_vertices(["A", "B", "C", "D", "E", "F"], EdgeType::Directed);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();
        graph.add_edge("B", "D").unwrap();
        graph.add_edge("B", "E").unwrap();
        graph.add_edge("C", "F").unwrap();
        graph
    }

    #[test]
    fn test_level_order() {
        let order = breadth_first_search(&tree(), &"A").unwrap();
        assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_only_reachable_vertices() {
        let order = breadth_first_search(&tree(), &"B").unwrap();
        assert_eq!(order, vec!["B", "D", "E"]);
    }

    #[test]
    fn test_cycles_visit_once() {
        let mut graph = Graph::with_vertices([1, 2, 3], EdgeType::Undirected);
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph.add_edge(3, 1).unwrap();
        graph.add_edge(1, 1).unwrap();
        assert_eq!(breadth_first_search(&graph, &2).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn test_missing_start() {
        let err = breadth_first_search(&tree(), &"Z").unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
    }

    #[test]
    fn test_all_covers_disconnected_parts() {
        let mut graph = Graph::with_vertices(["A", "B", "C", "D"], EdgeType::Directed);
        graph.add_edge("C", "A").unwrap();
        graph.add_edge("B", "D").unwrap();
        assert_eq!(breadth_first_search_all(&graph), vec!["A", "B", "D", "C"]);
    }

    #[test]
    fn test_handles_long_chains() {
        let count = 100_000u32;
        let mut graph = Graph::with_vertices(0..count, EdgeType::Directed);
        for i in 0..count - 1 {
            graph.add_edge(i, i + 1).unwrap();
        }
        let order = breadth_first_search(&graph, &0).unwrap();
        assert_eq!(order.len(), count as usize);
        assert_eq!(order.last(), Some(&(count - 1)));
    }
}
