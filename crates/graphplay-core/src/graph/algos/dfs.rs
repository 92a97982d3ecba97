use crate::error::Result;
use crate::graph::algos::shared::{require_vertex, traverse_from};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use crate::trace_time;
use std::collections::HashSet;
use std::time::Instant;

/// Vertices reachable from `start` in depth-first pre-order.
///
/// Matches the recursive formulation: each vertex's neighbors are explored in
/// incidence order, fully, before moving on to the next one.
#[tracing::instrument(skip(graph, start), fields(start = ?start, vertices = graph.num_vertices()))]
pub fn depth_first_search<T: Vertex>(graph: &dyn GraphProvider<T>, start: &T) -> Result<Vec<T>> {
    require_vertex(graph, start)?;
    let timer = Instant::now();

    let mut visited = HashSet::with_capacity(graph.num_vertices());
    let mut order = Vec::new();
    traverse_from(graph, start, &mut visited, &mut Vec::<T>::new(), &mut order);

    tracing::debug!(visited = order.len(), "depth_first_search");
    trace_time!(timer, "depth_first_search");
    Ok(order)
}

/// Every vertex in the order its depth-first exploration finished.
///
/// Roots are taken in vertex order. Uses an explicit stack of
/// `(vertex, next edge index)` so deep graphs cannot overflow the call stack.
pub fn depth_first_finish_order<T: Vertex>(graph: &dyn GraphProvider<T>) -> Vec<T> {
    let mut visited: HashSet<&T> = HashSet::with_capacity(graph.num_vertices());
    let mut finished = Vec::with_capacity(graph.num_vertices());
    let mut stack: Vec<(&T, usize)> = Vec::new();

    for root in graph.vertices() {
        if !visited.insert(root) {
            continue;
        }
        stack.push((root, 0));

        loop {
            let Some((vertex, cursor)) = stack.last_mut() else {
                break;
            };
            let vertex: &T = *vertex;
            let next = graph.edges(vertex).get(*cursor);
            *cursor += 1;

            match next {
                Some(edge) => {
                    if visited.insert(edge.to()) {
                        stack.push((edge.to(), 0));
                    }
                }
                None => {
                    finished.push(vertex.clone());
                    stack.pop();
                }
            }
        }
    }
    finished
}
