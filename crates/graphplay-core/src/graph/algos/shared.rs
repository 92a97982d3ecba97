use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::{HashSet, VecDeque};

/// Pending vertices of a traversal.
///
/// A FIFO frontier gives breadth-first order, a LIFO frontier depth-first.
pub trait Frontier<T> {
    fn push(&mut self, item: T);

    /// Queue the neighbors of the vertex just visited, in incidence order
    fn push_neighbors(&mut self, neighbors: Vec<T>);

    fn next(&mut self) -> Option<T>;
}

impl<T> Frontier<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn push_neighbors(&mut self, neighbors: Vec<T>) {
        self.extend(neighbors);
    }

    fn next(&mut self) -> Option<T> {
        self.pop_front()
    }
}

impl<T> Frontier<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    // Reversed so the first neighbor ends up on top and is explored first
    fn push_neighbors(&mut self, neighbors: Vec<T>) {
        self.extend(neighbors.into_iter().rev());
    }

    fn next(&mut self) -> Option<T> {
        self.pop()
    }
}

/// Fail with `VertexNotFound` unless `vertex` is in the graph
pub fn require_vertex<T: Vertex>(graph: &dyn GraphProvider<T>, vertex: &T) -> Result<()> {
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(GraphError::vertex_not_found(vertex))
    }
}

/// Visit everything reachable from `start` that is not yet in `visited`.
///
/// Vertices are marked when taken off the frontier, so each one is appended
/// to `order` exactly once. `visited` is shared across calls so whole-graph
/// traversals can restart from every unvisited vertex.
pub fn traverse_from<T, F>(
    graph: &dyn GraphProvider<T>,
    start: &T,
    visited: &mut HashSet<T>,
    frontier: &mut F,
    order: &mut Vec<T>,
) where
    T: Vertex,
    F: Frontier<T>,
{
    frontier.push(start.clone());

    while let Some(vertex) = frontier.next() {
        if !visited.insert(vertex.clone()) {
            continue;
        }

        let neighbors = graph
            .edges(&vertex)
            .iter()
            .map(|edge| edge.to())
            .filter(|to| !visited.contains(*to))
            .cloned()
            .collect();

        order.push(vertex);
        frontier.push_neighbors(neighbors);
    }
}
