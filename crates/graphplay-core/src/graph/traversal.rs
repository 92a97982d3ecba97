use crate::graph::types::{Edge, EdgeType, Vertex};

/// Read-only view of a graph, consumed by the algorithms.
///
/// Implementations must iterate vertices in a stable order.
pub trait GraphProvider<T: Vertex> {
    fn edge_type(&self) -> EdgeType;

    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    fn num_vertices(&self) -> usize;

    fn has_vertex(&self, vertex: &T) -> bool;

    /// Outgoing edges of `vertex`; empty for unknown vertices
    fn edges(&self, vertex: &T) -> &[Edge<T>];

    /// First edge from `from` to `to`, if any
    fn get_edge(&self, from: &T, to: &T) -> Option<&Edge<T>> {
        self.edges(from).iter().find(|edge| edge.to() == to)
    }

    fn has_edge(&self, from: &T, to: &T) -> bool {
        self.get_edge(from, to).is_some()
    }
}
