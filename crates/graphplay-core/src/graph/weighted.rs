use std::fmt;

use crate::error::Result;
use crate::graph::adjacency::AdjacencyMap;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, EdgeType, Vertex, Weight, DEFAULT_WEIGHT};

/// Graph whose edges carry explicit weights.
///
/// `add_edge` without a weight uses the graph's default weight
/// ([`DEFAULT_WEIGHT`] unless overridden).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<T> {
    map: AdjacencyMap<T>,
    default_weight: Weight,
}

impl<T: Vertex> WeightedGraph<T> {
    pub fn new(edge_type: EdgeType) -> Self {
        WeightedGraph {
            map: AdjacencyMap::new(edge_type),
            default_weight: DEFAULT_WEIGHT,
        }
    }

    pub fn directed() -> Self {
        Self::new(EdgeType::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(EdgeType::Undirected)
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = T>, edge_type: EdgeType) -> Self {
        WeightedGraph {
            map: AdjacencyMap::with_vertices(vertices, edge_type),
            default_weight: DEFAULT_WEIGHT,
        }
    }

    pub fn with_default_weight(mut self, weight: Weight) -> Self {
        self.default_weight = weight;
        self
    }

    pub fn default_weight(&self) -> Weight {
        self.default_weight
    }

    pub fn add_vertex(&mut self, vertex: T) {
        self.map.add_vertex(vertex);
    }

    /// Add an edge using the default weight
    pub fn add_edge(&mut self, from: T, to: T) -> Result<()> {
        self.map.insert_edge(from, to, self.default_weight)
    }

    pub fn add_weighted_edge(&mut self, from: T, to: T, weight: Weight) -> Result<()> {
        self.map.insert_edge(from, to, weight)
    }

    pub(crate) fn link(&mut self, from: T, to: T, weight: Weight) {
        self.map.link(from, to, weight);
    }

    /// Logical edges, undirected pairs reported once
    pub fn edge_list(&self) -> Vec<&Edge<T>> {
        self.map.unique_edges()
    }

    pub fn num_edges(&self) -> usize {
        self.map.num_edges()
    }

    /// Sum of logical edge weights
    pub fn total_weight(&self) -> Weight {
        self.map.unique_edges().iter().map(|edge| edge.weight()).sum()
    }

    pub(crate) fn stored_edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.map.stored_edges()
    }

    /// New graph with every edge flipped, weights kept
    pub fn reverse(&self) -> Self {
        WeightedGraph {
            map: self.map.reversed(),
            default_weight: self.default_weight,
        }
    }
}

impl<T: Vertex> Default for WeightedGraph<T> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<T: Vertex> GraphProvider<T> for WeightedGraph<T> {
    fn edge_type(&self) -> EdgeType {
        self.map.edge_type()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        self.map.vertices()
    }

    fn num_vertices(&self) -> usize {
        self.map.num_vertices()
    }

    fn has_vertex(&self, vertex: &T) -> bool {
        self.map.has_vertex(vertex)
    }

    fn edges(&self, vertex: &T) -> &[Edge<T>] {
        self.map.edges(vertex)
    }
}

impl<T: fmt::Display> fmt::Display for WeightedGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.map.fmt_incidence(f, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adding_edge_uses_default_weight() {
        let mut graph = WeightedGraph::with_vertices([0, 1, 2], EdgeType::Directed);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.get_edge(&0, &1).map(Edge::weight), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_custom_default_weight() {
        let mut graph =
            WeightedGraph::with_vertices([0, 1], EdgeType::Directed).with_default_weight(11);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.get_edge(&0, &1).map(Edge::weight), Some(11));
    }

    #[test]
    fn test_undirected_weighted_mirror_keeps_weight() {
        let mut graph = WeightedGraph::with_vertices(["A", "B"], EdgeType::Undirected);
        graph.add_weighted_edge("A", "B", 9).unwrap();
        assert_eq!(graph.get_edge(&"B", &"A").map(Edge::weight), Some(9));
        assert_eq!(graph.total_weight(), 9);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_total_weight_directed() {
        let mut graph = WeightedGraph::with_vertices(["A", "B", "C"], EdgeType::Directed);
        graph.add_weighted_edge("A", "B", 2).unwrap();
        graph.add_weighted_edge("B", "A", 3).unwrap();
        graph.add_weighted_edge("B", "C", 4).unwrap();
        assert_eq!(graph.total_weight(), 9);
        assert_eq!(graph.edge_list().len(), 3);
    }

    #[test]
    fn test_reverse_keeps_weights() {
        let mut graph = WeightedGraph::with_vertices(["A", "B"], EdgeType::Directed);
        graph.add_weighted_edge("A", "B", 8).unwrap();
        let reversed = graph.reverse();
        assert_eq!(reversed.get_edge(&"B", &"A").map(Edge::weight), Some(8));
        assert!(!reversed.has_edge(&"A", &"B"));
    }

    #[test]
    fn test_display_includes_weights() {
        let mut graph = WeightedGraph::with_vertices(["A", "B"], EdgeType::Undirected);
        graph.add_weighted_edge("A", "B", 3).unwrap();
        assert_eq!(graph.to_string(), "A: -->B(3)\nB: -->A(3)\n");
    }
}
