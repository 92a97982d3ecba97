use std::fmt;

use crate::error::Result;
use crate::graph::adjacency::AdjacencyMap;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, EdgeType, Vertex, UNWEIGHTED};

/// Unweighted graph; every edge carries weight `0`.
///
/// Read accessors come from [`GraphProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    map: AdjacencyMap<T>,
}

impl<T: Vertex> Graph<T> {
    pub fn new(edge_type: EdgeType) -> Self {
        Graph {
            map: AdjacencyMap::new(edge_type),
        }
    }

    pub fn directed() -> Self {
        Self::new(EdgeType::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(EdgeType::Undirected)
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = T>, edge_type: EdgeType) -> Self {
        Graph {
            map: AdjacencyMap::with_vertices(vertices, edge_type),
        }
    }

    pub fn add_vertex(&mut self, vertex: T) {
        self.map.add_vertex(vertex);
    }

    /// Add an edge between two existing vertices
    pub fn add_edge(&mut self, from: T, to: T) -> Result<()> {
        self.map.insert_edge(from, to, UNWEIGHTED)
    }

    /// Logical edges, undirected pairs reported once
    pub fn edge_list(&self) -> Vec<&Edge<T>> {
        self.map.unique_edges()
    }

    pub fn num_edges(&self) -> usize {
        self.map.num_edges()
    }

    /// New graph with every edge flipped
    pub fn reverse(&self) -> Self {
        Graph {
            map: self.map.reversed(),
        }
    }
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<T: Vertex> GraphProvider<T> for Graph<T> {
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

impl<T: fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.map.fmt_incidence(f, false)
    }
}
