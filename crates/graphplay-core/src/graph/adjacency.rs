//! Incidence-list storage shared by `Graph` and `WeightedGraph`.
//!
//! Vertices are kept in a `BTreeMap`, so iteration is in ascending vertex
//! order and identical across runs. Every edge endpoint is a key of the map.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Edge, EdgeType, Vertex, Weight};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap<T> {
    incidence: BTreeMap<T, Vec<Edge<T>>>,
    edge_type: EdgeType,
}

impl<T: Vertex> AdjacencyMap<T> {
    pub fn new(edge_type: EdgeType) -> Self {
        AdjacencyMap {
            incidence: BTreeMap::new(),
            edge_type,
        }
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = T>, edge_type: EdgeType) -> Self {
        let mut map = Self::new(edge_type);
        for vertex in vertices {
            map.add_vertex(vertex);
        }
        map
    }

    /// Add a vertex; no-op if it is already present
    pub fn add_vertex(&mut self, vertex: T) {
        self.incidence.entry(vertex).or_default();
    }

    /// Store an edge, plus its mirror for undirected graphs.
    ///
    /// Fails without modifying the graph if either endpoint is missing.
    /// Repeated inserts are kept as parallel edges.
    pub fn insert_edge(&mut self, from: T, to: T, weight: Weight) -> Result<()> {
        if !self.incidence.contains_key(&from) || !self.incidence.contains_key(&to) {
            return Err(GraphError::invalid_edge(&from, &to));
        }

        if self.edge_type == EdgeType::Undirected {
            self.push_edge(Edge::new(to.clone(), from.clone(), weight));
        }
        self.push_edge(Edge::new(from, to, weight));
        Ok(())
    }

    /// Like `insert_edge`, for endpoints the caller took from this map's vertex set
    pub(crate) fn link(&mut self, from: T, to: T, weight: Weight) {
        self.add_vertex(to.clone());
        if self.edge_type == EdgeType::Undirected {
            self.push_edge(Edge::new(to.clone(), from.clone(), weight));
        }
        self.push_edge(Edge::new(from, to, weight));
    }

    fn push_edge(&mut self, edge: Edge<T>) {
        self.incidence
            .entry(edge.from().clone())
            .or_default()
            .push(edge);
    }

    /// Every stored edge, mirrored copies included
    pub fn stored_edges(&self) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.incidence.values().flatten()
    }

    /// Logical edges: undirected mirror pairs are reported once
    pub fn unique_edges(&self) -> Vec<&Edge<T>> {
        if self.edge_type == EdgeType::Directed {
            return self.stored_edges().collect();
        }

        let mut unique = Vec::new();
        for edges in self.incidence.values() {
            let mut self_loops = 0usize;
            for edge in edges {
                if edge.from() < edge.to() {
                    unique.push(edge);
                } else if edge.from() == edge.to() {
                    // A self-loop is stored twice in its own list
                    if self_loops % 2 == 0 {
                        unique.push(edge);
                    }
                    self_loops += 1;
                }
            }
        }
        unique
    }

    pub fn num_edges(&self) -> usize {
        self.unique_edges().len()
    }

    /// Copy of `provider` with every edge pointing the other way.
    ///
    /// Undirected graphs already hold both directions, so they are copied as-is.
    pub fn transpose_of(provider: &dyn GraphProvider<T>) -> Self {
        let edge_type = provider.edge_type();
        let mut map = Self::with_vertices(provider.vertices().cloned(), edge_type);
        for vertex in provider.vertices() {
            for edge in provider.edges(vertex) {
                match edge_type {
                    EdgeType::Directed => map.push_edge(edge.flipped()),
                    EdgeType::Undirected => map.push_edge(edge.clone()),
                }
            }
        }
        map
    }

    pub fn reversed(&self) -> Self {
        match self.edge_type {
            EdgeType::Undirected => self.clone(),
            EdgeType::Directed => Self::transpose_of(self),
        }
    }
}

impl<T: Vertex> GraphProvider<T> for AdjacencyMap<T> {
    fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.incidence.keys())
    }

    fn num_vertices(&self) -> usize {
        self.incidence.len()
    }

    fn has_vertex(&self, vertex: &T) -> bool {
        self.incidence.contains_key(vertex)
    }

    fn edges(&self, vertex: &T) -> &[Edge<T>] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<T: fmt::Display> AdjacencyMap<T> {
    /// One line per vertex: `A: -->B -->C`, with `(weight)` suffixes if `weighted`
    pub fn fmt_incidence(&self, f: &mut fmt::Formatter<'_>, weighted: bool) -> fmt::Result {
        for (vertex, edges) in &self.incidence {
            write!(f, "{}:", vertex)?;
            for edge in edges {
                write!(f, " -->{}", edge.to())?;
                if weighted {
                    write!(f, "({})", edge.weight())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
