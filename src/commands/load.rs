//! Loading graph description files for commands

use std::fmt;
use std::path::Path;

use graphplay_core::error::Result;
use graphplay_core::graph::{
    EdgeType, EdgeWeight, Graph, GraphComponents, GraphProvider, Weight, WeightedGraph,
};

/// A graph built according to its description's `edge_weight`
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Plain(Graph<String>),
    Weighted(WeightedGraph<String>),
}

impl LoadedGraph {
    pub fn provider(&self) -> &dyn GraphProvider<String> {
        match self {
            LoadedGraph::Plain(graph) => graph,
            LoadedGraph::Weighted(graph) => graph,
        }
    }

    pub fn is_weighted(&self) -> bool {
        matches!(self, LoadedGraph::Weighted(_))
    }

    pub fn num_vertices(&self) -> usize {
        self.provider().num_vertices()
    }

    pub fn edge_type(&self) -> EdgeType {
        self.provider().edge_type()
    }

    pub fn num_edges(&self) -> usize {
        match self {
            LoadedGraph::Plain(graph) => graph.num_edges(),
            LoadedGraph::Weighted(graph) => graph.num_edges(),
        }
    }

    pub fn components(&self) -> GraphComponents<String> {
        match self {
            LoadedGraph::Plain(graph) => GraphComponents::from_graph(graph),
            LoadedGraph::Weighted(graph) => GraphComponents::from_weighted(graph),
        }
    }
}

impl fmt::Display for LoadedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedGraph::Plain(graph) => write!(f, "{}", graph),
            LoadedGraph::Weighted(graph) => write!(f, "{}", graph),
        }
    }
}

/// Load a graph as plain or weighted, as its description says
pub fn load_graph(path: &Path, default_weight: Weight) -> Result<LoadedGraph> {
    let components = GraphComponents::load(path)?;
    match components.edge_weight {
        EdgeWeight::Unweighted => Ok(LoadedGraph::Plain(components.to_graph()?)),
        EdgeWeight::Weighted => Ok(LoadedGraph::Weighted(
            components.to_weighted_graph(default_weight)?,
        )),
    }
}

/// Load a graph for the weighted algorithms.
///
/// An unweighted description gives every edge `default_weight`.
pub fn load_weighted(path: &Path, default_weight: Weight) -> Result<WeightedGraph<String>> {
    let mut components = GraphComponents::load(path)?;
    if components.edge_weight == EdgeWeight::Unweighted {
        tracing::debug!(default_weight, "unweighted description, using default weight for every edge");
        for edge in &mut components.edges {
            edge.weight = None;
        }
    }
    components.to_weighted_graph(default_weight)
}
