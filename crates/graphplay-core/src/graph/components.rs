//! Serializable graph description.
//!
//! A graph file lists its vertices and edges explicitly:
//!
//! ```json
//! {
//!   "edge_type": "undirected",
//!   "edge_weight": "weighted",
//!   "vertices": ["A", "B"],
//!   "edges": [{ "from": "A", "to": "B", "weight": 3 }]
//! }
//! ```
//!
//! The same shape is accepted as TOML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{GraphError, Result};
use crate::graph::plain::Graph;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{EdgeType, EdgeWeight, Vertex, Weight};
use crate::graph::weighted::WeightedGraph;

/// One edge of a graph description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeComponents<T> {
    pub from: T,
    pub to: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// Vertices, edges and edge semantics of a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphComponents<T> {
    #[serde(default)]
    pub edge_type: EdgeType,
    #[serde(default)]
    pub edge_weight: EdgeWeight,
    #[serde(default = "Vec::new")]
    pub vertices: Vec<T>,
    #[serde(default = "Vec::new")]
    pub edges: Vec<EdgeComponents<T>>,
}

impl<T: Vertex> GraphComponents<T> {
    /// Build an unweighted graph; any edge weights are ignored
    pub fn to_graph(&self) -> Result<Graph<T>> {
        let mut graph = Graph::with_vertices(self.vertices.iter().cloned(), self.edge_type);
        for edge in &self.edges {
            if edge.weight.is_some() {
                tracing::debug!(from = ?edge.from, to = ?edge.to, "ignoring weight on unweighted graph");
            }
            graph.add_edge(edge.from.clone(), edge.to.clone())?;
        }
        Ok(graph)
    }

    /// Build a weighted graph; edges without a weight get `default_weight`
    pub fn to_weighted_graph(&self, default_weight: Weight) -> Result<WeightedGraph<T>> {
        let mut graph = WeightedGraph::with_vertices(self.vertices.iter().cloned(), self.edge_type)
            .with_default_weight(default_weight);
        for edge in &self.edges {
            match edge.weight {
                Some(weight) => graph.add_weighted_edge(edge.from.clone(), edge.to.clone(), weight)?,
                None => graph.add_edge(edge.from.clone(), edge.to.clone())?,
            }
        }
        Ok(graph)
    }

    /// Describe an unweighted graph, listing undirected pairs once
    pub fn from_graph(graph: &Graph<T>) -> Self {
        GraphComponents {
            edge_type: graph.edge_type(),
            edge_weight: EdgeWeight::Unweighted,
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edge_list()
                .into_iter()
                .map(|edge| EdgeComponents {
                    from: edge.from().clone(),
                    to: edge.to().clone(),
                    weight: None,
                })
                .collect(),
        }
    }

    /// Describe a weighted graph, listing undirected pairs once
    pub fn from_weighted(graph: &WeightedGraph<T>) -> Self {
        GraphComponents {
            edge_type: graph.edge_type(),
            edge_weight: EdgeWeight::Weighted,
            vertices: graph.vertices().cloned().collect(),
            edges: graph
                .edge_list()
                .into_iter()
                .map(|edge| EdgeComponents {
                    from: edge.from().clone(),
                    to: edge.to().clone(),
                    weight: Some(edge.weight()),
                })
                .collect(),
        }
    }
}

impl GraphComponents<String> {
    /// Load a graph description from a `.json` or `.toml` file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read", path.display(), e))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let components: GraphComponents<String> = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            other => bail_unsupported!("graph file extension", other, "json, toml"),
        };

        tracing::debug!(
            vertices = components.vertices.len(),
            edges = components.edges.len(),
            edge_type = %components.edge_type,
            "loaded graph description"
        );
        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Edge, DEFAULT_WEIGHT};
    use tempfile::tempdir;

    fn sample() -> GraphComponents<String> {
        serde_json::from_str(
            r#"{
                "edge_type": "undirected",
                "edge_weight": "weighted",
                "vertices": ["A", "B", "C"],
                "edges": [
                    { "from": "A", "to": "B", "weight": 2 },
                    { "from": "B", "to": "C" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_to_weighted_graph_applies_default() {
        let graph = sample().to_weighted_graph(DEFAULT_WEIGHT).unwrap();
        assert_eq!(graph.edge_type(), EdgeType::Undirected);
        assert_eq!(
            graph.get_edge(&"A".to_string(), &"B".to_string()).map(Edge::weight),
            Some(2)
        );
        assert_eq!(
            graph.get_edge(&"C".to_string(), &"B".to_string()).map(Edge::weight),
            Some(DEFAULT_WEIGHT)
        );
    }

    #[test]
    fn test_to_graph_drops_weights() {
        let graph = sample().to_graph().unwrap();
        assert_eq!(
            graph.get_edge(&"A".to_string(), &"B".to_string()).map(Edge::weight),
            Some(0)
        );
    }

    #[test]
    fn test_unknown_endpoint_is_rejected() {
        let mut components = sample();
        components.edges.push(EdgeComponents {
            from: "A".to_string(),
            to: "Z".to_string(),
            weight: None,
        });
        assert!(matches!(
            components.to_graph(),
            Err(GraphError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let components: GraphComponents<u32> = serde_json::from_str(r#"{"vertices": [1, 2]}"#).unwrap();
        assert_eq!(components.edge_type, EdgeType::Directed);
        assert_eq!(components.edge_weight, EdgeWeight::Unweighted);
        assert!(components.edges.is_empty());
    }

    #[test]
    fn test_from_weighted_lists_pairs_once() {
        let graph = sample().to_weighted_graph(1).unwrap();
        let described = GraphComponents::from_weighted(&graph);
        assert_eq!(described.edges.len(), 2);
        assert_eq!(described.vertices, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_graph_omits_weights() {
        let graph = sample().to_graph().unwrap();
        let described = GraphComponents::from_graph(&graph);
        assert_eq!(described.edge_weight, EdgeWeight::Unweighted);
        assert_eq!(described.edges.len(), 2);
        assert!(described.edges.iter().all(|e| e.weight.is_none()));
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempdir().unwrap();

        let json_path = dir.path().join("g.json");
        fs::write(
            &json_path,
            r#"{"vertices": ["x", "y"], "edges": [{"from": "x", "to": "y"}]}"#,
        )
        .unwrap();
        let loaded = GraphComponents::load(&json_path).unwrap();
        assert_eq!(loaded.vertices, vec!["x", "y"]);

        let toml_path = dir.path().join("g.toml");
        fs::write(
            &toml_path,
            "edge_type = \"undirected\"\nvertices = [\"x\", \"y\"]\n\n[[edges]]\nfrom = \"x\"\nto = \"y\"\nweight = 4\n",
        )
        .unwrap();
        let loaded = GraphComponents::load(&toml_path).unwrap();
        assert_eq!(loaded.edge_type, EdgeType::Undirected);
        assert_eq!(loaded.edges[0].weight, Some(4));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.yaml");
        fs::write(&path, "vertices: []").unwrap();
        assert!(matches!(
            GraphComponents::load(&path),
            Err(GraphError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = GraphComponents::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GraphError::FailedOperation { .. }));
    }
}
