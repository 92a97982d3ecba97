//! Graph storage and algorithms
//!
//! - `Graph` and `WeightedGraph` over a shared incidence map
//! - `GraphProvider` read trait that the algorithms are written against
//! - `GraphComponents` file/wire description of a graph
//! - `algos`: sorting, traversal, components, spanning trees, shortest paths

pub mod adjacency;
pub mod algos;
pub mod components;
pub mod plain;
pub mod traversal;
pub mod types;
pub mod weighted;

pub use adjacency::AdjacencyMap;
pub use algos::{
    breadth_first_search, breadth_first_search_all, depth_first_finish_order, depth_first_search,
    dijkstras, is_acyclic, kruskals, prims, shortest_distances, shortest_paths,
    strongly_connected_components, topological_sort, ShortestPaths,
};
pub use components::{EdgeComponents, GraphComponents};
pub use plain::Graph;
pub use traversal::GraphProvider;
pub use types::{Distance, Edge, EdgeType, EdgeWeight, Vertex, Weight, DEFAULT_WEIGHT, UNWEIGHTED};
pub use weighted::WeightedGraph;
