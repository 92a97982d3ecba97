//! Graph algorithm implementations
//!
//! - `topo`: Kahn topological sort and cycle check
//! - `bfs` / `dfs`: traversal orders, plus depth-first finish order
//! - `scc`: Kosaraju strongly connected components
//! - `prim` / `kruskal`: minimum spanning trees
//! - `dijkstra`: single-source shortest path trees
//! - `shared`: frontier abstraction and helpers used by the traversals

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kruskal;
pub mod prim;
pub mod scc;
pub mod shared;
pub mod topo;

pub use bfs::{breadth_first_search, breadth_first_search_all};
pub use dfs::{depth_first_finish_order, depth_first_search};
pub use dijkstra::{dijkstras, shortest_distances, shortest_paths, ShortestPaths};
pub use kruskal::kruskals;
pub use prim::prims;
pub use scc::strongly_connected_components;
pub use shared::Frontier;
pub use topo::{is_acyclic, topological_sort};
