//! Graphplay Core Library
//!
//! Graph data structures and the classic algorithms over them: topological
//! sort, traversals, strongly connected components, minimum spanning trees
//! and shortest paths. Also hosts the ambient pieces shared with the CLI
//! (errors, configuration, output format, logging).

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod heap;
pub mod logging;
pub mod union_find;
