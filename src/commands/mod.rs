//! CLI commands for graphplay

pub mod dijkstra;
pub mod dispatch;
pub mod load;
pub mod output;
pub mod scc;
pub mod show;
pub mod spanning;
pub mod topo;
pub mod traverse;
