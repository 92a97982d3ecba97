use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn graphplay() -> Command {
    cargo_bin_cmd!("graphplay")
}

/// Undirected weighted graph A..G with a unique MST weight of 9
pub const MST_GRAPH: &str = r#"{
    "edge_type": "undirected",
    "edge_weight": "weighted",
    "vertices": ["A", "B", "C", "D", "E", "F", "G"],
    "edges": [
        { "from": "A", "to": "B", "weight": 1 },
        { "from": "A", "to": "F", "weight": 3 },
        { "from": "A", "to": "G", "weight": 2 },
        { "from": "B", "to": "C", "weight": 2 },
        { "from": "B", "to": "F", "weight": 1 },
        { "from": "C", "to": "D", "weight": 6 },
        { "from": "D", "to": "E", "weight": 3 },
        { "from": "D", "to": "F", "weight": 3 },
        { "from": "E", "to": "F", "weight": 4 },
        { "from": "E", "to": "G", "weight": 1 },
        { "from": "F", "to": "G", "weight": 1 }
    ]
}"#;

/// Directed graph with cycles A->B->E->A and C->G->D->C
pub const SCC_GRAPH: &str = r#"{
    "edge_type": "directed",
    "vertices": ["A", "B", "C", "D", "E", "F", "G"],
    "edges": [
        { "from": "A", "to": "B" },
        { "from": "B", "to": "C" },
        { "from": "B", "to": "E" },
        { "from": "B", "to": "F" },
        { "from": "C", "to": "G" },
        { "from": "D", "to": "C" },
        { "from": "E", "to": "A" },
        { "from": "F", "to": "G" },
        { "from": "G", "to": "D" }
    ]
}"#;

/// Small directed acyclic graph
pub const DAG_GRAPH: &str = r#"{
    "edge_type": "directed",
    "vertices": ["wake", "coffee", "shower", "dress", "leave"],
    "edges": [
        { "from": "wake", "to": "coffee" },
        { "from": "wake", "to": "shower" },
        { "from": "shower", "to": "dress" },
        { "from": "coffee", "to": "leave" },
        { "from": "dress", "to": "leave" }
    ]
}"#;

pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[allow(dead_code)]
pub fn write_config(dir: &Path, default_weight: i64, format: &str) -> PathBuf {
    let mut table = toml::Table::new();
    table.insert("default_weight".to_string(), toml::Value::Integer(default_weight));
    table.insert("format".to_string(), toml::Value::String(format.to_string()));

    let path = dir.join("graphplay.toml");
    fs::write(&path, toml::to_string(&table).unwrap()).unwrap();
    path
}

#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}
