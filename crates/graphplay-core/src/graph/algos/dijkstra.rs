use crate::error::Result;
use crate::graph::algos::shared::require_vertex;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Distance, EdgeType, Vertex, Weight};
use crate::graph::weighted::WeightedGraph;
use crate::heap::IndexedMinHeap;
use crate::trace_time;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

/// State tracked during a Dijkstra run
struct DijkstraState<T> {
    distances: HashMap<T, Distance>,
    /// vertex -> (predecessor, weight of the relaxing edge)
    parents: HashMap<T, (T, Weight)>,
    scanned: HashSet<T>,
    queue: IndexedMinHeap<T, Distance>,
}

impl<T: Vertex> DijkstraState<T> {
    fn new(graph: &WeightedGraph<T>, source: &T) -> Self {
        let capacity = graph.num_vertices();
        let mut state = DijkstraState {
            distances: HashMap::with_capacity(capacity),
            parents: HashMap::with_capacity(capacity),
            scanned: HashSet::with_capacity(capacity),
            queue: IndexedMinHeap::with_capacity(capacity),
        };

        for vertex in graph.vertices() {
            let distance = if vertex == source {
                Distance::ZERO
            } else {
                Distance::Infinite
            };
            state.distances.insert(vertex.clone(), distance);
            state.queue.push(vertex.clone(), distance);
        }
        state
    }

    fn relax(&mut self, graph: &WeightedGraph<T>, vertex: &T, base: Distance) {
        for edge in graph.edges(vertex) {
            let to = edge.to();
            if self.scanned.contains(to) {
                continue;
            }

            let candidate = base.plus(edge.weight());
            let current = self.distances.get(to).copied().unwrap_or_default();
            if candidate < current {
                self.distances.insert(to.clone(), candidate);
                self.parents
                    .insert(to.clone(), (vertex.clone(), edge.weight()));
                self.queue.change_key(to, candidate);
            }
        }
    }

    fn run(mut self, graph: &WeightedGraph<T>) -> Self {
        while let Some((vertex, distance)) = self.queue.pop() {
            if !distance.is_finite() {
                // Everything left is unreachable
                tracing::trace!(unreachable = self.queue.len() + 1, "dijkstra stopping early");
                break;
            }
            self.scanned.insert(vertex.clone());
            self.relax(graph, &vertex, distance);
        }
        self
    }
}

/// Tree and distances produced by one Dijkstra run
#[derive(Debug, Clone)]
pub struct ShortestPaths<T: Vertex> {
    /// Directed tree with one `parent -> vertex` edge per reached vertex
    pub tree: WeightedGraph<T>,
    /// Final distance of every vertex reachable from the source
    pub distances: BTreeMap<T, Weight>,
}

/// Shortest path tree and distances from `source` in a single pass.
///
/// Edge weights must be non-negative. The tree holds every input vertex and,
/// for each vertex reached from `source` other than `source` itself, one edge
/// `parent -> vertex` carrying the weight of the edge that set its final
/// distance. Undirected input works the same way since both directions are
/// stored.
#[tracing::instrument(skip(graph, source), fields(source = ?source, vertices = graph.num_vertices()))]
pub fn shortest_paths<T: Vertex>(graph: &WeightedGraph<T>, source: &T) -> Result<ShortestPaths<T>> {
    require_vertex(graph, source)?;
    let start = Instant::now();

    let DijkstraState {
        distances,
        mut parents,
        scanned,
        ..
    } = DijkstraState::new(graph, source).run(graph);

    let mut tree = WeightedGraph::with_vertices(graph.vertices().cloned(), EdgeType::Directed)
        .with_default_weight(graph.default_weight());
    for vertex in graph.vertices() {
        if let Some((parent, weight)) = parents.remove(vertex) {
            tree.link(parent, vertex.clone(), weight);
        }
    }

    let distances: BTreeMap<T, Weight> = distances
        .into_iter()
        .filter_map(|(vertex, distance)| distance.finite().map(|d| (vertex, d)))
        .collect();

    tracing::debug!(
        reached = scanned.len(),
        edges = tree.num_edges(),
        "shortest_paths"
    );
    trace_time!(start, "shortest_paths");
    Ok(ShortestPaths { tree, distances })
}

/// Single-source shortest path tree, see [`shortest_paths`]
pub fn dijkstras<T: Vertex>(graph: &WeightedGraph<T>, source: &T) -> Result<WeightedGraph<T>> {
    Ok(shortest_paths(graph, source)?.tree)
}

/// Final distance of every vertex reachable from `source`
pub fn shortest_distances<T: Vertex>(
    graph: &WeightedGraph<T>,
    source: &T,
) -> Result<BTreeMap<T, Weight>> {
    Ok(shortest_paths(graph, source)?.distances)
}
