use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Integer type used for edge weights and path distances
pub type Weight = i64;

/// Weight carried by edges of unweighted graphs
pub const UNWEIGHTED: Weight = 0;

/// Weight given to weighted-graph edges added without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 5;

/// Values usable as graph vertices.
///
/// The engine only relies on equality, ordering and hashing; `Debug` is used
/// for log fields and error messages.
pub trait Vertex: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> Vertex for T {}

/// Whether edges are one-way or mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    #[default]
    Directed,
    Undirected,
}

impl std::str::FromStr for EdgeType {
    type Err = crate::error::GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(EdgeType::Directed),
            "undirected" => Ok(EdgeType::Undirected),
            other => Err(crate::error::GraphError::unsupported(
                "edge type",
                other,
                "directed, undirected",
            )),
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeType::Directed => write!(f, "directed"),
            EdgeType::Undirected => write!(f, "undirected"),
        }
    }
}

/// Whether a graph description carries weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeWeight {
    #[default]
    Unweighted,
    Weighted,
}

/// A directed `(from, to)` pair with an integer weight.
///
/// Undirected graphs store one `Edge` per direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    from: T,
    to: T,
    weight: Weight,
}

impl<T> Edge<T> {
    pub fn new(from: T, to: T, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    /// Edge of an unweighted graph
    pub fn unweighted(from: T, to: T) -> Self {
        Edge::new(from, to, UNWEIGHTED)
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Compare two edges by weight only
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

impl<T: Clone> Edge<T> {
    /// The same edge pointing the other way
    pub fn flipped(&self) -> Self {
        Edge::new(self.to.clone(), self.from.clone(), self.weight)
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} -> {} ]({})", self.from, self.to, self.weight)
    }
}

/// Best known distance or edge weight during relaxation.
///
/// `Infinite` orders after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    Finite(Weight),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn finite(self) -> Option<Weight> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Extend a path by one edge; infinity absorbs
    pub fn plus(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Weight> for Distance {
    fn from(weight: Weight) -> Self {
        Distance::Finite(weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_equality_uses_all_fields() {
        assert_eq!(Edge::new("A", "B", 3), Edge::new("A", "B", 3));
        assert_ne!(Edge::new("A", "B", 3), Edge::new("A", "B", 4));
        assert_ne!(Edge::new("A", "B", 3), Edge::new("B", "A", 3));
    }

    #[test]
    fn test_edge_cmp_weight_ignores_endpoints() {
        let light = Edge::new("X", "Y", 1);
        let heavy = Edge::new("A", "B", 7);
        assert_eq!(light.cmp_weight(&heavy), Ordering::Less);
        assert_eq!(
            Edge::new("A", "B", 2).cmp_weight(&Edge::new("C", "D", 2)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new("A", "B", 5).to_string(), "[ A -> B ](5)");
        assert_eq!(Edge::unweighted(1, 2).to_string(), "[ 1 -> 2 ](0)");
    }

    #[test]
    fn test_edge_flipped() {
        let edge = Edge::new("A", "B", 4).flipped();
        assert_eq!(edge.from(), &"B");
        assert_eq!(edge.to(), &"A");
        assert_eq!(edge.weight(), 4);
    }

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(Weight::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-3) < Distance::ZERO);
        assert_eq!(Distance::default(), Distance::Infinite);
    }

    #[test]
    fn test_distance_plus() {
        assert_eq!(Distance::Finite(2).plus(3), Distance::Finite(5));
        assert_eq!(Distance::Infinite.plus(3), Distance::Infinite);
        assert_eq!(Distance::Finite(Weight::MAX).plus(1), Distance::Finite(Weight::MAX));
    }

    #[test]
    fn test_edge_type_from_str() {
        assert_eq!("Undirected".parse::<EdgeType>().unwrap(), EdgeType::Undirected);
        assert!("sideways".parse::<EdgeType>().is_err());
    }
}
