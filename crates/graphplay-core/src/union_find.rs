//! Disjoint set (union-find) over arbitrary vertex values.
//!
//! Each element maps to its parent; `None` marks the root of a set. `find`
//! compresses the visited path onto the root. `join` always hangs the second
//! argument's root under the first argument's root; there is no rank or size
//! heuristic, so an adversarial join order can build long chains until the
//! next `find` flattens them.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::Vertex;

#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parents: HashMap<T, Option<T>>,
}

impl<T: Vertex> UnionFind<T> {
    pub fn new() -> Self {
        UnionFind {
            parents: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        UnionFind {
            parents: HashMap::with_capacity(capacity),
        }
    }

    /// Register `element` as a singleton set; no-op if already known
    pub fn add(&mut self, element: T) {
        self.parents.entry(element).or_insert(None);
    }

    pub fn contains(&self, element: &T) -> bool {
        self.parents.contains_key(element)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Representative of the set containing `element`, with path compression
    pub fn find(&mut self, element: &T) -> Result<T> {
        let mut path = Vec::new();
        let mut current = element.clone();
        loop {
            match self.parents.get(&current) {
                None => return Err(GraphError::unknown_element(element)),
                Some(None) => break,
                Some(Some(parent)) => {
                    let parent = parent.clone();
                    path.push(std::mem::replace(&mut current, parent));
                }
            }
        }

        for visited in path {
            self.parents.insert(visited, Some(current.clone()));
        }
        Ok(current)
    }

    /// Merge the sets of `x` and `y`.
    ///
    /// Returns `false` (and changes nothing) if they were already joined.
    pub fn join(&mut self, x: &T, y: &T) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        self.parents.insert(root_y, Some(root_x));
        Ok(true)
    }

    /// Whether `x` and `y` currently share a set
    pub fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}

impl<T: Vertex> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut union = UnionFind::new();
        union.add("A");
        assert_eq!(union.find(&"A").unwrap(), "A");

        union.add("B");
        assert!(union.join(&"A", &"B").unwrap());
        assert_eq!(union.find(&"A").unwrap(), union.find(&"B").unwrap());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut union = UnionFind::new();
        union.add(1);
        union.add(2);
        union.join(&1, &2).unwrap();
        union.add(2);
        assert_eq!(union.len(), 2);
        assert!(union.connected(&1, &2).unwrap());
    }

    #[test]
    fn test_join_twice_returns_false() {
        let mut union = UnionFind::new();
        for x in 0..3 {
            union.add(x);
        }
        assert!(union.join(&0, &1).unwrap());
        assert!(union.join(&1, &2).unwrap());
        assert!(!union.join(&0, &2).unwrap());
        assert!(!union.join(&2, &2).unwrap());
    }

    #[test]
    fn test_second_root_goes_under_first() {
        let mut union = UnionFind::new();
        union.add("x");
        union.add("y");
        union.join(&"x", &"y").unwrap();
        assert_eq!(union.find(&"y").unwrap(), "x");
    }

    #[test]
    fn test_find_compresses_path() {
        let mut union = UnionFind::new();
        for x in 0..5 {
            union.add(x);
        }
        // 0 <- 1 <- 2 <- 3 <- 4, each join hangs the new root under the previous one
        for x in (0..4).rev() {
            union.join(&x, &(x + 1)).unwrap();
        }
        assert_eq!(union.find(&4).unwrap(), 0);
        for x in 1..5 {
            assert_eq!(union.parents.get(&x), Some(&Some(0)));
        }
    }

    #[test]
    fn test_unknown_element() {
        let mut union: UnionFind<&str> = UnionFind::new();
        assert!(matches!(
            union.find(&"ghost"),
            Err(GraphError::UnknownElement { .. })
        ));
        union.add("real");
        assert!(union.join(&"real", &"ghost").is_err());
    }
}
