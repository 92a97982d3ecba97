//! Binary min-heap with an item-to-slot index.
//!
//! The index lets Prim and Dijkstra check membership and re-key a vertex in
//! place instead of removing and re-inserting it. Entries are ordered by
//! `(key, item)`, so equal keys pop in ascending item order.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, K> {
    slots: Vec<(K, T)>,
    positions: HashMap<T, usize>,
}

impl<T, K> IndexedMinHeap<T, K>
where
    T: Clone + Ord + Hash,
    K: Copy + Ord,
{
    pub fn new() -> Self {
        IndexedMinHeap {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            slots: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    pub fn key_of(&self, item: &T) -> Option<K> {
        self.positions.get(item).map(|&slot| self.slots[slot].0)
    }

    /// Insert `item`; returns `false` and leaves the heap unchanged if present
    pub fn push(&mut self, item: T, key: K) -> bool {
        if self.positions.contains_key(&item) {
            return false;
        }
        let slot = self.slots.len();
        self.positions.insert(item.clone(), slot);
        self.slots.push((key, item));
        self.sift_up(slot);
        true
    }

    pub fn peek(&self) -> Option<(&T, K)> {
        self.slots.first().map(|(key, item)| (item, *key))
    }

    /// Remove and return the entry with the smallest key
    pub fn pop(&mut self) -> Option<(T, K)> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.swap(0, last);
        let (key, item) = self.slots.pop()?;
        self.positions.remove(&item);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some((item, key))
    }

    /// Give `item` a new key and restore heap order.
    ///
    /// Returns `false` if the item is not in the heap.
    pub fn change_key(&mut self, item: &T, key: K) -> bool {
        let Some(&slot) = self.positions.get(item) else {
            return false;
        };
        let old = self.slots[slot].0;
        self.slots[slot].0 = key;
        if key < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        true
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (key_a, item_a) = &self.slots[a];
        let (key_b, item_b) = &self.slots[b];
        (key_a, item_a) < (key_b, item_b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.slots.swap(a, b);
        for slot in [a, b] {
            if let Some(position) = self.positions.get_mut(&self.slots[slot].1) {
                *position = slot;
            }
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<T, K> Default for IndexedMinHeap<T, K>
where
    T: Clone + Ord + Hash,
    K: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
