//! Binary min-heap over vertices with a position map for O(log n) decrease-key.
//!
//! Nodes live in a flat `Vec` using the 0-based layout (children of `i` at
//! `2i + 1` and `2i + 2`). A second `Vec` maps each vertex id to the slot
//! currently holding it, or `None` once the vertex has been extracted. Every
//! swap rewrites both affected position entries together with the data.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Priority type used by the heap.
pub type Key = u64;

/// Key of a vertex not yet connected to the tree.
pub const INFINITE_KEY: Key = Key::MAX;

/// A `(vertex, key)` pair stored in the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapNode {
    pub vertex: usize,
    pub key: Key,
}

impl HeapNode {
    pub fn new(vertex: usize, key: Key) -> Self {
        Self { vertex, key }
    }

    /// Strict heap ordering: smaller key first, ties go to the smaller vertex id.
    #[inline]
    fn precedes(&self, other: &HeapNode) -> bool {
        (self.key, self.vertex) < (other.key, other.vertex)
    }
}

/// Indexed min-heap keyed by vertex id.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    nodes: Vec<HeapNode>,
    positions: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Create an empty heap able to hold vertices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Build a heap from an arbitrary array of nodes in O(n).
    ///
    /// Positions are assigned first, then the heap order is restored by
    /// sifting down from the last internal node up to the root. Every vertex
    /// must be below `capacity` and appear at most once.
    pub fn build(capacity: usize, nodes: Vec<HeapNode>) -> Result<Self> {
        let mut positions = vec![None; capacity];
        for (slot, node) in nodes.iter().enumerate() {
            match positions.get_mut(node.vertex) {
                None => {
                    return Err(Error::HeapInvariant(format!(
                        "vertex {} out of range for capacity {}",
                        node.vertex, capacity
                    )))
                }
                Some(Some(_)) => {
                    return Err(Error::HeapInvariant(format!(
                        "vertex {} appears more than once",
                        node.vertex
                    )))
                }
                Some(pos) => *pos = Some(slot),
            }
        }

        let mut heap = Self { nodes, positions };
        for idx in (0..heap.nodes.len() / 2).rev() {
            heap.sift_down(idx);
        }
        Ok(heap)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct vertex ids the position map can track.
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// O(1) membership test. Extracted and out-of-range vertices are absent.
    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        self.slot_of(vertex).is_some()
    }

    /// Current key of `vertex`, if it is still in the heap.
    pub fn key_of(&self, vertex: usize) -> Option<Key> {
        self.slot_of(vertex).map(|slot| self.nodes[slot].key)
    }

    /// The minimum node without removing it.
    pub fn peek(&self) -> Option<HeapNode> {
        self.nodes.first().copied()
    }

    /// Insert a vertex that is not currently in the heap.
    pub fn insert(&mut self, vertex: usize, key: Key) -> Result<()> {
        match self.positions.get(vertex) {
            None => Err(Error::HeapInvariant(format!(
                "vertex {} out of range for capacity {}",
                vertex,
                self.positions.len()
            ))),
            Some(Some(_)) => Err(Error::HeapInvariant(format!(
                "vertex {} is already in the heap",
                vertex
            ))),
            Some(None) => {
                let idx = self.nodes.len();
                self.nodes.push(HeapNode::new(vertex, key));
                self.positions[vertex] = Some(idx);
                self.sift_up(idx);
                Ok(())
            }
        }
    }

    /// Remove and return the node with the smallest key.
    pub fn extract_min(&mut self) -> Result<HeapNode> {
        let last = self.nodes.len().checked_sub(1).ok_or(Error::EmptyHeap)?;
        self.swap_nodes(0, last);

        let min = self.nodes.pop().ok_or(Error::EmptyHeap)?;
        self.positions[min.vertex] = None;

        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Lower the key of `vertex` and move it toward the root.
    ///
    /// Absent vertices and keys that are not strictly smaller are ignored.
    /// Returns whether the key changed.
    pub fn decrease_key(&mut self, vertex: usize, new_key: Key) -> bool {
        let Some(idx) = self.slot_of(vertex) else {
            return false;
        };
        if new_key >= self.nodes[idx].key {
            return false;
        }

        self.nodes[idx].key = new_key;
        self.sift_up(idx);
        true
    }

    /// Verify heap order and that the position map inverts the node array.
    pub fn check_invariants(&self) -> Result<()> {
        for idx in 1..self.nodes.len() {
            let parent = (idx - 1) / 2;
            if self.nodes[idx].precedes(&self.nodes[parent]) {
                return Err(Error::HeapInvariant(format!(
                    "slot {} ({:?}) precedes its parent slot {} ({:?})",
                    idx, self.nodes[idx], parent, self.nodes[parent]
                )));
            }
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            if self.slot_of(node.vertex) != Some(idx) {
                return Err(Error::HeapInvariant(format!(
                    "vertex {} sits in slot {} but the position map says {:?}",
                    node.vertex,
                    idx,
                    self.slot_of(node.vertex)
                )));
            }
        }

        let tracked = self.positions.iter().filter(|pos| pos.is_some()).count();
        if tracked != self.nodes.len() {
            return Err(Error::HeapInvariant(format!(
                "position map tracks {} vertices but the heap holds {}",
                tracked,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    #[inline]
    fn slot_of(&self, vertex: usize) -> Option<usize> {
        self.positions.get(vertex).copied().flatten()
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.nodes[idx].precedes(&self.nodes[parent]) {
                self.swap_nodes(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.nodes[left].precedes(&self.nodes[smallest]) {
                smallest = left;
            }
            if right < len && self.nodes[right].precedes(&self.nodes[smallest]) {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.swap_nodes(idx, smallest);
            idx = smallest;
        }
    }

    /// Swap two slots and update the position map for both vertices.
    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions[self.nodes[a].vertex] = Some(a);
        self.positions[self.nodes[b].vertex] = Some(b);
    }
}
