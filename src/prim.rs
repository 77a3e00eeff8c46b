use log::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{GraphView, Weight};
use crate::heap::{HeapNode, IndexedMinHeap, Key, INFINITE_KEY};

/// Prim's algorithm driven by an [`IndexedMinHeap`].
///
/// One value holds all state of a run: the graph view, the key array and the
/// parent array. Calling [`PrimMst::solve`] again resets that state.
pub struct PrimMst<G: GraphView> {
    graph: G,
    keys: Vec<Key>,
    parents: Vec<Option<usize>>,
    source: Option<usize>,
}

impl<G: GraphView> PrimMst<G> {
    /// Wrap a graph. The key and parent arrays are sized by `solve`.
    pub fn new(graph: G) -> Self {
        Self {
            graph,
            keys: Vec::new(),
            parents: Vec::new(),
            source: None,
        }
    }

    /// Grow a minimum spanning tree from `source`.
    ///
    /// Vertices outside the source's component are still extracted, with an
    /// infinite key, but never relax their neighbours, so they keep no parent
    /// and never become anyone's parent.
    pub fn solve(&mut self, source: usize) -> Result<()> {
        let n = self.graph.vertex_count();
        self.keys.clear();
        self.keys.resize(n, INFINITE_KEY);
        self.parents.clear();
        self.parents.resize(n, None);
        self.source = None;

        if n == 0 {
            return Ok(());
        }
        if source >= n {
            return Err(Error::SourceOutOfRange {
                vertex: source,
                vertex_count: n,
            });
        }

        self.keys[source] = 0;
        self.source = Some(source);

        let nodes = self
            .keys
            .iter()
            .enumerate()
            .map(|(vertex, &key)| HeapNode::new(vertex, key))
            .collect();
        let mut heap = IndexedMinHeap::build(n, nodes)?;

        let mut relaxations = 0usize;
        while !heap.is_empty() {
            let HeapNode { vertex: u, key } = heap.extract_min()?;
            if key == INFINITE_KEY {
                continue;
            }

            for (v, weight) in self.graph.neighbors(u) {
                let candidate = Key::from(weight);
                if heap.contains(v) && candidate < self.keys[v] {
                    trace!("relax {} -> {} with weight {}", u, v, weight);
                    self.keys[v] = candidate;
                    self.parents[v] = Some(u);
                    heap.decrease_key(v, candidate);
                    relaxations += 1;
                }
            }
        }

        debug!(
            "prim from {}: {} vertices, {} reached, {} relaxations, total weight {}",
            source,
            n,
            self.reachable_count(),
            relaxations,
            self.total_weight()
        );
        Ok(())
    }

    /// Parent of every vertex; `None` for the source and unreached vertices.
    pub fn get_parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// Source of the last successful run.
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn is_reached(&self, vertex: usize) -> bool {
        self.source == Some(vertex) || self.parents.get(vertex).copied().flatten().is_some()
    }

    /// Weight of the tree edge attaching `vertex` to its parent.
    pub fn tree_weight(&self, vertex: usize) -> Option<Weight> {
        self.parents.get(vertex).copied().flatten()?;
        Weight::try_from(self.keys[vertex]).ok()
    }

    /// Tree edges as `(parent, child, weight)` in increasing child order.
    pub fn tree_edges(&self) -> Vec<(usize, usize, Weight)> {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                let parent = (*parent)?;
                Some((parent, child, self.tree_weight(child)?))
            })
            .collect()
    }

    pub fn total_weight(&self) -> u64 {
        self.tree_edges()
            .iter()
            .map(|&(_, _, w)| u64::from(w))
            .sum()
    }

    /// Number of vertices in the tree, source included.
    pub fn reachable_count(&self) -> usize {
        let attached = self.parents.iter().filter(|p| p.is_some()).count();
        attached + usize::from(self.source.is_some())
    }

    /// Tree path from the source down to `target`.
    pub fn get_path(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = Some(target);

        while let Some(v) = current {
            path.push(v);
            current = self.parents[v];
        }

        path.reverse();
        Some(path)
    }
}

/// Run Prim's algorithm once and return the parent array.
pub fn minimum_spanning_tree<G: GraphView>(graph: G, source: usize) -> Result<Vec<Option<usize>>> {
    let mut prim = PrimMst::new(graph);
    prim.solve(source)?;
    Ok(prim.parents)
}
