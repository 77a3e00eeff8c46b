//! Kruskal's algorithm, used to cross-check the heap-driven Prim results.

use crate::graph::WeightedEdge;

#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression.
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`. Returns false if already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        // Union by size.
        let (big, small) = if self.size[ra] < self.size[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}

/// Minimum spanning forest over all components.
pub fn kruskal(n: usize, edges: &[WeightedEdge]) -> Vec<WeightedEdge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut uf = UnionFind::new(n);
    let mut forest = Vec::with_capacity(n.saturating_sub(1));
    for edge in sorted {
        if uf.union(edge.u, edge.v) {
            forest.push(edge);
            if forest.len() + 1 == n {
                break;
            }
        }
    }
    forest
}

/// MST weight of the component containing `source`.
pub fn kruskal_weight(n: usize, edges: &[WeightedEdge], source: usize) -> u64 {
    let forest = kruskal(n, edges);
    let mut uf = UnionFind::new(n);
    for edge in &forest {
        uf.union(edge.u, edge.v);
    }
    let root = uf.find(source);
    forest
        .iter()
        .filter(|e| uf.find(e.u) == root)
        .map(|e| u64::from(e.weight))
        .sum()
}
