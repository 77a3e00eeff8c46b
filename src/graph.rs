use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Edge weight as read from input files.
pub type Weight = u32;

/// Adjacency access needed by Prim's algorithm.
///
/// Every undirected edge must show up in both endpoints' neighbour lists.
pub trait GraphView {
    fn vertex_count(&self) -> usize;

    /// `(neighbour, weight)` pairs leaving `vertex`.
    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        (**self).neighbors(vertex)
    }
}

/// Undirected input edge `u -- v` with a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Self { u, v, weight }
    }
}

/// Directed adjacency entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub to: usize,
    pub weight: Weight,
}

/// Graph representation using adjacency lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    pub n: usize,
    pub adj: Vec<SmallVec<[Edge; 4]>>, // Most vertices have few neighbours
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adj: vec![SmallVec::new(); n],
        }
    }

    /// Like [`Graph::new`], but reports a failed allocation of the
    /// adjacency array instead of aborting.
    pub fn try_new(n: usize) -> Result<Self, TryReserveError> {
        let mut adj = Vec::new();
        adj.try_reserve_exact(n)?;
        adj.resize(n, SmallVec::new());
        Ok(Self { n, adj })
    }

    /// Build an undirected graph; each edge becomes two adjacency entries.
    pub fn from_edges(n: usize, edges: &[WeightedEdge]) -> Self {
        let mut graph = Self::new(n);
        for edge in edges {
            graph.add_undirected_edge(edge.u, edge.v, edge.weight);
        }
        graph
    }

    /// Add a single directed entry `from -> to`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) {
        self.adj[from].push(Edge { to, weight });
    }

    /// Add `u -> v` and `v -> u`. Self-loops and parallel edges are kept.
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: Weight) {
        self.add_edge(u, v, weight);
        self.add_edge(v, u, weight);
    }

    /// Number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|adj_list| adj_list.len()).sum()
    }
}

impl GraphView for Graph {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adj[vertex].iter().map(|edge| (edge.to, edge.weight))
    }
}

/// Dense `n x n` weight matrix.
///
/// A zero entry means "no edge", so zero-weight edges cannot be stored here.
/// A later edge between the same pair overwrites an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            weights: vec![0; n * n],
        }
    }

    pub fn from_edges(n: usize, edges: &[WeightedEdge]) -> Self {
        let mut matrix = Self::new(n);
        for edge in edges {
            matrix.set(edge.u, edge.v, edge.weight);
        }
        matrix
    }

    /// Store `weight` for both `(u, v)` and `(v, u)`.
    pub fn set(&mut self, u: usize, v: usize, weight: Weight) {
        self.weights[u * self.n + v] = weight;
        self.weights[v * self.n + u] = weight;
    }

    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        match self.weights[u * self.n + v] {
            0 => None,
            w => Some(w),
        }
    }
}

impl GraphView for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        let row = &self.weights[vertex * self.n..(vertex + 1) * self.n];
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0)
            .map(|(to, &w)| (to, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let graph = Graph::from_edges(3, &[WeightedEdge::new(0, 1, 4), WeightedEdge::new(1, 2, 6)]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 4), (2, 6)]);
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![(1, 6)]);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_are_kept() {
        let mut graph = Graph::new(2);
        graph.add_undirected_edge(0, 1, 3);
        graph.add_undirected_edge(0, 1, 1);
        graph.add_undirected_edge(1, 1, 2);
        assert_eq!(graph.neighbors(0).count(), 2);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![(0, 3), (0, 1), (1, 2), (1, 2)]);
    }

    #[test]
    fn test_try_new() {
        let graph = Graph::try_new(3).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert!(Graph::try_new(usize::MAX / 2).is_err());
    }

    #[test]
    fn test_matrix_skips_missing_edges() {
        let matrix = AdjacencyMatrix::from_edges(
            4,
            &[WeightedEdge::new(0, 3, 7), WeightedEdge::new(2, 0, 1)],
        );
        assert_eq!(matrix.vertex_count(), 4);
        assert_eq!(matrix.neighbors(0).collect::<Vec<_>>(), vec![(2, 1), (3, 7)]);
        assert_eq!(matrix.weight(3, 0), Some(7));
        assert_eq!(matrix.weight(1, 2), None);
        assert_eq!(matrix.neighbors(1).count(), 0);
    }

    #[test]
    fn test_borrowed_view_delegates() {
        let graph = Graph::from_edges(2, &[WeightedEdge::new(0, 1, 9)]);
        let view = &graph;
        assert_eq!(GraphView::vertex_count(&view), 2);
        assert_eq!(GraphView::neighbors(&view, 0).collect::<Vec<_>>(), vec![(1, 9)]);
    }
}
