//! Minimum spanning trees with Prim's algorithm over an indexed binary heap.
//!
//! The heap ([`IndexedMinHeap`]) keeps a position map next to its node array
//! so that decrease-key runs in O(log n). [`PrimMst`] drives it over any
//! [`GraphView`] and produces, for every vertex, its parent in the tree
//! grown from a chosen source.
//!
//! ```rust
//! use prim_mst::{Graph, PrimMst};
//!
//! let mut graph = Graph::new(4);
//! graph.add_undirected_edge(0, 1, 1);
//! graph.add_undirected_edge(1, 2, 2);
//! graph.add_undirected_edge(0, 3, 4);
//!
//! let mut prim = PrimMst::new(&graph);
//! prim.solve(0).unwrap();
//! assert_eq!(prim.get_parents(), &[None, Some(0), Some(1), Some(0)]);
//! ```

pub mod error;
pub mod graph;
pub mod heap;
pub mod io;
pub mod prim;
pub mod reference;

use std::path::Path;

use log::info;

pub use error::{Error, Result};
pub use graph::{AdjacencyMatrix, Edge, Graph, GraphView, Weight, WeightedEdge};
pub use heap::{HeapNode, IndexedMinHeap, Key, INFINITE_KEY};
pub use io::{format_parents, parse_graph, read_graph, write_parents, write_parents_to_path, GraphInput};
pub use prim::{minimum_spanning_tree, PrimMst};

/// Read `input`, compute the tree from the source named in its header, and
/// write the parent array to `output`.
///
/// Nothing is written when reading or parsing fails.
pub fn run_files(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let graph_input = read_graph(input)?;
    let graph = graph_input.try_to_graph()?;

    let mut prim = PrimMst::new(&graph);
    prim.solve(graph_input.source)?;

    write_parents_to_path(output, prim.get_parents())?;
    info!(
        "wrote {} parents to {} ({} reached, total weight {})",
        graph.n,
        output.display(),
        prim.reachable_count(),
        prim.total_weight()
    );
    Ok(())
}

// Random graph generation for tests and benchmarks
pub mod examples {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// `m` random edges with weights in `1..=max_weight`. Self-loops and
    /// parallel edges may appear.
    pub fn create_random_graph(n: usize, m: usize, max_weight: Weight, seed: u64) -> GraphInput {
        let mut rng = StdRng::seed_from_u64(seed);
        let max_weight = max_weight.max(1);

        let edges = if n == 0 {
            Vec::new()
        } else {
            (0..m)
                .map(|_| {
                    WeightedEdge::new(
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(1..=max_weight),
                    )
                })
                .collect()
        };

        GraphInput {
            vertex_count: n,
            source: 0,
            edges,
        }
    }

    /// A random spanning backbone (vertex `i` joins a random earlier vertex)
    /// plus `extra_edges` random edges, so every vertex is reachable from 0.
    pub fn create_connected_graph(
        n: usize,
        extra_edges: usize,
        max_weight: Weight,
        seed: u64,
    ) -> GraphInput {
        let mut input = create_random_graph(n, extra_edges, max_weight, seed);
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let max_weight = max_weight.max(1);

        for i in 1..n {
            let j = rng.random_range(0..i);
            input
                .edges
                .push(WeightedEdge::new(j, i, rng.random_range(1..=max_weight)));
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_random_connected_graph_matches_kruskal() {
        log_init_test();
        for seed in 0..20 {
            let input = examples::create_connected_graph(60, 150, 50, seed);
            let graph = input.to_graph();
            let mut prim = PrimMst::new(&graph);
            prim.solve(input.source).unwrap();

            assert_eq!(prim.reachable_count(), 60);
            assert_eq!(
                prim.total_weight(),
                reference::kruskal_weight(60, &input.edges, input.source),
                "weight mismatch for seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = examples::create_random_graph(30, 80, 9, 7);
        let b = examples::create_random_graph(30, 80, 9, 7);
        assert_eq!(a, b);
        assert_eq!(a.edges.len(), 80);
        assert!(a.edges.iter().all(|e| e.u < 30 && e.v < 30 && (1..=9).contains(&e.weight)));
    }

    #[test]
    fn test_round_trip_through_text() {
        log_init_test();
        let text = "4 3 0\n0 1 1\n1 2 2\n0 3 4\n";
        let input = parse_graph(text).unwrap();
        let parents = minimum_spanning_tree(input.to_graph(), input.source).unwrap();
        assert_eq!(format_parents(&parents), "0\tNIL\n1\t0\n2\t1\n3\t0\n");
    }
}
