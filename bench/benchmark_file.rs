use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prim_mst::examples::create_connected_graph;
use prim_mst::reference::kruskal;
use prim_mst::{IndexedMinHeap, PrimMst};
use std::hint::black_box;

fn benchmark_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("MST Algorithms");

    // Sparse to fairly dense
    let sizes = vec![
        (100, 300),
        (1000, 3000),
        (1000, 50_000),
        (10_000, 40_000),
    ];

    for (n, m) in sizes {
        let input = create_connected_graph(n, m, 100, 42);
        let graph = input.to_graph();

        group.bench_with_input(
            BenchmarkId::new("Prim", format!("n={}_m={}", n, m)),
            &graph,
            |b, graph| {
                b.iter(|| {
                    let mut prim = PrimMst::new(graph);
                    prim.solve(0).unwrap();
                    black_box(prim.get_parents().len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Kruskal", format!("n={}_m={}", n, m)),
            &input,
            |b, input| b.iter(|| black_box(kruskal(input.vertex_count, &input.edges).len())),
        );
    }

    group.finish();
}

fn benchmark_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("IndexedMinHeap");

    for n in [1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("insert_extract", n), &n, |b, &n| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::new(n);
                for v in 0..n {
                    heap.insert(v, ((v * 7919) % n) as u64).unwrap();
                }
                for v in (0..n).step_by(3) {
                    heap.decrease_key(v, 0);
                }
                let mut last = 0;
                while let Ok(node) = heap.extract_min() {
                    last = node.vertex;
                }
                black_box(last)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_mst, benchmark_heap);
criterion_main!(benches);
