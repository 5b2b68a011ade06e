use classic_algos::{shortest_paths, Graph};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: usize, avg_degree: usize) -> Graph {
    let mut g = Graph::new(n);
    for _ in 0..n * avg_degree {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let w = rng.gen_range(0..1_000);
        g.add_edge(u, v, w).expect("generated edges are valid");
    }
    g
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random_graph");
    for &n in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_graph(&mut rng, n, 8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| {
                let sp = shortest_paths(g, 0).expect("source in range");
                criterion::black_box(sp.dist.len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
