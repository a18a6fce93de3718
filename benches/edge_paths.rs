//! Benchmarks for edge path geometry
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use egui::Pos2;

use flowcanvas::graph::{CubicPath, GraphModel, Node, NodeKind, Port, PortKind, PortRef};

/// Wire up a left-to-right chain of `count` nodes.
fn chain_graph(count: usize) -> GraphModel {
    let mut graph = GraphModel::new();
    let ids: Vec<_> = (0..count)
        .map(|i| {
            graph.add_node(
                Node::new(
                    NodeKind::Process,
                    format!("Stage {}", i),
                    Pos2::new(100.0 + 250.0 * i as f32, 150.0),
                )
                .with_inputs(vec![Port::new("in", PortKind::Data)])
                .with_outputs(vec![Port::new("out", PortKind::Data)]),
            )
        })
        .collect();
    for pair in ids.windows(2) {
        graph
            .add_edge(PortRef::new(pair[0], 0), PortRef::new(pair[1], 0))
            .expect("chain edges are in range");
    }
    graph
}

fn bench_recompute_edge_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_edge_paths");
    for size in [10, 100, 1000].iter() {
        let mut graph = chain_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                graph.recompute_edge_paths();
                black_box(graph.edges().len())
            });
        });
    }
    group.finish();
}

fn bench_bezier_sampling(c: &mut Criterion) {
    let path = CubicPath::between(Pos2::new(240.0, 175.0), Pos2::new(350.0, 175.0));
    let mut group = c.benchmark_group("bezier_sampling");
    for segments in [8usize, 24, 64].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            segments,
            |b, &segments| {
                b.iter(|| black_box(path.points(segments)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_recompute_edge_paths, bench_bezier_sampling);
criterion_main!(benches);
