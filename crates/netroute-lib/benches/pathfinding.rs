use criterion::{criterion_group, criterion_main, Criterion};
use netroute_lib::{
    assemble, generate_graph, is_reachable, plan_route, shortest_paths, Graph, RandomGraphConfig,
    RouteRequest,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

static GRAPH: Lazy<Graph> = Lazy::new(|| {
    generate_graph(&RandomGraphConfig::new(300, 2_400).with_seed(0x5eed)).expect("valid config")
});
static REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new(0, 299, 8));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;
    let request = &*REQUEST;

    c.bench_function("bfs_reachability_300", |b| {
        b.iter(|| {
            let reachable = is_reachable(graph, request.source, request.target, request.max_distance)
                .expect("nodes exist");
            black_box(reachable)
        });
    });

    c.bench_function("dijkstra_tables_300", |b| {
        b.iter(|| {
            let run = shortest_paths(graph, request.source, request.max_distance)
                .expect("source exists");
            black_box(run.distance(request.target))
        });
    });

    c.bench_function("assemble_all_paths_300", |b| {
        b.iter(|| {
            let result = assemble(graph, request.source, request.max_distance)
                .expect("source exists");
            black_box(result.reachable_count())
        });
    });

    c.bench_function("plan_route_300", |b| {
        b.iter(|| {
            let plan = plan_route(graph, request).expect("nodes exist");
            black_box(plan.hop_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
