use netroute_lib::generator::{max_edges, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE};
use netroute_lib::{generate_graph, load_graph, save_graph, Error, GraphSpec, RandomGraphConfig};
use tempfile::tempdir;

#[test]
fn same_seed_gives_same_graph() {
    let config = RandomGraphConfig::new(12, 30).with_seed(42);
    let first = GraphSpec::from(&generate_graph(&config).expect("valid config"));
    let second = GraphSpec::from(&generate_graph(&config).expect("valid config"));
    assert_eq!(first, second);
}

#[test]
fn generated_graph_has_requested_shape() {
    let graph =
        generate_graph(&RandomGraphConfig::new(15, 40).with_seed(7)).expect("valid config");

    assert_eq!(graph.node_count(), 15);
    assert_eq!(graph.edge_count(), 40);
    for edge in graph.edges() {
        assert_ne!(edge.source, edge.target);
        assert!((DEFAULT_MIN_DISTANCE..=DEFAULT_MAX_DISTANCE).contains(&edge.distance));
    }
}

#[test]
fn custom_distance_range_is_honoured() {
    let config = RandomGraphConfig::new(8, 20)
        .with_seed(1)
        .with_distance_range(5, 6);
    let graph = generate_graph(&config).expect("valid config");
    assert!(graph.edges().iter().all(|edge| (5..=6).contains(&edge.distance)));
}

#[test]
fn too_many_edges_are_rejected() {
    let error =
        generate_graph(&RandomGraphConfig::new(4, max_edges(4) + 1)).expect_err("too many");
    assert!(matches!(error, Error::InvalidGeneratorConfig { .. }));
    assert!(format!("{error}").contains("at most 6"));
}

#[test]
fn classroom_graph_is_generated() {
    let config = RandomGraphConfig::classroom(Some(2024));
    let graph = generate_graph(&config).expect("classroom parameters are valid");
    assert_eq!(graph.node_count(), config.nodes);
    assert_eq!(graph.edge_count(), config.edges);
}

#[test]
fn generated_graph_survives_a_document_round_trip() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("graph.json");
    let graph =
        generate_graph(&RandomGraphConfig::new(10, 18).with_seed(99)).expect("valid config");

    save_graph(&graph, &path).expect("write document");
    let reloaded = load_graph(&path).expect("read document");

    assert_eq!(GraphSpec::from(&reloaded), GraphSpec::from(&graph));
}
