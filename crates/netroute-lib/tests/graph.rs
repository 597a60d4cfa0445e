mod common;

use std::collections::BTreeSet;

use netroute_lib::{load_graph, EdgeSpec, Error, Graph, InvalidGraph};

use common::{classroom_fixture_path, diamond, fixtures_dir, graph_from};

#[test]
fn out_of_range_edge_rejects_the_whole_graph() {
    let result = Graph::build(
        5,
        [
            EdgeSpec::new(0, 1, 3),
            EdgeSpec::new(1, 99, 2),
            EdgeSpec::new(2, 3, 1),
        ],
    );

    match result {
        Err(Error::InvalidGraph(InvalidGraph::NodeOutOfRange {
            index,
            node,
            node_count,
            ..
        })) => {
            assert_eq!(index, 1);
            assert_eq!(node, 99);
            assert_eq!(node_count, 5);
        }
        other => panic!("expected out-of-range rejection, got {other:?}"),
    }
}

#[test]
fn zero_distance_is_rejected() {
    let error = Graph::build(2, [EdgeSpec::new(0, 1, 0)]).expect_err("zero distance");
    assert!(format!("{error}").contains("non-positive distance 0"));
}

#[test]
fn duplicate_edge_is_rejected_in_either_direction() {
    for second in [EdgeSpec::new(0, 1, 4), EdgeSpec::new(1, 0, 7)] {
        let error = Graph::build(2, [EdgeSpec::new(0, 1, 4), second]).expect_err("duplicate");
        assert!(matches!(
            error,
            Error::InvalidGraph(InvalidGraph::DuplicateEdge { .. })
        ));
    }
}

#[test]
fn queries_expose_the_constructed_graph() {
    let graph = diamond();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.nodes().collect::<BTreeSet<_>>(), BTreeSet::from([0, 1, 2, 3]));

    let mut around_two: Vec<_> = graph
        .neighbours(2)
        .iter()
        .map(|edge| (edge.target, edge.distance))
        .collect();
    around_two.sort_unstable();
    assert_eq!(around_two, vec![(0, 10), (1, 3), (3, 1)]);
}

#[test]
fn graph_without_edges_has_isolated_nodes() {
    let graph = graph_from(3, &[]);
    for node in graph.nodes() {
        assert!(graph.neighbours(node).is_empty());
    }
}

#[test]
fn clones_share_adjacency_across_threads() {
    let graph = diamond();
    let handles: Vec<_> = (0..4)
        .map(|node| {
            let graph = graph.clone();
            std::thread::spawn(move || graph.neighbours(node).len())
        })
        .collect();

    let degrees: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();
    assert_eq!(degrees, vec![2, 2, 3, 1]);
}

#[test]
fn fixture_document_loads() {
    let graph = load_graph(&classroom_fixture_path()).expect("fixture loads");
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_distance(3, 4), Some(12));
}

#[test]
fn invalid_fixture_document_is_rejected() {
    let error = load_graph(&fixtures_dir().join("invalid_graph.json")).expect_err("invalid");
    assert!(format!("{error}").contains("references node 99 outside [0, 5)"));
}

#[test]
fn missing_document_is_an_io_error() {
    let error = load_graph(&fixtures_dir().join("does_not_exist.json")).expect_err("missing");
    assert!(matches!(error, Error::Io(_)));
}
