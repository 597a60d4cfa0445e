mod common;

use netroute_lib::{
    assemble, plan_route, render_dot, render_run, Error, RouteRenderMode, RouteRequest,
    RouteSummary,
};

use common::{diamond, graph_from};

fn diamond_summary(limit: u64) -> RouteSummary {
    let graph = diamond();
    let plan = plan_route(&graph, &RouteRequest::new(0, 3, limit)).expect("valid nodes");
    RouteSummary::from_plan(&graph, &plan).expect("plan matches graph")
}

#[test]
fn summary_tracks_hop_and_cumulative_distances() {
    let summary = diamond_summary(5);

    assert_eq!(summary.hops, 3);
    assert_eq!(summary.total_distance, Some(8));
    let hops: Vec<_> = summary
        .steps
        .iter()
        .map(|step| (step.node, step.hop_distance, step.cumulative))
        .collect();
    assert_eq!(
        hops,
        vec![(0, None, 0), (1, Some(4), 4), (2, Some(3), 7), (3, Some(1), 8)]
    );
}

#[test]
fn plain_text_lists_each_step() {
    let text = diamond_summary(5).render(RouteRenderMode::PlainText);

    assert!(text.starts_with("Route: 0 -> 3 (3 hops, max edge distance: 5)"));
    assert!(text.contains("  2: 2 (+3, total 7)"));
    assert!(text.contains("Total distance: 8"));
}

#[test]
fn unreachable_summary_renders_as_no_route() {
    let summary = diamond_summary(2);
    assert!(!summary.reachable);
    assert!(summary.steps.is_empty());

    assert_eq!(
        summary.render(RouteRenderMode::PlainText),
        "No route: 0 -> 3 using edges of at most 2\n"
    );
    assert!(summary
        .render(RouteRenderMode::RichText)
        .starts_with("**No route**"));
}

#[test]
fn summary_rejects_plan_from_another_graph() {
    let plan = plan_route(&diamond(), &RouteRequest::new(0, 3, 5)).expect("valid nodes");
    let other = graph_from(4, &[(0, 1, 4), (1, 2, 3)]);

    let error = RouteSummary::from_plan(&other, &plan).expect_err("hop 2-3 missing");
    assert!(matches!(error, Error::HopNotInGraph { from: 2, to: 3, .. }));
}

#[test]
fn summary_serialises_for_renderers() {
    let json = serde_json::to_value(diamond_summary(5)).expect("serialise");
    assert_eq!(json["total_distance"], 8);
    assert_eq!(json["steps"][0].get("hop_distance"), None);
    assert_eq!(json["steps"][3]["hop_distance"], 1);
}

#[test]
fn run_table_marks_unreachable_nodes() {
    let graph = graph_from(3, &[(0, 1, 2), (1, 2, 9)]);
    let table = render_run(&assemble(&graph, 0, 5).expect("source exists"));

    assert!(table.contains("0 -> 1"));
    assert!(table.contains("unreachable"));
}

#[test]
fn dot_highlights_route_and_dashes_long_edges() {
    let graph = diamond();
    let dot = render_dot(&graph, &diamond_summary(5));

    assert!(dot.starts_with("graph route {"));
    assert!(dot.contains("  3 [fillcolor=red];"));
    assert!(dot.contains("  0 -- 1 [label=\"4\", color=red, penwidth=2];"));
    assert!(dot.contains("  0 -- 2 [label=\"10\", style=dashed];"));
    assert!(dot.trim_end().ends_with('}'));
}
