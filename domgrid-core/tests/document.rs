//! JSON interchange through the `serde` feature.
#![cfg(feature = "serde")]

mod common;

use common::generated;
use domgrid_core::{
    DocumentError, EdgeColor, GraphDocument, GraphValidationError, SolveStrategy, VertexId,
};

#[test]
fn annotated_graphs_survive_a_json_round_trip() {
    let mut graph = generated(6, 9, 31);
    let solution = SolveStrategy::Greedy.solve(&graph).expect("valid graph");
    graph.mark_selected(&solution);

    let json = serde_json::to_string(&GraphDocument::from_graph(&graph)).expect("serialise");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(value["multigraph"], false);
    assert_eq!(value["nodes"][0]["id"], 1);
    assert!(value["nodes"][0]["pos"].is_array());

    let document: GraphDocument = serde_json::from_str(&json).expect("deserialise");
    let red = document
        .links
        .iter()
        .filter(|link| link.color == EdgeColor::Red)
        .count();
    assert_eq!(red, solution.edges().len());
    assert_eq!(document.into_graph().expect("valid document"), graph);
}

#[test]
fn edges_alias_and_missing_colour_are_accepted() {
    let raw = r#"{
        "directed": false,
        "multigraph": false,
        "nodes": [{"id": 1, "pos": [1, 1]}, {"id": 2, "pos": [1, 3]}],
        "edges": [{"source": 2, "target": 1, "weight": 2.0}]
    }"#;
    let graph = serde_json::from_str::<GraphDocument>(raw)
        .expect("valid JSON")
        .into_graph()
        .expect("valid graph");
    let edge = graph.edges()[0];
    assert_eq!(edge.source(), VertexId::new(1));
    assert_eq!(edge.target(), VertexId::new(2));
    assert!(!edge.is_selected());
}

#[test]
fn off_grid_positions_are_rejected() {
    let raw = r#"{
        "nodes": [{"id": 1, "pos": [0, 4]}],
        "links": []
    }"#;
    let err = serde_json::from_str::<GraphDocument>(raw)
        .expect("valid JSON")
        .into_graph()
        .expect_err("position (0, 4) is off the grid");
    assert_eq!(
        err,
        DocumentError::Graph {
            source: GraphValidationError::PositionOutOfBounds {
                vertex: VertexId::new(1),
                x: 0,
                y: 4,
            },
        }
    );
}
