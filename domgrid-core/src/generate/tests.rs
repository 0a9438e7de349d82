//! Unit tests for the generation builder and pipeline.

use std::collections::HashSet;

use domgrid_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

use crate::{
    error::GenerationError,
    graph::{EdgeKey, WeightedGraph},
};

use super::{GraphGenerator, GraphGeneratorBuilder};

fn generator(vertices: usize, edges: usize, seed: u64) -> GraphGenerator {
    GraphGeneratorBuilder::new()
        .with_vertex_count(vertices)
        .with_edge_count(edges)
        .with_seed(seed)
        .build()
        .expect("parameters must be valid")
}

fn keys(graph: &WeightedGraph) -> HashSet<EdgeKey> {
    graph.edges().iter().map(|edge| edge.key()).collect()
}

#[rstest]
#[case::zero(0, 0, GenerationError::InvalidVertexCount { requested: 0, capacity: 16 })]
#[case::over_capacity(17, 16, GenerationError::InvalidVertexCount { requested: 17, capacity: 16 })]
#[case::too_few_edges(5, 3, GenerationError::InvalidEdgeCount { requested: 3, min: 4, max: 10 })]
#[case::too_many_edges(5, 11, GenerationError::InvalidEdgeCount { requested: 11, min: 4, max: 10 })]
fn builder_rejects_invalid_counts(
    #[case] vertices: usize,
    #[case] edges: usize,
    #[case] expected: GenerationError,
) {
    let err = GraphGeneratorBuilder::new()
        .with_vertex_count(vertices)
        .with_edge_count(edges)
        .build()
        .expect_err("builder must reject the counts");
    assert_eq!(err, expected);
}

#[test]
fn builder_defaults_are_valid() {
    let generator = GraphGeneratorBuilder::new().build().expect("defaults valid");
    assert_eq!(generator.vertex_count().get(), 5);
    assert_eq!(generator.edge_count(), 10);
    assert_eq!(generator.seed(), 93_391);
}

#[rstest]
#[case(1, 0)]
#[case(2, 1)]
#[case(5, 7)]
#[case(7, 21)]
fn generated_graphs_are_valid(#[case] vertices: usize, #[case] edges: usize) {
    let graph = generator(vertices, edges, 17).generate().expect("small graphs fit");
    assert_eq!(graph.vertex_count(), vertices);
    assert_eq!(graph.edge_count(), edges);
    assert_eq!(graph.validate(), Ok(()));
    assert_eq!(keys(&graph).len(), edges);
    assert_eq!(graph.selected_edges().count(), 0);
}

#[test]
fn minimum_edge_count_yields_a_tree() {
    let graph = generator(6, 5, 4).generate().expect("fits");
    // A connected graph with N - 1 edges is a tree.
    assert_eq!(graph.edge_count(), graph.vertex_count() - 1);
    assert_eq!(graph.validate(), Ok(()));
}

#[test]
fn maximum_edge_count_yields_the_complete_graph() {
    let graph = generator(6, 15, 4).generate().expect("fits");
    let edges = keys(&graph);
    for left in graph.vertices() {
        for right in graph.vertices() {
            if left.id() < right.id() {
                assert!(edges.contains(&EdgeKey::new(left.id(), right.id())));
            }
        }
    }
}

#[test]
fn tree_prefix_is_independent_of_the_edge_count() {
    // Completion draws come last, so the spanning tree stage sees the same
    // stream regardless of how many extra edges are requested.
    let sparse = generator(6, 5, 21).generate().expect("fits");
    let dense = generator(6, 12, 21).generate().expect("fits");
    assert_eq!(sparse.vertices(), dense.vertices());
    assert_eq!(sparse.edges(), &dense.edges()[..5]);
}

#[rstest]
#[case(3)]
#[case(93_391)]
#[case(u64::MAX)]
fn generation_is_deterministic(#[case] seed: u64) {
    let first = generator(7, 12, seed).generate().expect("fits");
    let second = generator(7, 12, seed).generate().expect("fits");
    assert_eq!(first, second);
}

#[test]
fn generate_matches_explicit_stream() {
    let generator = generator(5, 8, 55);
    let seeded = generator.generate().expect("fits");
    let explicit = generator
        .generate_with_rng(&mut SmallRng::seed_from_u64(55))
        .expect("fits");
    assert_eq!(seeded, explicit);
}

#[test]
fn generation_records_core_span() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let generator = generator(4, 5, 9);

    tracing::subscriber::with_default(subscriber, || generator.generate()).expect("fits");

    let span = layer
        .spans()
        .into_iter()
        .find(|span| span.name == "core.generate")
        .expect("core.generate span must exist");
    assert_eq!(span.fields.get("vertices"), Some(&"4".to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"5".to_owned()));
    assert_eq!(span.fields.get("seed"), Some(&"9".to_owned()));
    assert!(
        layer
            .events()
            .iter()
            .any(|event| event.message() == Some("graph generated"))
    );
}
