//! Unit and property tests for the dominating set solvers.

use domgrid_test_support::tracing::RecordingLayer;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

use crate::{
    error::{GraphValidationError, SolveError},
    generate::GraphGeneratorBuilder,
    graph::{Edge, EdgeKey, Vertex, VertexId, WeightedGraph},
    grid::GridPosition,
    test_utils::suite_proptest_config,
};

use super::{
    DominatingSetSolver, ExhaustiveSolver, GreedySolver, SolveStrategy, is_edge_dominating_set,
    subset_cost,
};

const TOLERANCE: f64 = 1e-9;

fn key(left: usize, right: usize) -> EdgeKey {
    EdgeKey::new(VertexId::new(left), VertexId::new(right))
}

fn graph_from(vertex_count: usize, edges: &[(usize, usize, f64)]) -> WeightedGraph {
    let vertices = (1..=vertex_count)
        .map(|id| {
            let slot = u8::try_from(id - 1).expect("test graphs stay small");
            let position = GridPosition::new(1 + 2 * (slot % 4), 1 + 2 * (slot / 4));
            Vertex::new(VertexId::new(id), position)
        })
        .collect();
    let edges = edges
        .iter()
        .map(|&(left, right, weight)| Edge::new(VertexId::new(left), VertexId::new(right), weight))
        .collect();
    WeightedGraph::from_parts(vertices, edges)
}

/// The four-cycle 1-2-3-4: `(1,2)`, `(2,3)` and
/// `(3,4)` weigh 1 and `(1,4)` weighs 3.
#[fixture]
fn weighted_cycle() -> WeightedGraph {
    graph_from(4, &[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (1, 4, 3.0)])
}

/// Minimum dominating cost by enumerating every bitmask, independent of the
/// solvers' enumeration and pruning.
fn brute_force_minimum(graph: &WeightedGraph) -> f64 {
    let keys: Vec<EdgeKey> = graph.edges().iter().map(Edge::key).collect();
    let count = u32::try_from(keys.len()).expect("small graph");
    let mut best = f64::INFINITY;
    for mask in 1_u64..(1_u64 << count) {
        let subset: Vec<EdgeKey> = keys
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, key)| *key)
            .collect();
        if is_edge_dominating_set(graph, &subset) {
            best = best.min(subset_cost(graph, &subset));
        }
    }
    best
}

#[rstest]
fn cycle_minimum_costs_two(weighted_cycle: WeightedGraph) {
    let solution = ExhaustiveSolver.solve(&weighted_cycle).expect("valid graph");
    assert!((solution.cost() - 2.0).abs() < TOLERANCE);
    // Ties keep the first optimum in enumeration order.
    assert_eq!(solution.edges(), &[key(1, 2), key(2, 3)]);
    assert!(is_edge_dominating_set(&weighted_cycle, solution.edges()));

    // The matching {(1,2), (3,4)} is one of the optimal sets.
    let matching = [key(1, 2), key(3, 4)];
    assert!(is_edge_dominating_set(&weighted_cycle, &matching));
    assert!((subset_cost(&weighted_cycle, &matching) - 2.0).abs() < TOLERANCE);
}

#[rstest]
#[case::light_left(vec![(1, 2)])]
#[case::light_middle(vec![(2, 3)])]
#[case::light_right(vec![(3, 4)])]
#[case::heavy(vec![(1, 4)])]
fn cycle_singletons_leave_an_edge_undominated(
    weighted_cycle: WeightedGraph,
    #[case] pairs: Vec<(usize, usize)>,
) {
    let subset: Vec<EdgeKey> = pairs.into_iter().map(|(a, b)| key(a, b)).collect();
    assert!(!is_edge_dominating_set(&weighted_cycle, &subset));
}

#[rstest]
fn cycle_exhaustive_examines_every_subset(weighted_cycle: WeightedGraph) {
    let solution = ExhaustiveSolver.solve(&weighted_cycle).expect("valid graph");
    // 2^4 - 1 non-empty subsets; each contributes two operations per edge,
    // and edges appear in 2^3 subsets each.
    assert_eq!(solution.stats().candidates_examined(), 15);
    assert_eq!(solution.stats().operations(), 2 * 4 * 8);
}

#[rstest]
fn cycle_greedy_finds_a_cheapest_pair(weighted_cycle: WeightedGraph) {
    let solution = GreedySolver.solve(&weighted_cycle).expect("valid graph");
    // Four singletons fail, then the first extension of (1,2) dominates.
    assert_eq!(solution.edges(), &[key(1, 2), key(2, 3)]);
    assert!((solution.cost() - 2.0).abs() < TOLERANCE);
    assert_eq!(solution.stats().candidates_examined(), 5);
    assert_eq!(solution.stats().operations(), 2 * 4 + 2 * 2);
}

#[test]
fn greedy_can_miss_the_optimum() {
    // Path 1-2-3-4-5-6-7 with heavy edges (2,3) and (5,6). No light pair
    // dominates, so greedy settles on the only valid pair {(2,3), (5,6)}
    // before any triple is examined, while three light edges suffice.
    let graph = graph_from(
        7,
        &[
            (1, 2, 1.0),
            (2, 3, 50.0),
            (3, 4, 1.0),
            (4, 5, 1.0),
            (5, 6, 50.0),
            (6, 7, 1.0),
        ],
    );
    let exact = ExhaustiveSolver.solve(&graph).expect("valid graph");
    let quick = GreedySolver.solve(&graph).expect("valid graph");
    assert!((exact.cost() - 3.0).abs() < TOLERANCE);
    assert_eq!(exact.edges().len(), 3);
    assert_eq!(quick.edges(), &[key(2, 3), key(5, 6)]);
    assert!((quick.cost() - 100.0).abs() < TOLERANCE);
    assert!(is_edge_dominating_set(&graph, quick.edges()));
}

#[test]
fn single_vertex_graph_has_an_empty_solution() {
    let graph = graph_from(1, &[]);
    for strategy in [SolveStrategy::Exhaustive, SolveStrategy::Greedy] {
        let solution = strategy.solve(&graph).expect("valid graph");
        assert!(solution.edges().is_empty());
        assert_eq!(solution.cost(), 0.0);
        assert_eq!(solution.stats().candidates_examined(), 0);
    }
}

#[rstest]
#[case::exhaustive(SolveStrategy::Exhaustive)]
#[case::greedy(SolveStrategy::Greedy)]
fn solvers_reject_disconnected_graphs(#[case] strategy: SolveStrategy) {
    let graph = graph_from(4, &[(1, 2, 1.0), (3, 4, 1.0)]);
    let err = strategy.solve(&graph).expect_err("disconnected input must fail");
    assert_eq!(
        err,
        SolveError::PreconditionViolation {
            source: GraphValidationError::Disconnected { components: 2 },
        }
    );
    assert!(err.validation_code().is_some());
}

#[rstest]
#[case::exhaustive(SolveStrategy::Exhaustive)]
#[case::greedy(SolveStrategy::Greedy)]
fn solvers_reject_duplicate_edges(#[case] strategy: SolveStrategy) {
    let graph = graph_from(2, &[(1, 2, 1.0), (2, 1, 1.0)]);
    let err = strategy.solve(&graph).expect_err("multi-edges must fail");
    assert!(matches!(
        err,
        SolveError::PreconditionViolation {
            source: GraphValidationError::DuplicateEdge { .. }
        }
    ));
}

#[test]
fn strategies_report_their_names() {
    assert_eq!(ExhaustiveSolver.strategy(), SolveStrategy::Exhaustive);
    assert_eq!(GreedySolver.strategy(), SolveStrategy::Greedy);
    assert_eq!(SolveStrategy::Exhaustive.to_string(), "exhaustive");
    assert_eq!(SolveStrategy::Greedy.as_str(), "greedy");
}

#[rstest]
#[case::exhaustive(SolveStrategy::Exhaustive, "core.solve.exhaustive")]
#[case::greedy(SolveStrategy::Greedy, "core.solve.greedy")]
fn solving_records_strategy_span(
    weighted_cycle: WeightedGraph,
    #[case] strategy: SolveStrategy,
    #[case] span_name: &str,
) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || strategy.solve(&weighted_cycle))
        .expect("valid graph");

    let span = layer
        .spans()
        .into_iter()
        .find(|span| span.name == span_name)
        .expect("solver span must exist");
    assert_eq!(span.fields.get("vertices"), Some(&"4".to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"4".to_owned()));
}

fn small_graph_strategy() -> impl Strategy<Value = WeightedGraph> {
    (1_usize..=6, any::<u64>())
        .prop_flat_map(|(vertices, seed)| {
            let min = vertices - 1;
            let max = (vertices * (vertices - 1) / 2).min(10);
            (Just(vertices), min..=max, Just(seed))
        })
        .prop_map(|(vertices, edges, seed)| {
            GraphGeneratorBuilder::new()
                .with_vertex_count(vertices)
                .with_edge_count(edges)
                .with_seed(seed)
                .build()
                .and_then(|generator| generator.generate())
                .expect("six vertices always fit on the grid")
        })
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn exhaustive_matches_brute_force(graph in small_graph_strategy()) {
        let solution = ExhaustiveSolver.solve(&graph).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(is_edge_dominating_set(&graph, solution.edges()));
        prop_assert!((solution.cost() - subset_cost(&graph, solution.edges())).abs() < TOLERANCE);
        if graph.edge_count() > 0 {
            prop_assert!((solution.cost() - brute_force_minimum(&graph)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn greedy_is_valid_and_never_beats_exhaustive(graph in small_graph_strategy()) {
        let exact = ExhaustiveSolver.solve(&graph).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let quick = GreedySolver.solve(&graph).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(is_edge_dominating_set(&graph, quick.edges()));
        prop_assert!((quick.cost() - subset_cost(&graph, quick.edges())).abs() < TOLERANCE);
        prop_assert!(quick.cost() + TOLERANCE >= exact.cost());
    }
}
