//! Deterministic benchmark graphs.

use domgrid_core::{GraphGeneratorBuilder, SolveStrategy, WeightedGraph};

use crate::{error::BenchSetupError, params::GraphBenchParams};

/// Seed shared by every benchmark graph.
pub const BENCH_SEED: u64 = 42;

/// Generates the benchmark graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generation`] when the parameters are invalid or
/// the seed exhausts the grid.
pub fn bench_graph(params: GraphBenchParams) -> Result<WeightedGraph, BenchSetupError> {
    let graph = GraphGeneratorBuilder::new()
        .with_vertex_count(params.vertices)
        .with_edge_count(params.edges)
        .with_seed(BENCH_SEED)
        .build()?
        .generate()?;
    Ok(graph)
}

/// Generates the graph and solves it once with `strategy` so that setup
/// failures surface before measurement starts.
///
/// # Errors
/// Returns [`BenchSetupError`] when generation or the warm-up solve fails.
pub fn solvable_graph(
    params: GraphBenchParams,
    strategy: SolveStrategy,
) -> Result<WeightedGraph, BenchSetupError> {
    let graph = bench_graph(params)?;
    strategy.solve(&graph)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(GraphBenchParams::new(5, 10))]
    #[case(GraphBenchParams::new(9, 20))]
    fn bench_graphs_have_the_requested_shape(#[case] params: GraphBenchParams) {
        let graph = bench_graph(params).expect("bench parameters must be valid");
        assert_eq!(graph.vertex_count(), params.vertices);
        assert_eq!(graph.edge_count(), params.edges);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let err = bench_graph(GraphBenchParams::new(4, 2)).expect_err("too few edges");
        assert!(matches!(err, BenchSetupError::Generation(_)));
    }

    #[test]
    fn params_label_benchmarks() {
        assert_eq!(GraphBenchParams::new(7, 12).to_string(), "n=7,e=12");
    }
}
