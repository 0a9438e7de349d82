//! Exact minimum-cost search over every edge subset.

use tracing::{debug, info, instrument};

use crate::{error::SolveError, graph::WeightedGraph};

use super::{
    DominatingSetSolver, SearchStats, Solution, SolveStrategy,
    domination::{Coverage, IndexedEdges},
};

/// Exact solver enumerating subsets of size 1, 2, …, |E|.
///
/// Within a size, subsets are visited in lexicographic order of edge indices
/// (the graph's edge order). A subset whose cost meets or exceeds the best
/// valid cost so far skips the domination check, but enumeration always runs
/// to completion, so the first minimum-cost set in visiting order is
/// returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSolver;

impl DominatingSetSolver for ExhaustiveSolver {
    fn strategy(&self) -> SolveStrategy {
        SolveStrategy::Exhaustive
    }

    #[instrument(
        name = "core.solve.exhaustive",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn solve(&self, graph: &WeightedGraph) -> Result<Solution, SolveError> {
        let edges = IndexedEdges::from_graph(graph)?;
        let mut stats = SearchStats::default();
        let mut coverage = Coverage::new(edges.vertex_count());
        let mut best: Option<(Vec<usize>, f64)> = None;

        for size in 1..=edges.len() {
            let mut subset = Combination::first(size);
            loop {
                stats.record_candidate();
                coverage.clear();
                let mut cost = 0.0;
                for &index in subset.indices() {
                    coverage.touch(edges.endpoints(index), &mut stats);
                    cost += edges.weight(index);
                }

                let improves = best.as_ref().is_none_or(|(_, best_cost)| cost < *best_cost);
                if improves && edges.dominated_by(&coverage) {
                    debug!(size, cost, "new best dominating set");
                    best = Some((subset.indices().to_vec(), cost));
                }

                if !subset.advance(edges.len()) {
                    break;
                }
            }
        }

        let solution = match best {
            Some((indices, cost)) => Solution::new(
                indices.into_iter().map(|index| edges.key(index)).collect(),
                cost,
                stats,
            ),
            // Only an edgeless graph has no non-empty subsets; the empty set
            // dominates it vacuously.
            None if edges.is_empty() => Solution::new(Vec::new(), 0.0, stats),
            None => {
                return Err(SolveError::InvariantViolation {
                    invariant: "the full edge set always dominates",
                });
            }
        };

        info!(
            candidates = stats.candidates_examined(),
            operations = stats.operations(),
            cost = solution.cost(),
            size = solution.edges().len(),
            "exhaustive search completed"
        );
        Ok(solution)
    }
}

/// A `k`-combination of `0..n`, advanced in lexicographic order.
struct Combination {
    indices: Vec<usize>,
}

impl Combination {
    fn first(size: usize) -> Self {
        Self {
            indices: (0..size).collect(),
        }
    }

    fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Steps to the next combination of `0..n`. Returns `false` once the last
    /// combination has been visited.
    fn advance(&mut self, n: usize) -> bool {
        let size = self.indices.len();
        let Some(pivot) = (0..size)
            .rev()
            .find(|&position| self.indices[position] != position + n - size)
        else {
            return false;
        };

        self.indices[pivot] += 1;
        for position in pivot + 1..size {
            self.indices[position] = self.indices[position - 1] + 1;
        }
        true
    }
}
