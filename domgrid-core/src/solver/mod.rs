//! Minimum-weight edge dominating set search.
//!
//! Two strategies share one correctness contract: a subset `S` of the edges is
//! an edge dominating set when every edge outside `S` has an endpoint that is
//! also an endpoint of some edge in `S`.
//!
//! - [`ExhaustiveSolver`] walks every subset in increasing size and returns a
//!   globally minimum-cost set. Its running time is `O(2^|E|)` and it has no
//!   internal timeout; callers running it on anything but small graphs must
//!   bound it externally.
//! - [`GreedySolver`] returns the first valid set reached by a breadth-first
//!   expansion over weight-sorted edges. It is usually far cheaper to run but
//!   carries no optimality guarantee.
//!
//! Both validate the graph first and fail with
//! [`SolveError::PreconditionViolation`] before searching.

mod domination;
mod exhaustive;
mod greedy;

use std::fmt;

use crate::{
    error::SolveError,
    graph::{EdgeKey, WeightedGraph},
};

pub use self::{
    domination::{is_edge_dominating_set, subset_cost},
    exhaustive::ExhaustiveSolver,
    greedy::GreedySolver,
};

/// Diagnostic counters collected during a search.
///
/// `operations` counts two units for every edge folded into a candidate's
/// set of touched vertices, one per endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    candidates_examined: u64,
    operations: u64,
}

impl SearchStats {
    /// Creates statistics from raw counters.
    #[must_use]
    pub const fn new(candidates_examined: u64, operations: u64) -> Self {
        Self {
            candidates_examined,
            operations,
        }
    }

    /// Number of candidate subsets examined.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidates_examined(&self) -> u64 { self.candidates_examined }

    /// Number of elementary coverage and summation operations performed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> u64 { self.operations }

    pub(crate) const fn record_candidate(&mut self) {
        self.candidates_examined = self.candidates_examined.saturating_add(1);
    }

    pub(crate) const fn record_edge(&mut self) {
        self.operations = self.operations.saturating_add(2);
    }
}

/// An edge dominating set together with its cost and the statistics of the
/// search that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    edges: Vec<EdgeKey>,
    cost: f64,
    stats: SearchStats,
}

impl Solution {
    /// Creates a solution from its parts.
    #[must_use]
    pub const fn new(edges: Vec<EdgeKey>, cost: f64, stats: SearchStats) -> Self {
        Self { edges, cost, stats }
    }

    /// Edges of the set, in the order the search assembled them.
    #[must_use]
    pub fn edges(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Sum of the weights of the set's edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> f64 { self.cost }

    /// Statistics of the search.
    #[must_use]
    #[rustfmt::skip]
    pub const fn stats(&self) -> SearchStats { self.stats }
}

/// A strategy for finding a low-cost edge dominating set.
pub trait DominatingSetSolver {
    /// Strategy implemented by this solver.
    fn strategy(&self) -> SolveStrategy;

    /// Searches `graph` for an edge dominating set.
    ///
    /// # Errors
    /// Returns [`SolveError::PreconditionViolation`] when `graph` is not
    /// simple, undirected and connected.
    fn solve(&self, graph: &WeightedGraph) -> Result<Solution, SolveError>;
}

/// Selects which solver runs.
///
/// # Examples
/// ```
/// use domgrid_core::{GraphGeneratorBuilder, SolveStrategy};
///
/// let graph = GraphGeneratorBuilder::new().build()?.generate()?;
/// let exact = SolveStrategy::Exhaustive.solve(&graph)?;
/// let quick = SolveStrategy::Greedy.solve(&graph)?;
/// assert!(quick.cost() >= exact.cost());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStrategy {
    /// Exact exponential search.
    Exhaustive,
    /// First-valid breadth-first search over weight-sorted edges.
    Greedy,
}

impl SolveStrategy {
    /// Runs the solver selected by this strategy.
    ///
    /// # Errors
    /// Returns [`SolveError::PreconditionViolation`] when `graph` fails
    /// validation.
    pub fn solve(self, graph: &WeightedGraph) -> Result<Solution, SolveError> {
        match self {
            Self::Exhaustive => ExhaustiveSolver.solve(graph),
            Self::Greedy => GreedySolver.solve(graph),
        }
    }

    /// Stable lowercase name for logs and command surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
