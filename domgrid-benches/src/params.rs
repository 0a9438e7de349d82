//! Benchmark parameter types.

use std::fmt;

/// Shape of a generated benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of edges.
    pub edges: usize,
}

impl GraphBenchParams {
    /// Creates parameters for a graph with `vertices` vertices and `edges`
    /// edges.
    #[must_use]
    pub const fn new(vertices: usize, edges: usize) -> Self {
        Self { vertices, edges }
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.vertices, self.edges)
    }
}
