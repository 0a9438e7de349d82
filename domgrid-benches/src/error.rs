//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` so benchmark bodies never need
//! `.expect()`.

use domgrid_core::{GenerationError, SolveError};

/// Errors that may occur while preparing a benchmark.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The benchmark graph could not be generated.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A warm-up solve rejected the benchmark graph.
    #[error("warm-up solve failed: {0}")]
    Solve(#[from] SolveError),
}
