//! Benchmark support crate for domgrid.
//!
//! Provides parameter types and graph fixtures shared by the Criterion
//! benchmarks for graph generation and both dominating set solvers.

pub mod error;
pub mod fixtures;
pub mod params;
