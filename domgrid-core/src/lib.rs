//! Grid graph generation and minimum-weight edge dominating set search.
//!
//! The crate builds random connected graphs whose vertices sit on an 8×8 grid
//! with no two vertices in neighbouring cells, weights every edge by the
//! Euclidean distance between its endpoints, and finds edge dominating sets
//! with an exact exhaustive solver or a breadth-first greedy solver.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod document;
mod error;
mod generate;
mod graph;
mod grid;
mod solver;

#[cfg(test)]
mod test_utils;

pub use crate::{
    document::{EdgeColor, GraphDocument, LinkRecord, NodeRecord},
    error::{
        DocumentError, DocumentErrorCode, GenerationError, GenerationErrorCode,
        GraphValidationError, GraphValidationErrorCode, SolveError, SolveErrorCode,
    },
    generate::{
        DEFAULT_EDGE_COUNT, DEFAULT_SEED, DEFAULT_VERTEX_COUNT, GraphGenerator,
        GraphGeneratorBuilder,
    },
    graph::{Edge, EdgeKey, Vertex, VertexId, WeightedGraph},
    grid::{GRID_CAPACITY, GRID_SIDE, GridPosition, NEIGHBOUR_OFFSETS},
    solver::{
        DominatingSetSolver, ExhaustiveSolver, GreedySolver, SearchStats, Solution, SolveStrategy,
        is_edge_dominating_set, subset_cost,
    },
};
