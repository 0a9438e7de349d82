//! Seeded synthesis of spaced, connected, weighted grid graphs.
//!
//! The pipeline runs three stages against one random stream, always in the
//! same order:
//!
//! 1. shuffle the 64 grid cells and place the vertices,
//! 2. merge components into a random spanning tree (one shuffle and two
//!    member draws per merge),
//! 3. draw the remaining edges from the sorted complement.
//!
//! Identical `(vertex_count, edge_count, seed)` triples therefore always yield
//! identical graphs.

mod completion;
mod positions;
mod spanning_tree;

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{error::GenerationError, graph::WeightedGraph, grid::GRID_CAPACITY};

/// Vertex count used when none is configured.
pub const DEFAULT_VERTEX_COUNT: usize = 5;
/// Edge count used when none is configured.
pub const DEFAULT_EDGE_COUNT: usize = 10;
/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 93_391;

/// Configures and constructs [`GraphGenerator`] instances.
///
/// # Examples
/// ```
/// use domgrid_core::GraphGeneratorBuilder;
///
/// let generator = GraphGeneratorBuilder::new()
///     .with_vertex_count(6)
///     .with_edge_count(8)
///     .with_seed(7)
///     .build()
///     .expect("counts are valid");
/// let graph = generator.generate().expect("six vertices always fit");
/// assert_eq!(graph.vertex_count(), 6);
/// assert_eq!(graph.edge_count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GraphGeneratorBuilder {
    vertex_count: usize,
    edge_count: usize,
    seed: u64,
}

impl Default for GraphGeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

impl GraphGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use domgrid_core::GraphGeneratorBuilder;
    ///
    /// let builder = GraphGeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 5);
    /// assert_eq!(builder.edge_count(), 10);
    /// assert_eq!(builder.seed(), 93_391);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices.
    #[must_use]
    pub const fn with_vertex_count(mut self, count: usize) -> Self {
        self.vertex_count = count;
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Overrides the number of edges.
    #[must_use]
    pub const fn with_edge_count(mut self, count: usize) -> Self {
        self.edge_count = count;
        self
    }

    /// Returns the configured number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Overrides the seed of the random stream.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Validates the counts and constructs a [`GraphGenerator`].
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidVertexCount`] when the vertex count is
    /// zero or above [`GRID_CAPACITY`], and
    /// [`GenerationError::InvalidEdgeCount`] when the edge count lies outside
    /// `N - 1 ..= N(N - 1) / 2`.
    ///
    /// # Examples
    /// ```
    /// use domgrid_core::{GenerationError, GraphGeneratorBuilder};
    ///
    /// let err = GraphGeneratorBuilder::new()
    ///     .with_vertex_count(4)
    ///     .with_edge_count(7)
    ///     .build()
    ///     .expect_err("K4 has six edges");
    /// assert!(matches!(err, GenerationError::InvalidEdgeCount { max: 6, .. }));
    /// ```
    pub fn build(self) -> Result<GraphGenerator, GenerationError> {
        let vertex_count = NonZeroUsize::new(self.vertex_count)
            .filter(|count| count.get() <= GRID_CAPACITY)
            .ok_or(GenerationError::InvalidVertexCount {
                requested: self.vertex_count,
                capacity: GRID_CAPACITY,
            })?;

        let (min, max) = edge_count_bounds(vertex_count);
        if self.edge_count < min || self.edge_count > max {
            return Err(GenerationError::InvalidEdgeCount {
                requested: self.edge_count,
                min,
                max,
            });
        }

        Ok(GraphGenerator {
            vertex_count,
            edge_count: self.edge_count,
            seed: self.seed,
        })
    }
}

/// Inclusive bounds on the edge count of a connected simple graph.
fn edge_count_bounds(vertex_count: NonZeroUsize) -> (usize, usize) {
    let n = vertex_count.get();
    (n - 1, n * (n - 1) / 2)
}

/// Generates spaced, connected grid graphs from validated parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGenerator {
    vertex_count: NonZeroUsize,
    edge_count: usize,
    seed: u64,
}

impl GraphGenerator {
    /// Returns the number of vertices each generated graph has.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> NonZeroUsize { self.vertex_count }

    /// Returns the number of edges each generated graph has.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the seed of the random stream.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Generates the graph determined by the configured seed.
    ///
    /// # Errors
    /// Returns [`GenerationError::PositionExhaustion`] when the spacing
    /// constraint leaves no free cell for a vertex under this seed.
    pub fn generate(&self) -> Result<WeightedGraph, GenerationError> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generates a graph by consuming the supplied random stream.
    ///
    /// # Errors
    /// Returns [`GenerationError::PositionExhaustion`] when the spacing
    /// constraint leaves no free cell for a vertex.
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(
            vertices = self.vertex_count.get(),
            edges = self.edge_count,
            seed = self.seed,
        ),
    )]
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<WeightedGraph, GenerationError> {
        let vertices = positions::allocate_positions(self.vertex_count.get(), rng)?;
        debug!(vertices = vertices.len(), "positions allocated");

        let mut edges = spanning_tree::build_spanning_tree(&vertices, rng)?;
        debug!(edges = edges.len(), "spanning tree built");

        completion::complete_edges(&vertices, &mut edges, self.edge_count, rng);
        if edges.len() != self.edge_count {
            return Err(GenerationError::InvariantViolation {
                invariant: "completion must reach the requested edge count",
            });
        }

        let graph = WeightedGraph::from_parts(vertices, edges);
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph generated"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests;
