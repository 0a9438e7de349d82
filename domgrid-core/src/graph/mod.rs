//! Weighted grid graph consumed by the dominating set solvers.
//!
//! A [`WeightedGraph`] is assembled once per generation request and is
//! immutable afterwards, apart from the per-edge `selected` marker written
//! by [`WeightedGraph::mark_selected`] once a solver has run.

mod union_find;
mod validate;

use std::{collections::HashSet, fmt};

use crate::{error::GraphValidationError, grid::GridPosition, solver::Solution};

/// Identifier of a vertex. Generated graphs number their vertices `1..=N`.
///
/// # Examples
/// ```
/// use domgrid_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates a vertex identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }

    /// Zero-based storage slot for ids in `1..=N`.
    pub(crate) const fn slot(self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    position: GridPosition,
}

impl Vertex {
    /// Creates a vertex at `position`.
    #[must_use]
    pub const fn new(id: VertexId, position: GridPosition) -> Self {
        Self { id, position }
    }

    /// Returns the vertex identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> VertexId { self.id }

    /// Returns the grid cell occupied by the vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> GridPosition { self.position }
}

/// Canonical `(min, max)` endpoint pair naming an undirected edge.
///
/// # Examples
/// ```
/// use domgrid_core::{EdgeKey, VertexId};
///
/// let key = EdgeKey::new(VertexId::new(4), VertexId::new(2));
/// assert_eq!(key.source(), VertexId::new(2));
/// assert_eq!(key.target(), VertexId::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    source: VertexId,
    target: VertexId,
}

impl EdgeKey {
    /// Creates the canonical key for the unordered pair `{left, right}`.
    #[must_use]
    pub fn new(left: VertexId, right: VertexId) -> Self {
        Self {
            source: left.min(right),
            target: left.max(right),
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.target }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// A weighted undirected edge in canonical form (`source <= target`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    key: EdgeKey,
    weight: f64,
    selected: bool,
}

impl Edge {
    /// Creates an unselected edge with an explicit weight.
    #[must_use]
    pub fn new(left: VertexId, right: VertexId, weight: f64) -> Self {
        Self {
            key: EdgeKey::new(left, right),
            weight,
            selected: false,
        }
    }

    /// Creates an edge weighted by the Euclidean distance between two
    /// vertices' positions.
    #[must_use]
    pub fn between(left: &Vertex, right: &Vertex) -> Self {
        Self::new(left.id(), right.id(), left.position().distance(right.position()))
    }

    /// Returns the canonical endpoint pair.
    #[must_use]
    #[rustfmt::skip]
    pub const fn key(&self) -> EdgeKey { self.key }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.key.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexId { self.key.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when a solver annotation marked this edge as part of
    /// the solution.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_selected(&self) -> bool { self.selected }

    /// Sets the solution marker. Used when restoring annotated documents.
    #[must_use]
    pub const fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Vertices and weighted edges of a simple undirected graph.
///
/// Construction through [`Self::from_parts`] does not validate; solvers call
/// [`Self::validate`] before searching and generated graphs satisfy it by
/// construction.
///
/// # Examples
/// ```
/// use domgrid_core::{Edge, GridPosition, Vertex, VertexId, WeightedGraph};
///
/// let a = Vertex::new(VertexId::new(1), GridPosition::new(1, 1));
/// let b = Vertex::new(VertexId::new(2), GridPosition::new(4, 5));
/// let graph = WeightedGraph::from_parts(vec![a, b], vec![Edge::between(&a, &b)]);
/// assert!(graph.validate().is_ok());
/// assert_eq!(graph.edges()[0].weight(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl WeightedGraph {
    /// Assembles a graph from its parts without validating it.
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Returns the vertices in id order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        id.slot()
            .and_then(|slot| self.vertices.get(slot))
            .filter(|vertex| vertex.id() == id)
    }

    /// Looks up an edge by its endpoints, in either order.
    #[must_use]
    pub fn edge(&self, left: VertexId, right: VertexId) -> Option<&Edge> {
        let key = EdgeKey::new(left, right);
        self.edges.iter().find(|edge| edge.key() == key)
    }

    /// Checks that the graph is non-empty, simple, undirected and connected,
    /// with vertex ids `1..=N`, on-grid positions and finite non-negative
    /// weights.
    ///
    /// # Errors
    /// Returns the first [`GraphValidationError`] encountered.
    pub fn validate(&self) -> Result<(), GraphValidationError> {
        validate::validate_graph(self)
    }

    /// Marks exactly the edges of `solution` as selected and clears every
    /// other marker.
    pub fn mark_selected(&mut self, solution: &Solution) {
        let chosen: HashSet<EdgeKey> = solution.edges().iter().copied().collect();
        for edge in &mut self.edges {
            edge.selected = chosen.contains(&edge.key);
        }
    }

    /// Iterates over the edges currently marked as selected.
    pub fn selected_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| edge.selected)
    }
}
