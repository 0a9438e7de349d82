//! Domination predicate and the slot-indexed edge view shared by both solvers.

use std::collections::HashSet;

use crate::{
    error::SolveError,
    graph::{EdgeKey, WeightedGraph},
};

use super::SearchStats;

/// Edges of a validated graph with endpoints resolved to vertex slots.
pub(super) struct IndexedEdges {
    endpoints: Vec<(usize, usize)>,
    weights: Vec<f64>,
    keys: Vec<EdgeKey>,
    vertex_count: usize,
}

impl IndexedEdges {
    /// Validates `graph` and resolves its edges.
    pub(super) fn from_graph(graph: &WeightedGraph) -> Result<Self, SolveError> {
        graph.validate()?;

        let mut endpoints = Vec::with_capacity(graph.edge_count());
        let mut weights = Vec::with_capacity(graph.edge_count());
        let mut keys = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            let (Some(left), Some(right)) = (edge.source().slot(), edge.target().slot()) else {
                return Err(SolveError::InvariantViolation {
                    invariant: "validated edges reference vertices 1..=N",
                });
            };
            endpoints.push((left, right));
            weights.push(edge.weight());
            keys.push(edge.key());
        }

        Ok(Self {
            endpoints,
            weights,
            keys,
            vertex_count: graph.vertex_count(),
        })
    }

    pub(super) fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub(super) fn endpoints(&self, index: usize) -> (usize, usize) {
        self.endpoints[index]
    }

    pub(super) fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }

    pub(super) fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub(super) fn key(&self, index: usize) -> EdgeKey {
        self.keys[index]
    }

    pub(super) const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns `true` when every edge has an endpoint in `coverage`.
    ///
    /// Edges inside the candidate have both endpoints touched, so checking
    /// all edges is equivalent to checking only the edges outside it.
    pub(super) fn dominated_by(&self, coverage: &Coverage) -> bool {
        self.endpoints
            .iter()
            .all(|&(left, right)| coverage.contains(left) || coverage.contains(right))
    }
}

/// Set of vertex slots touched by the edges of a candidate.
pub(super) struct Coverage {
    touched: Vec<bool>,
}

impl Coverage {
    pub(super) fn new(vertex_count: usize) -> Self {
        Self {
            touched: vec![false; vertex_count],
        }
    }

    pub(super) fn clear(&mut self) {
        self.touched.fill(false);
    }

    /// Adds both endpoints of an edge, counting the work in `stats`.
    pub(super) fn touch(&mut self, (left, right): (usize, usize), stats: &mut SearchStats) {
        self.touched[left] = true;
        self.touched[right] = true;
        stats.record_edge();
    }

    pub(super) fn contains(&self, slot: usize) -> bool {
        self.touched.get(slot).copied().unwrap_or(false)
    }

    /// Returns `true` when the edge would add at least one new vertex.
    pub(super) fn extends(&self, (left, right): (usize, usize)) -> bool {
        !self.contains(left) || !self.contains(right)
    }
}

/// Returns `true` when `subset` is an edge dominating set of `graph`: every
/// edge of the graph outside `subset` shares an endpoint with some edge in
/// `subset`.
///
/// # Examples
/// ```
/// use domgrid_core::{Edge, EdgeKey, GridPosition, Vertex, VertexId, WeightedGraph, is_edge_dominating_set};
///
/// let vertices = (1..=3)
///     .map(|id| Vertex::new(VertexId::new(id), GridPosition::new(2 * id as u8, 1)))
///     .collect();
/// let edges = vec![
///     Edge::new(VertexId::new(1), VertexId::new(2), 2.0),
///     Edge::new(VertexId::new(2), VertexId::new(3), 2.0),
/// ];
/// let graph = WeightedGraph::from_parts(vertices, edges);
/// let middle = EdgeKey::new(VertexId::new(1), VertexId::new(2));
/// assert!(is_edge_dominating_set(&graph, &[middle]));
/// assert!(!is_edge_dominating_set(&graph, &[]));
/// ```
#[must_use]
pub fn is_edge_dominating_set(graph: &WeightedGraph, subset: &[EdgeKey]) -> bool {
    let members: HashSet<EdgeKey> = subset.iter().copied().collect();
    let touched: HashSet<_> = subset
        .iter()
        .flat_map(|key| [key.source(), key.target()])
        .collect();
    graph
        .edges()
        .iter()
        .filter(|edge| !members.contains(&edge.key()))
        .all(|edge| touched.contains(&edge.source()) || touched.contains(&edge.target()))
}

/// Sums the weights of the graph edges named by `subset`. Keys absent from
/// the graph contribute nothing.
#[must_use]
pub fn subset_cost(graph: &WeightedGraph, subset: &[EdgeKey]) -> f64 {
    subset
        .iter()
        .filter_map(|key| graph.edge(key.source(), key.target()))
        .map(|edge| edge.weight())
        .sum()
}
