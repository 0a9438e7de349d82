//! Structural validation for [`WeightedGraph`].

use std::collections::HashSet;

use tracing::debug;

use crate::error::GraphValidationError;

use super::{EdgeKey, VertexId, WeightedGraph, union_find::UnionFind};

pub(super) fn validate_graph(graph: &WeightedGraph) -> Result<(), GraphValidationError> {
    if graph.vertices.is_empty() {
        return Err(GraphValidationError::EmptyGraph);
    }
    validate_vertices(graph)?;
    validate_edges(graph)?;
    validate_connectivity(graph)
}

fn validate_vertices(graph: &WeightedGraph) -> Result<(), GraphValidationError> {
    for (index, vertex) in graph.vertices.iter().enumerate() {
        let expected = index + 1;
        if vertex.id().get() != expected {
            return Err(GraphValidationError::VertexIdMismatch {
                index,
                expected,
                found: vertex.id().get(),
            });
        }
        let position = vertex.position();
        if !position.is_on_grid() {
            return Err(GraphValidationError::PositionOutOfBounds {
                vertex: vertex.id(),
                x: position.x(),
                y: position.y(),
            });
        }
    }
    validate_spacing(graph)
}

/// Positions must be pairwise distinct and pairwise non-adjacent.
fn validate_spacing(graph: &WeightedGraph) -> Result<(), GraphValidationError> {
    for (index, first) in graph.vertices.iter().enumerate() {
        for second in graph.vertices.iter().skip(index + 1) {
            let (here, there) = (first.position(), second.position());
            if here == there || here.is_adjacent(there) {
                return Err(GraphValidationError::PositionConflict {
                    left: first.id(),
                    right: second.id(),
                });
            }
        }
    }
    Ok(())
}

fn validate_edges(graph: &WeightedGraph) -> Result<(), GraphValidationError> {
    let vertex_count = graph.vertex_count();
    let mut seen: HashSet<EdgeKey> = HashSet::with_capacity(graph.edge_count());

    for edge in &graph.edges {
        let (left, right) = (edge.source(), edge.target());
        for vertex in [left, right] {
            if !is_known(vertex, vertex_count) {
                return Err(GraphValidationError::UnknownVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        if left == right {
            return Err(GraphValidationError::SelfLoop { vertex: left });
        }
        let weight = edge.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphValidationError::InvalidWeight { left, right });
        }
        if !seen.insert(edge.key()) {
            return Err(GraphValidationError::DuplicateEdge { left, right });
        }
    }
    Ok(())
}

fn validate_connectivity(graph: &WeightedGraph) -> Result<(), GraphValidationError> {
    let mut components = UnionFind::new(graph.vertex_count());
    for edge in &graph.edges {
        // Endpoints were checked by `validate_edges`.
        if let (Some(left), Some(right)) = (edge.source().slot(), edge.target().slot()) {
            components.try_union(left, right);
        }
    }

    let count = components.components();
    if count != 1 {
        debug!(components = count, "graph failed connectivity check");
        return Err(GraphValidationError::Disconnected { components: count });
    }
    Ok(())
}

const fn is_known(vertex: VertexId, vertex_count: usize) -> bool {
    vertex.get() >= 1 && vertex.get() <= vertex_count
}
