//! Spaced placement of vertices on the grid.

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::GenerationError,
    graph::{Vertex, VertexId},
    grid::GridPosition,
};

/// Places `vertex_count` vertices on mutually non-adjacent cells.
///
/// The 64 cells are shuffled once; each vertex then takes the first remaining
/// cell and every neighbour of that cell leaves the pool immediately.
pub(super) fn allocate_positions<R: Rng + ?Sized>(
    vertex_count: usize,
    rng: &mut R,
) -> Result<Vec<Vertex>, GenerationError> {
    let mut pool: Vec<GridPosition> = GridPosition::all_cells().collect();
    pool.shuffle(rng);

    let mut vertices = Vec::with_capacity(vertex_count);
    for id in 1..=vertex_count {
        if pool.is_empty() {
            return Err(GenerationError::PositionExhaustion {
                placed: vertices.len(),
                requested: vertex_count,
            });
        }
        let position = pool.remove(0);
        pool.retain(|cell| !cell.is_adjacent(position));
        vertices.push(Vertex::new(VertexId::new(id), position));
    }
    Ok(vertices)
}
