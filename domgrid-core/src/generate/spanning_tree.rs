//! Random spanning tree construction by component merging.
//!
//! Components live in an arena indexed by component id; each id owns the
//! list of its member vertices. `live` holds the ids that have not yet been
//! absorbed into another component. Every merge shuffles `live`, takes the
//! first two ids, joins a random member of each, and appends the merged id
//! back to the end of `live`.

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::GenerationError,
    graph::{Edge, Vertex, VertexId},
};

struct ComponentArena {
    members: Vec<Vec<VertexId>>,
    live: Vec<usize>,
}

impl ComponentArena {
    fn singletons(vertices: &[Vertex]) -> Self {
        Self {
            members: vertices.iter().map(|vertex| vec![vertex.id()]).collect(),
            live: (0..vertices.len()).collect(),
        }
    }

    /// Merges two randomly chosen components and returns the pair of
    /// vertices joined by the merge.
    fn merge_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(VertexId, VertexId), GenerationError> {
        if self.live.len() < 2 {
            return Err(GenerationError::InvariantViolation {
                invariant: "a merge needs at least two live components",
            });
        }
        self.live.shuffle(rng);
        let first = self.live.remove(0);
        let second = self.live.remove(0);

        let left = self.pick_member(first, rng)?;
        let right = self.pick_member(second, rng)?;

        let absorbed = self
            .members
            .get_mut(second)
            .map(std::mem::take)
            .unwrap_or_default();
        if let Some(survivor) = self.members.get_mut(first) {
            survivor.extend(absorbed);
        }
        self.live.push(first);
        Ok((left, right))
    }

    fn pick_member<R: Rng + ?Sized>(
        &self,
        component: usize,
        rng: &mut R,
    ) -> Result<VertexId, GenerationError> {
        self.members
            .get(component)
            .and_then(|members| members.choose(rng))
            .copied()
            .ok_or(GenerationError::InvariantViolation {
                invariant: "live components must have members",
            })
    }
}

/// Builds `N - 1` edges that connect every vertex without forming a cycle.
pub(super) fn build_spanning_tree<R: Rng + ?Sized>(
    vertices: &[Vertex],
    rng: &mut R,
) -> Result<Vec<Edge>, GenerationError> {
    let merges = vertices.len().saturating_sub(1);
    let mut arena = ComponentArena::singletons(vertices);
    let mut edges = Vec::with_capacity(merges);

    for _ in 0..merges {
        let (left, right) = arena.merge_random(rng)?;
        let (Some(left), Some(right)) = (vertex_by_id(vertices, left), vertex_by_id(vertices, right))
        else {
            return Err(GenerationError::InvariantViolation {
                invariant: "component members must be placed vertices",
            });
        };
        edges.push(Edge::between(left, right));
    }

    if arena.live.len() != 1.min(vertices.len()) {
        return Err(GenerationError::InvariantViolation {
            invariant: "spanning tree must leave a single component",
        });
    }
    Ok(edges)
}

fn vertex_by_id(vertices: &[Vertex], id: VertexId) -> Option<&Vertex> {
    id.slot().and_then(|slot| vertices.get(slot))
}
