//! Completion of a spanning tree up to the requested edge count.

use std::collections::HashSet;

use rand::Rng;

use crate::graph::{Edge, EdgeKey, Vertex};

/// Appends `target_edges - edges.len()` edges drawn without replacement from
/// the vertex pairs that are not yet connected.
///
/// Candidates are kept in sorted `(source, target)` order and each draw
/// removes a uniformly chosen index, so the result depends only on the input
/// and the random stream.
pub(super) fn complete_edges<R: Rng + ?Sized>(
    vertices: &[Vertex],
    edges: &mut Vec<Edge>,
    target_edges: usize,
    rng: &mut R,
) {
    let missing = target_edges.saturating_sub(edges.len());
    if missing == 0 {
        return;
    }

    let present: HashSet<EdgeKey> = edges.iter().map(Edge::key).collect();
    let mut candidates: Vec<(&Vertex, &Vertex)> = vertices
        .iter()
        .enumerate()
        .flat_map(|(index, left)| vertices.iter().skip(index + 1).map(move |right| (left, right)))
        .filter(|(left, right)| !present.contains(&EdgeKey::new(left.id(), right.id())))
        .collect();

    edges.reserve(missing.min(candidates.len()));
    for _ in 0..missing {
        if candidates.is_empty() {
            break;
        }
        let index = rng.gen_range(0..candidates.len());
        let (left, right) = candidates.remove(index);
        edges.push(Edge::between(left, right));
    }
}
