//! First-valid breadth-first search over weight-sorted edges.

use std::collections::VecDeque;

use tracing::{info, instrument};

use crate::{error::SolveError, graph::WeightedGraph};

use super::{
    DominatingSetSolver, SearchStats, Solution, SolveStrategy,
    domination::{Coverage, IndexedEdges},
};

/// Heuristic solver returning the first dominating set reached by a FIFO
/// expansion.
///
/// Edges are sorted by ascending weight (ties keep graph order). Every single
/// edge seeds the queue. A dequeued candidate that is not dominating is
/// extended by each later edge in the sorted order that brings in at least
/// one new vertex.
///
/// The queue mixes candidate lengths, so a longer but cheaper candidate may
/// sit behind a shorter, costlier one; the result is not guaranteed to be
/// minimal. Structurally identical candidates reached through different
/// expansion orders are not merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

/// A queued candidate: the edge it appended plus the candidate it extends.
struct CandidateNode {
    parent: Option<usize>,
    /// Position of the appended edge in the weight-sorted order.
    rank: usize,
}

impl DominatingSetSolver for GreedySolver {
    fn strategy(&self) -> SolveStrategy {
        SolveStrategy::Greedy
    }

    #[instrument(
        name = "core.solve.greedy",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    fn solve(&self, graph: &WeightedGraph) -> Result<Solution, SolveError> {
        let edges = IndexedEdges::from_graph(graph)?;
        if edges.is_empty() {
            return Ok(Solution::new(Vec::new(), 0.0, SearchStats::default()));
        }

        let order = sorted_by_weight(edges.weights());
        let mut stats = SearchStats::default();
        let mut coverage = Coverage::new(edges.vertex_count());
        let mut arena: Vec<CandidateNode> = (0..order.len())
            .map(|rank| CandidateNode { parent: None, rank })
            .collect();
        let mut queue: VecDeque<usize> = (0..arena.len()).collect();

        while let Some(current) = queue.pop_front() {
            stats.record_candidate();
            coverage.clear();
            let chain = chain_ranks(&arena, current);
            for &rank in &chain {
                coverage.touch(edges.endpoints(order[rank]), &mut stats);
            }

            if edges.dominated_by(&coverage) {
                let mut keys = Vec::with_capacity(chain.len());
                let mut cost = 0.0;
                for &rank in chain.iter().rev() {
                    keys.push(edges.key(order[rank]));
                    cost += edges.weight(order[rank]);
                }
                info!(
                    candidates = stats.candidates_examined(),
                    operations = stats.operations(),
                    cost,
                    size = keys.len(),
                    "greedy search completed"
                );
                return Ok(Solution::new(keys, cost, stats));
            }

            let last = arena[current].rank;
            for rank in last + 1..order.len() {
                if coverage.extends(edges.endpoints(order[rank])) {
                    arena.push(CandidateNode {
                        parent: Some(current),
                        rank,
                    });
                    queue.push_back(arena.len() - 1);
                }
            }
        }

        Err(SolveError::InvariantViolation {
            invariant: "a maximal matching is always reachable",
        })
    }
}

/// Edge indices ordered by ascending weight, stable on ties.
fn sorted_by_weight(weights: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.sort_by(|&left, &right| weights[left].total_cmp(&weights[right]));
    order
}

/// Ranks of the edges in a candidate, most recently appended first.
fn chain_ranks(arena: &[CandidateNode], node: usize) -> Vec<usize> {
    let mut ranks = Vec::new();
    let mut cursor = Some(node);
    while let Some(index) = cursor {
        let Some(entry) = arena.get(index) else {
            break;
        };
        ranks.push(entry.rank);
        cursor = entry.parent;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_stable_on_ties() {
        assert_eq!(sorted_by_weight(&[2.0, 1.0, 2.0, 1.0]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn chains_walk_back_to_the_seed() {
        let arena = vec![
            CandidateNode { parent: None, rank: 0 },
            CandidateNode { parent: None, rank: 1 },
            CandidateNode { parent: Some(0), rank: 2 },
            CandidateNode { parent: Some(2), rank: 4 },
        ];
        assert_eq!(chain_ranks(&arena, 3), vec![4, 2, 0]);
        assert_eq!(chain_ranks(&arena, 1), vec![1]);
    }
}
