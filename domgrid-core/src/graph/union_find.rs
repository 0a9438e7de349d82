//! Union-find over vertex slots, used to count connected components.
//!
//! Union by rank with path halving. Ties in rank resolve towards the smaller
//! root so that the structure evolves identically for identical inputs.

pub(super) struct UnionFind {
    parents: Vec<usize>,
    ranks: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            parents: (0..node_count).collect(),
            ranks: vec![0; node_count],
            components: node_count,
        }
    }

    pub(super) const fn components(&self) -> usize {
        self.components
    }

    /// Merges the sets holding `left` and `right`. Returns `false` when they
    /// already shared a set.
    pub(super) fn try_union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.ranks[left_root];
        let right_rank = self.ranks[right_root];
        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parents[child] = parent;
        if left_rank == right_rank {
            self.ranks[parent] += 1;
        }
        self.components -= 1;
        true
    }

    fn find(&mut self, node: usize) -> usize {
        let mut current = node;
        loop {
            let parent = self.parents[current];
            if parent == current {
                return current;
            }
            let grandparent = self.parents[parent];
            self.parents[current] = grandparent;
            current = grandparent;
        }
    }
}

fn ordered(first: usize, second: usize) -> (usize, usize) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }
    ordered(left_root, right_root)
}
