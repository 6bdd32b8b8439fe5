//! Binary lift table
//!
//! Row v, column j holds the 2^j-th ancestor of v and the summed edge
//! weight to reach it. Stored as two flat arenas of `node_count * levels`
//! entries, row-major.
//!
//! Recurrence (filled in preorder, so the parent's row is final first):
//!   up[v][0]   = parent(v)             dist[v][0]   = w(parent(v), v)
//!   up[v][j]   = up[up[v][j-1]][j-1]   dist[v][j]   = dist[v][j-1] + dist[up[v][j-1]][j-1]
//!
//! The root is its own parent at distance 0, so jumps past the root saturate
//! there instead of leaving the table.

use crate::{Distance, NodeId, Weight};

/// Powers-of-two ancestor and accumulated-weight table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftTable {
    levels: usize,
    ancestors: Vec<NodeId>,
    distances: Vec<Distance>,
}

impl LiftTable {
    pub(crate) fn new(node_count: usize, levels: usize) -> Self {
        debug_assert!(levels >= 1, "lift table needs at least one level");
        Self {
            levels,
            ancestors: vec![0; node_count * levels],
            distances: vec![0; node_count * levels],
        }
    }

    /// Fill the row of `node`. The row of `parent` must already be filled,
    /// unless `parent == node` (the root).
    pub(crate) fn fill_row(&mut self, node: NodeId, parent: NodeId, weight: Weight) {
        let base = node * self.levels;
        self.ancestors[base] = parent;
        self.distances[base] = Distance::from(weight);

        for j in 1..self.levels {
            let mid = self.ancestors[base + j - 1];
            let mid_slot = mid * self.levels + j - 1;
            self.ancestors[base + j] = self.ancestors[mid_slot];
            self.distances[base + j] = self.distances[base + j - 1] + self.distances[mid_slot];
        }
    }

    /// Number of levels L.
    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// 2^`level`-th ancestor of `node` (saturating at the root).
    #[inline]
    pub fn ancestor(&self, node: NodeId, level: usize) -> NodeId {
        self.ancestors[node * self.levels + level]
    }

    /// Weight of the path from `node` to [`LiftTable::ancestor`]`(node, level)`.
    #[inline]
    pub fn distance(&self, node: NodeId, level: usize) -> Distance {
        self.distances[node * self.levels + level]
    }

    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        hasher.update(&(self.levels as u64).to_le_bytes());
        for (&up, &dist) in self.ancestors.iter().zip(&self.distances) {
            hasher.update(&(up as u64).to_le_bytes());
            hasher.update(&dist.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_rows() {
        // 0 -1- 1 -2- 2 -3- 3 -4- 4, filled in root-to-leaf order
        let mut table = LiftTable::new(5, 3);
        table.fill_row(0, 0, 0);
        for v in 1..5 {
            table.fill_row(v, v - 1, v as Weight);
        }

        assert_eq!(table.ancestor(4, 0), 3);
        assert_eq!(table.distance(4, 0), 4);
        assert_eq!(table.ancestor(4, 1), 2);
        assert_eq!(table.distance(4, 1), 4 + 3);
        assert_eq!(table.ancestor(4, 2), 0);
        assert_eq!(table.distance(4, 2), 4 + 3 + 2 + 1);
    }

    #[test]
    fn test_root_saturates() {
        let mut table = LiftTable::new(3, 2);
        table.fill_row(0, 0, 0);
        table.fill_row(1, 0, 5);
        table.fill_row(2, 1, 9);

        for j in 0..table.levels() {
            assert_eq!(table.ancestor(0, j), 0);
            assert_eq!(table.distance(0, j), 0);
        }
        // Jumping 2 from node 1 overshoots the root and stays there.
        assert_eq!(table.ancestor(1, 1), 0);
        assert_eq!(table.distance(1, 1), 5);
        assert_eq!(table.ancestor(2, 1), 0);
        assert_eq!(table.distance(2, 1), 14);
    }
}
