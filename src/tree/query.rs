//! Ancestor, LCA and distance queries
//!
//! All queries read the precomputed tables only; no traversal happens after
//! preprocessing.
//!
//! - `is_ancestor`: O(1) interval containment
//! - `find_lca`, `distance_to_ancestor`, `find_distance`, `kth_ancestor`:
//!   O(log N) greedy binary-lift jumps

use super::{Tree, TreeError};
use crate::{Distance, NodeId};

impl Tree {
    /// True iff `u` is a strict ancestor of `v`. False when `u == v`.
    pub fn is_ancestor(&self, u: NodeId, v: NodeId) -> Result<bool, TreeError> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.times.is_ancestor(u, v))
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn find_lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, TreeError> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.lca_unchecked(u, v))
    }

    /// Path weight from `v` up to its ancestor `a` (0 when `v == a`).
    pub fn distance_to_ancestor(&self, v: NodeId, a: NodeId) -> Result<Distance, TreeError> {
        self.check_node(v)?;
        self.check_node(a)?;
        if v != a && !self.times.is_ancestor(a, v) {
            return Err(TreeError::NotAnAncestor { ancestor: a, node: v });
        }
        Ok(self.climb_distance(v, a))
    }

    /// Shortest-path distance between `u` and `v`.
    pub fn find_distance(&self, u: NodeId, v: NodeId) -> Result<Distance, TreeError> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Ok(0);
        }
        let lca = self.lca_unchecked(u, v);
        Ok(self.climb_distance(u, lca) + self.climb_distance(v, lca))
    }

    /// Parent of `v`, or `None` for the root.
    pub fn parent(&self, v: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.check_node(v)?;
        Ok((v != Self::ROOT).then(|| self.lift.ancestor(v, 0)))
    }

    /// Number of edges between `v` and the root.
    pub fn depth(&self, v: NodeId) -> Result<usize, TreeError> {
        self.check_node(v)?;
        Ok(self.depths[v])
    }

    /// The `k`-th ancestor of `v` (`k = 0` is `v` itself), or `None` if `v`
    /// is fewer than `k` edges below the root.
    pub fn kth_ancestor(&self, v: NodeId, k: usize) -> Result<Option<NodeId>, TreeError> {
        self.check_node(v)?;
        if k > self.depths[v] {
            return Ok(None);
        }
        // k <= depth < 2^L, so every set bit of k has a table column.
        let mut node = v;
        for j in 0..self.levels() {
            if k & (1 << j) != 0 {
                node = self.lift.ancestor(node, j);
            }
        }
        Ok(Some(node))
    }

    /// `(in_time, out_time)` of `v`.
    pub fn timestamps(&self, v: NodeId) -> Result<(usize, usize), TreeError> {
        self.check_node(v)?;
        Ok((self.times.in_time(v), self.times.out_time(v)))
    }

    fn lca_unchecked(&self, u: NodeId, v: NodeId) -> NodeId {
        if u == v || self.times.is_ancestor(u, v) {
            return u;
        }
        if self.times.is_ancestor(v, u) {
            return v;
        }

        // Invariant: u stays a strict descendant of the LCA.
        let mut u = u;
        for j in (0..self.levels()).rev() {
            let up = self.lift.ancestor(u, j);
            if !self.times.is_ancestor(up, v) {
                u = up;
            }
        }
        self.lift.ancestor(u, 0)
    }

    /// Requires `a == v` or `a` a strict ancestor of `v`.
    fn climb_distance(&self, v: NodeId, a: NodeId) -> Distance {
        if v == a {
            return 0;
        }

        // Invariant: v stays a strict descendant of a.
        let mut v = v;
        let mut total = 0;
        for j in (0..self.levels()).rev() {
            let up = self.lift.ancestor(v, j);
            if self.times.is_ancestor(a, up) {
                total += self.lift.distance(v, j);
                v = up;
            }
        }
        total + self.lift.distance(v, 0)
    }
}
