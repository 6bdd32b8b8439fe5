//! Euler tour timestamps
//!
//! Every node gets an entry time (preorder rank) and an exit time
//! (postorder rank) from two independent counters. Ancestry is then
//! interval containment:
//!
//!   u is a strict ancestor of v  ⇔  in(u) < in(v) ∧ out(u) > out(v)
//!
//! Only this containment relation is guaranteed. The counters are
//! independent, so `in(v) < out(v)` does not hold in general: a leaf
//! entered late can exit early (node 2 in the test fixture has in 3, out 2).

use crate::NodeId;

/// Entry/exit timestamps for every node, indexed by node id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct EulerTimes {
    in_times: Vec<usize>,
    out_times: Vec<usize>,
}

impl EulerTimes {
    pub(crate) fn new(node_count: usize) -> Self {
        Self {
            in_times: vec![0; node_count],
            out_times: vec![0; node_count],
        }
    }

    pub(crate) fn enter(&mut self, node: NodeId, time: usize) {
        self.in_times[node] = time;
    }

    pub(crate) fn exit(&mut self, node: NodeId, time: usize) {
        self.out_times[node] = time;
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.in_times.len()
    }

    /// True if no node is covered.
    pub fn is_empty(&self) -> bool {
        self.in_times.is_empty()
    }

    /// Entry time of `node`.
    #[inline]
    pub fn in_time(&self, node: NodeId) -> usize {
        self.in_times[node]
    }

    /// Exit time of `node`.
    #[inline]
    pub fn out_time(&self, node: NodeId) -> usize {
        self.out_times[node]
    }

    /// Strict ancestry test. Always false for `u == v`.
    #[inline]
    pub fn is_ancestor(&self, u: NodeId, v: NodeId) -> bool {
        self.in_times[u] < self.in_times[v] && self.out_times[u] > self.out_times[v]
    }

    pub(crate) fn hash_into(&self, hasher: &mut blake3::Hasher) {
        for (&enter, &exit) in self.in_times.iter().zip(&self.out_times) {
            hasher.update(&(enter as u64).to_le_bytes());
            hasher.update(&(exit as u64).to_le_bytes());
        }
    }
}
