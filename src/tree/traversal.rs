//! Explicit-stack DFS
//!
//! One preorder/postorder pass from the root fills the Euler timestamps, the
//! lift table and node depths together. Recursion is replaced by a stack of
//! frames so near-linear trees of tens of thousands of nodes cannot exhaust
//! the call stack.
//!
//! Timer state lives in [`BuildContext`], which is consumed by
//! [`BuildContext::run`]; nothing about a traversal in progress survives the
//! build.

use bitvec::vec::BitVec;

use super::{EulerTimes, LiftTable};
use crate::{NodeId, Weight};

/// One pending node on the DFS stack.
///
/// `cursor` is the position of the next adjacency entry to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    cursor: usize,
}

/// Transient state of a single preprocessing pass.
#[derive(Debug)]
pub(crate) struct BuildContext<'a> {
    adjacency: &'a [Vec<(NodeId, Weight)>],
    in_timer: usize,
    out_timer: usize,
    visited: BitVec,
    stack: Vec<Frame>,
    times: EulerTimes,
    lift: LiftTable,
    depths: Vec<usize>,
}

/// Tables produced by a completed pass.
#[derive(Debug)]
pub(crate) struct TraversalOutput {
    pub times: EulerTimes,
    pub lift: LiftTable,
    pub depths: Vec<usize>,
    /// Marks every node reached from the root.
    pub visited: BitVec,
}

impl<'a> BuildContext<'a> {
    pub(crate) fn new(adjacency: &'a [Vec<(NodeId, Weight)>], levels: usize) -> Self {
        let node_count = adjacency.len();
        Self {
            adjacency,
            in_timer: 0,
            out_timer: 0,
            visited: BitVec::repeat(false, node_count),
            stack: Vec::new(),
            times: EulerTimes::new(node_count),
            lift: LiftTable::new(node_count, levels),
            depths: vec![0; node_count],
        }
    }

    /// Traverse from `root` and hand back the filled tables.
    pub(crate) fn run(mut self, root: NodeId) -> TraversalOutput {
        let adjacency = self.adjacency;
        self.enter(root, root, 0);

        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            let edges = &adjacency[node];

            // Advance past neighbours already on the path (only the parent in
            // a tree; revisits in a malformed graph are skipped the same way).
            let mut next = None;
            while frame.cursor < edges.len() {
                let (child, weight) = edges[frame.cursor];
                frame.cursor += 1;
                if !self.visited[child] {
                    next = Some((child, weight));
                    break;
                }
            }

            match next {
                Some((child, weight)) => self.enter(child, node, weight),
                None => {
                    self.stack.pop();
                    self.times.exit(node, self.out_timer);
                    self.out_timer += 1;
                }
            }
        }

        TraversalOutput {
            times: self.times,
            lift: self.lift,
            depths: self.depths,
            visited: self.visited,
        }
    }

    fn enter(&mut self, node: NodeId, parent: NodeId, weight: Weight) {
        self.visited.set(node, true);
        self.times.enter(node, self.in_timer);
        self.in_timer += 1;
        self.lift.fill_row(node, parent, weight);
        if node != parent {
            self.depths[node] = self.depths[parent] + 1;
        }
        self.stack.push(Frame { node, cursor: 0 });
    }

    /// Current stack depth (number of open frames).
    #[cfg(test)]
    fn depth(&self) -> usize {
        self.stack.len()
    }
}
