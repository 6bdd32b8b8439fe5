//! Preprocessed weighted tree
//!
//! Lifecycle: a [`TreeBuilder`] collects exactly N−1 undirected edges, then
//! [`TreeBuilder::preprocess`] runs one explicit-stack DFS from node 0 and
//! yields a frozen [`Tree`]. A `Tree` has no mutating methods, so it can be
//! shared across threads for read-only queries without locking.
//!
//! Storage is arena-style: every per-node table is a flat vector indexed by
//! node id.

mod builder;
mod euler;
mod lift;
mod query;
mod staged;
mod traversal;

pub use builder::TreeBuilder;
pub use euler::EulerTimes;
pub use lift::LiftTable;
pub use staged::StagedTree;

use crate::{NodeId, Weight};
use thiserror::Error;

/// Errors raised while building or querying a [`Tree`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A tree must have at least one node.
    #[error("tree must have at least one node")]
    EmptyTree,

    /// Per-node tables for this many nodes cannot be allocated.
    #[error("cannot allocate a tree of {node_count} nodes")]
    TooLarge {
        /// Requested number of nodes.
        node_count: usize,
    },

    /// Node index outside `[0, node_count)`.
    #[error("node {node} out of range for tree of {node_count} nodes")]
    NodeOutOfRange {
        /// Offending index.
        node: NodeId,
        /// Number of nodes in the tree.
        node_count: usize,
    },

    /// Edge from a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// Node at both ends of the edge.
        node: NodeId,
    },

    /// More than N−1 edges were added.
    #[error("tree of {node_count} nodes already has all its edges")]
    TooManyEdges {
        /// Number of nodes in the tree.
        node_count: usize,
    },

    /// Preprocessing found the wrong number of edges.
    #[error("expected {expected} edges, got {actual}")]
    EdgeCountMismatch {
        /// N−1.
        expected: usize,
        /// Edges actually added.
        actual: usize,
    },

    /// Some nodes are not reachable from the root. With N−1 edges this also
    /// covers cycles and duplicate edges.
    #[error("node {node} is not connected to the root ({unreached} nodes unreached)")]
    Disconnected {
        /// Lowest-numbered unreachable node.
        node: NodeId,
        /// Total unreachable nodes.
        unreached: usize,
    },

    /// `distance_to_ancestor` called with a node that is not above `node`.
    #[error("node {ancestor} is not an ancestor of node {node}")]
    NotAnAncestor {
        /// Claimed ancestor.
        ancestor: NodeId,
        /// Descendant.
        node: NodeId,
    },

    /// Query issued before preprocessing completed.
    #[error("tree has not been preprocessed")]
    NotPreprocessed,

    /// Edge added or preprocessing repeated after the tree was built.
    #[error("tree is already preprocessed and immutable")]
    AlreadyPreprocessed,
}

/// Undirected weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Edge {
    /// First endpoint.
    pub a: NodeId,
    /// Second endpoint.
    pub b: NodeId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create an edge.
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Self {
        Self { a, b, weight }
    }
}

impl From<(NodeId, NodeId, Weight)> for Edge {
    fn from((a, b, weight): (NodeId, NodeId, Weight)) -> Self {
        Self::new(a, b, weight)
    }
}

/// Query-ready tree rooted at node 0.
///
/// Built only through [`TreeBuilder::preprocess`]; immutable afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    node_count: usize,
    times: EulerTimes,
    lift: LiftTable,
    depths: Vec<usize>,
}

impl Tree {
    /// Root of every tree.
    pub const ROOT: NodeId = 0;

    /// Number of nodes N.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of lifting levels L = ceil(log2(N)), at least 1.
    pub fn levels(&self) -> usize {
        self.lift.levels()
    }

    /// Root node (always 0).
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Euler timestamps of all nodes.
    pub fn euler_times(&self) -> &EulerTimes {
        &self.times
    }

    /// Binary lift table of all nodes.
    pub fn lift_table(&self) -> &LiftTable {
        &self.lift
    }

    /// Content hash of every preprocessed table.
    ///
    /// Identical edge lists in identical order always hash identically.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.node_count as u64).to_le_bytes());
        self.times.hash_into(&mut hasher);
        self.lift.hash_into(&mut hasher);
        for &depth in &self.depths {
            hasher.update(&(depth as u64).to_le_bytes());
        }
        hasher.finalize()
    }

    fn check_node(&self, node: NodeId) -> Result<(), TreeError> {
        if node < self.node_count {
            Ok(())
        } else {
            Err(TreeError::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }
}
