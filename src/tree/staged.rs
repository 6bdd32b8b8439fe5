//! Runtime-checked build/query lifecycle
//!
//! [`TreeBuilder`] and [`Tree`] split the phases at the type level. Callers
//! that need a single handle (bindings, drivers holding state across
//! commands) use [`StagedTree`] instead, which rejects queries before
//! preprocessing and mutation after it.

use tracing::debug;

use super::{Tree, TreeBuilder, TreeError};
use crate::{Distance, NodeId, Weight};

/// A tree that is either still collecting edges or fully preprocessed.
#[derive(Debug, Clone)]
pub enum StagedTree {
    /// Build phase: edges may be added.
    Building(TreeBuilder),
    /// Query phase: immutable.
    Ready(Tree),
}

impl StagedTree {
    /// Start the build phase for `node_count` nodes.
    pub fn create(node_count: usize) -> Result<Self, TreeError> {
        Ok(Self::Building(TreeBuilder::new(node_count)?))
    }

    /// Register one undirected edge. Fails once preprocessed.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), TreeError> {
        match self {
            Self::Building(builder) => builder.add_edge(a, b, weight),
            Self::Ready(_) => Err(TreeError::AlreadyPreprocessed),
        }
    }

    /// Build the query tables. Callable exactly once, after all edges.
    ///
    /// On failure the handle stays in the build phase with its edges intact.
    pub fn preprocess(&mut self) -> Result<(), TreeError> {
        let tree = match self {
            Self::Building(builder) => builder.preprocess()?,
            Self::Ready(_) => return Err(TreeError::AlreadyPreprocessed),
        };
        debug!(node_count = tree.node_count(), "staged tree frozen");
        *self = Self::Ready(tree);
        Ok(())
    }

    /// True once [`StagedTree::preprocess`] has succeeded.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The frozen tree, or [`TreeError::NotPreprocessed`].
    pub fn tree(&self) -> Result<&Tree, TreeError> {
        match self {
            Self::Ready(tree) => Ok(tree),
            Self::Building(_) => Err(TreeError::NotPreprocessed),
        }
    }

    /// See [`Tree::is_ancestor`].
    pub fn is_ancestor(&self, u: NodeId, v: NodeId) -> Result<bool, TreeError> {
        self.tree()?.is_ancestor(u, v)
    }

    /// See [`Tree::find_lca`].
    pub fn find_lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, TreeError> {
        self.tree()?.find_lca(u, v)
    }

    /// See [`Tree::find_distance`].
    pub fn find_distance(&self, u: NodeId, v: NodeId) -> Result<Distance, TreeError> {
        self.tree()?.find_distance(u, v)
    }
}

impl From<Tree> for StagedTree {
    fn from(tree: Tree) -> Self {
        Self::Ready(tree)
    }
}
