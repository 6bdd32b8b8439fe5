//! Build phase: edge collection and preprocessing

use tracing::{debug, trace, warn};

use super::traversal::BuildContext;
use super::{Edge, Tree, TreeError};
use crate::{level_count, NodeId, Weight};

/// Collects the edges of a tree before preprocessing.
///
/// Adjacency is kept as one vector per node in insertion order, which fixes
/// the DFS child order and therefore the timestamps.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    edge_count: usize,
}

impl TreeBuilder {
    /// Allocate a builder for `node_count` nodes.
    pub fn new(node_count: usize) -> Result<Self, TreeError> {
        if node_count == 0 {
            return Err(TreeError::EmptyTree);
        }
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(node_count)
            .map_err(|_| TreeError::TooLarge { node_count })?;
        adjacency.resize_with(node_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Builder pre-populated from an edge list.
    pub fn with_edges<I, E>(node_count: usize, edges: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut builder = Self::new(node_count)?;
        for edge in edges {
            let edge = edge.into();
            builder.add_edge(edge.a, edge.b, edge.weight)?;
        }
        Ok(builder)
    }

    /// Number of nodes N.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Register one undirected edge.
    ///
    /// Rejects out-of-range endpoints, self-loops, and any edge beyond the
    /// N−1 a tree can hold. Duplicate edges and cycles are caught later by
    /// [`TreeBuilder::preprocess`].
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<(), TreeError> {
        let node_count = self.node_count();
        for node in [a, b] {
            if node >= node_count {
                return Err(TreeError::NodeOutOfRange { node, node_count });
            }
        }
        if a == b {
            return Err(TreeError::SelfLoop { node: a });
        }
        if self.edge_count + 1 >= node_count {
            return Err(TreeError::TooManyEdges { node_count });
        }

        trace!(a, b, weight, "add edge");
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Run the Euler timer and fill the lift table from root 0.
    ///
    /// Requires exactly N−1 edges forming one connected tree. The builder is
    /// left untouched; the returned [`Tree`] owns its own tables and cannot
    /// observe later edge additions.
    pub fn preprocess(&self) -> Result<Tree, TreeError> {
        let node_count = self.node_count();
        let expected = node_count - 1;
        if self.edge_count != expected {
            warn!(expected, actual = self.edge_count, "rejecting build: wrong edge count");
            return Err(TreeError::EdgeCountMismatch {
                expected,
                actual: self.edge_count,
            });
        }

        let levels = level_count(node_count);
        debug!(node_count, levels, "preprocessing tree");

        let output = BuildContext::new(&self.adjacency, levels).run(Tree::ROOT);

        if let Some(node) = output.visited.first_zero() {
            let unreached = output.visited.count_zeros();
            warn!(node, unreached, "rejecting build: tree is disconnected");
            return Err(TreeError::Disconnected { node, unreached });
        }

        debug!(node_count, "preprocessing complete");
        Ok(Tree {
            node_count,
            times: output.times,
            lift: output.lift,
            depths: output.depths,
        })
    }
}
