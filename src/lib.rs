//! # Weighted tree queries via Euler tours and binary lifting
//!
//! This library answers two questions about a fixed, weighted, rooted tree
//! after a single linear-logarithmic preprocessing pass:
//!
//! - "is `u` an ancestor of `v`?" in O(1)
//! - "what is the shortest-path distance between `u` and `v`?" in O(log N)
//!
//! ## Core Algorithm
//!
//! 1. **Euler timestamps**: one depth-first pass assigns entry/exit times, so
//!    ancestry becomes interval containment
//! 2. **Binary lifting**: the same pass fills, for every node, its 2^j-th
//!    ancestor and the accumulated edge weight to reach it
//! 3. **LCA by greedy jumps**: climb from `u` as high as possible while staying
//!    strictly below the common ancestor, then take one final step
//! 4. **Distance via LCA**: sum the lifted weights from both endpoints to the LCA
//!
//! ## Usage Example
//!
//! ```
//! use lift_tree::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new(6)?;
//! for &(a, b, w) in &[(0, 1, 7), (1, 2, 3), (1, 3, 6), (3, 4, 3), (4, 5, 1)] {
//!     builder.add_edge(a, b, w)?;
//! }
//! let tree = builder.preprocess()?;
//!
//! assert_eq!(tree.find_distance(0, 5)?, 17);
//! assert_eq!(tree.find_lca(5, 2)?, 1);
//! # Ok::<(), lift_tree::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod tree;   // Euler timer, lift table and query engines
pub mod driver; // Stream protocol: edge list + query list in, answers out
/// Python bindings for exposing the tree to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use tree::{Edge, EulerTimes, LiftTable, StagedTree, Tree, TreeBuilder, TreeError};
pub use driver::{DriverConfig, Problem, QueryMode};

/// Node index, 0-based. Node 0 is always the root.
pub type NodeId = usize;

/// Edge weight.
pub type Weight = u32;

/// Accumulated path weight.
///
/// Wide enough that `(N - 1) * Weight::MAX` never overflows.
pub type Distance = u64;

/// Number of lifting levels for `node_count` nodes: `ceil(log2(N))`, at least 1.
pub fn level_count(node_count: usize) -> usize {
    if node_count <= 2 {
        return 1;
    }
    (usize::BITS - (node_count - 1).leading_zeros()) as usize
}
