//! Python bindings that expose the weighted tree via PyO3.
use pyo3::{
    exceptions::{PyIndexError, PyMemoryError, PyRuntimeError, PyValueError},
    prelude::*,
    types::PyModule,
};

use crate::tree::{StagedTree, TreeError};
use crate::{Distance, NodeId, Weight};

/// Python-facing tree: add edges, preprocess once, then query.
#[pyclass]
#[derive(Debug)]
pub struct PyLiftTree {
    inner: StagedTree,
}

#[pymethods]
impl PyLiftTree {
    #[new]
    /// Create an empty tree with `node_count` nodes (0-based ids).
    pub fn new(node_count: usize) -> PyResult<Self> {
        let inner = StagedTree::create(node_count).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Add an undirected edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> PyResult<()> {
        self.inner.add_edge(a, b, weight).map_err(to_py_err)
    }

    /// Build the query tables. Must be called once, after all edges.
    pub fn preprocess(&mut self) -> PyResult<()> {
        self.inner.preprocess().map_err(to_py_err)
    }

    /// True if `u` is a strict ancestor of `v`.
    pub fn is_ancestor(&self, u: NodeId, v: NodeId) -> PyResult<bool> {
        self.inner.is_ancestor(u, v).map_err(to_py_err)
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn find_lca(&self, u: NodeId, v: NodeId) -> PyResult<NodeId> {
        self.inner.find_lca(u, v).map_err(to_py_err)
    }

    /// Weighted path distance between `u` and `v`.
    pub fn find_distance(&self, u: NodeId, v: NodeId) -> PyResult<Distance> {
        self.inner.find_distance(u, v).map_err(to_py_err)
    }

    /// Answer many distance queries at once.
    ///
    /// Args:
    ///     pairs: List of `(u, v)` tuples.
    ///
    /// Returns:
    ///     List of distances in input order.
    pub fn find_distances(&self, pairs: Vec<(NodeId, NodeId)>) -> PyResult<Vec<Distance>> {
        let tree = self.inner.tree().map_err(to_py_err)?;
        pairs
            .into_iter()
            .map(|(u, v)| tree.find_distance(u, v).map_err(to_py_err))
            .collect()
    }
}

fn to_py_err(err: TreeError) -> PyErr {
    match err {
        TreeError::NodeOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        TreeError::TooLarge { .. } => PyMemoryError::new_err(err.to_string()),
        TreeError::NotPreprocessed | TreeError::AlreadyPreprocessed => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Create Python module.
#[pymodule]
pub fn lift_tree_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLiftTree>()?;
    Ok(())
}
