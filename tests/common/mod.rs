//! Shared fixtures: random tree generation and a naive parent-chain oracle.

#![allow(dead_code)]

use std::collections::VecDeque;

use lift_tree::{Distance, Edge, NodeId, Tree, TreeBuilder, Weight};
use proptest::prelude::*;

/// The 6-node tree from the protocol example, 0-based.
pub const CANONICAL_EDGES: [(NodeId, NodeId, Weight); 5] =
    [(0, 1, 7), (1, 2, 3), (1, 3, 6), (3, 4, 3), (4, 5, 1)];

pub fn canonical_tree() -> Tree {
    build(6, &CANONICAL_EDGES.map(Edge::from))
}

pub fn build(node_count: usize, edges: &[Edge]) -> Tree {
    TreeBuilder::with_edges(node_count, edges.iter().copied())
        .expect("edges are valid")
        .preprocess()
        .expect("edges form a tree")
}

/// Path 0 - 1 - ... - (n-1), every edge weighted `weight`.
pub fn chain_edges(node_count: usize, weight: Weight) -> Vec<Edge> {
    (1..node_count).map(|v| Edge::new(v - 1, v, weight)).collect()
}

/// Random tree on up to `max_nodes` nodes with shuffled labels, random edge
/// orientation and weights below 1000.
pub fn arb_tree(max_nodes: usize) -> impl Strategy<Value = (usize, Vec<Edge>)> {
    (1..=max_nodes)
        .prop_flat_map(|n| {
            let parents: Vec<_> = (1..n).map(|i| 0..i).collect();
            let weights = proptest::collection::vec(0u32..1_000, n - 1);
            let flips = proptest::collection::vec(any::<bool>(), n - 1);
            let labels = Just((0..n).collect::<Vec<NodeId>>()).prop_shuffle();
            (Just(n), parents, weights, flips, labels)
        })
        .prop_map(|(n, parents, weights, flips, labels)| {
            let edges: Vec<Edge> = parents
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    let (a, b) = (labels[i + 1], labels[p]);
                    if flips[i] {
                        Edge::new(b, a, weights[i])
                    } else {
                        Edge::new(a, b, weights[i])
                    }
                })
                .collect();
            (n, edges)
        })
}

/// Reference answers computed by walking parent pointers.
#[derive(Debug)]
pub struct Oracle {
    parent: Vec<NodeId>,
    depth: Vec<usize>,
    root_distance: Vec<Distance>,
}

impl Oracle {
    pub fn new(node_count: usize, edges: &[Edge]) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for edge in edges {
            adjacency[edge.a].push((edge.b, edge.weight));
            adjacency[edge.b].push((edge.a, edge.weight));
        }

        let mut parent = vec![usize::MAX; node_count];
        let mut depth = vec![0; node_count];
        let mut root_distance = vec![0; node_count];
        parent[0] = 0;

        let mut queue = VecDeque::from([0]);
        while let Some(v) = queue.pop_front() {
            for &(w, weight) in &adjacency[v] {
                if parent[w] == usize::MAX {
                    parent[w] = v;
                    depth[w] = depth[v] + 1;
                    root_distance[w] = root_distance[v] + Distance::from(weight);
                    queue.push_back(w);
                }
            }
        }

        Self {
            parent,
            depth,
            root_distance,
        }
    }

    pub fn is_ancestor(&self, u: NodeId, v: NodeId) -> bool {
        let mut node = v;
        while node != 0 {
            node = self.parent[node];
            if node == u {
                return true;
            }
        }
        false
    }

    pub fn lca(&self, mut u: NodeId, mut v: NodeId) -> NodeId {
        while self.depth[u] > self.depth[v] {
            u = self.parent[u];
        }
        while self.depth[v] > self.depth[u] {
            v = self.parent[v];
        }
        while u != v {
            u = self.parent[u];
            v = self.parent[v];
        }
        u
    }

    pub fn distance(&self, u: NodeId, v: NodeId) -> Distance {
        let lca = self.lca(u, v);
        self.root_distance[u] + self.root_distance[v] - 2 * self.root_distance[lca]
    }

    pub fn depth(&self, v: NodeId) -> usize {
        self.depth[v]
    }
}
