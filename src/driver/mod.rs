//! Stream protocol driver
//!
//! Input is a whitespace-separated token stream:
//!
//! ```text
//! N
//! a b w      (N - 1 times, endpoints in external numbering)
//! M
//! u v        (M times)
//! ```
//!
//! Each query pair is answered with one integer per line, in input order:
//! the path distance, or the LCA in external numbering.

mod tokens;

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::tree::{Edge, Tree, TreeBuilder};
use crate::NodeId;
use tokens::Tokens;

/// What each query pair is answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Weighted path distance between the two nodes.
    #[default]
    Distance,
    /// Lowest common ancestor of the two nodes.
    Lca,
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Answer kind.
    pub mode: QueryMode,
    /// Number of the first node in external numbering (1 in the reference
    /// protocol, 0 for internal numbering).
    pub index_base: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            mode: QueryMode::Distance,
            index_base: 1,
        }
    }
}

impl DriverConfig {
    /// Default config answering with `mode`.
    pub fn with_mode(mode: QueryMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

/// A parsed input: tree edges and query pairs, both in 0-based numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Number of nodes N.
    pub node_count: usize,
    /// N - 1 edges.
    pub edges: Vec<Edge>,
    /// Query pairs.
    pub queries: Vec<(NodeId, NodeId)>,
}

impl Problem {
    /// Parse a complete input using `index_base` for node numbers.
    pub fn parse(input: &str, index_base: usize) -> Result<Self> {
        let mut tokens = Tokens::new(input, index_base);

        let node_count: usize = tokens.number("node count")?;
        let edge_total = node_count.saturating_sub(1);
        // Counts come from the input; size vectors by tokens actually read.
        let mut edges = Vec::new();
        for i in 0..edge_total {
            let a = tokens.node("edge endpoint")?;
            let b = tokens.node("edge endpoint")?;
            let weight = tokens
                .number("edge weight")
                .with_context(|| format!("edge {} of {}", i + 1, edge_total))?;
            edges.push(Edge::new(a, b, weight));
        }

        let query_total: usize = tokens.number("query count")?;
        let mut queries = Vec::new();
        for i in 0..query_total {
            let u = tokens
                .node("query node")
                .with_context(|| format!("query {} of {}", i + 1, query_total))?;
            let v = tokens
                .node("query node")
                .with_context(|| format!("query {} of {}", i + 1, query_total))?;
            queries.push((u, v));
        }

        let trailing = tokens.remaining();
        if trailing > 0 {
            warn!(trailing, "ignoring tokens after the last query");
        }

        debug!(node_count, queries = queries.len(), "parsed input");
        Ok(Self {
            node_count,
            edges,
            queries,
        })
    }

    /// Read the whole stream, then [`Problem::parse`] it.
    pub fn read_from<R: Read>(mut reader: R, index_base: usize) -> Result<Self> {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("failed to read input")?;
        Self::parse(&input, index_base)
    }

    /// Build and preprocess the tree described by the edges.
    pub fn build_tree(&self) -> Result<Tree> {
        let builder = TreeBuilder::with_edges(self.node_count, self.edges.iter().copied())
            .context("invalid edge list")?;
        let tree = builder.preprocess().context("edge list is not a tree")?;
        Ok(tree)
    }

    /// Answer every query in input order.
    pub fn answer(&self, config: &DriverConfig) -> Result<Vec<u64>> {
        let tree = self.build_tree()?;
        let base = config.index_base;

        let mut answers = Vec::with_capacity(self.queries.len());
        for (i, &(u, v)) in self.queries.iter().enumerate() {
            let answer = match config.mode {
                QueryMode::Distance => tree.find_distance(u, v),
                QueryMode::Lca => tree.find_lca(u, v).map(|lca| (lca + base) as u64),
            }
            .with_context(|| format!("query {} ({}, {})", i + 1, u + base, v + base))?;
            answers.push(answer);
        }
        Ok(answers)
    }
}

/// Read a problem from `reader` and write one answer per line to `writer`.
pub fn run<R: Read, W: Write>(reader: R, mut writer: W, config: &DriverConfig) -> Result<()> {
    let problem = Problem::read_from(reader, config.index_base)?;
    for answer in problem.answer(config)? {
        writeln!(writer, "{}", answer).context("failed to write answer")?;
    }
    writer.flush().context("failed to flush output")?;
    Ok(())
}
