//! Whitespace token reader with positioned errors

use std::str::{FromStr, SplitWhitespace};

use anyhow::{anyhow, Context, Result};

use crate::NodeId;

/// Sequential reader over whitespace-separated tokens.
#[derive(Debug)]
pub(crate) struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    /// 1-based position of the last token handed out.
    position: usize,
    index_base: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(input: &'a str, index_base: usize) -> Self {
        Self {
            inner: input.split_whitespace(),
            position: 0,
            index_base,
        }
    }

    /// Next token parsed as `T`.
    pub(crate) fn number<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let token = self
            .inner
            .next()
            .ok_or_else(|| anyhow!("unexpected end of input: missing {}", what))?;
        self.position += 1;
        token
            .parse()
            .with_context(|| format!("invalid {} '{}' at token {}", what, token, self.position))
    }

    /// Next token as a node number, shifted to 0-based.
    pub(crate) fn node(&mut self, what: &str) -> Result<NodeId> {
        let value: usize = self.number(what)?;
        value.checked_sub(self.index_base).ok_or_else(|| {
            anyhow!(
                "{} {} at token {} is below the first node number {}",
                what,
                value,
                self.position,
                self.index_base
            )
        })
    }

    /// Count of unread tokens. Consumes the reader.
    pub(crate) fn remaining(self) -> usize {
        self.inner.count()
    }
}
