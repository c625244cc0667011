// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prefix trees over a symbol alphabet.
//!
//! The [`Trie`] trait is the capability contract the automaton is written
//! against. It groups three families of operations:
//! - Dictionary: insert patterns, look up the patterns ending at a node
//! - Tree: root, child transitions, parent and incoming symbol
//! - Path: walk a symbol sequence, rebuild the sequence spelled by a node
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Identifiers are
//! assigned once and never reused, so per-node tables (such as the
//! automaton's link table) can be flat vectors indexed by identifier.

pub mod alphabet;
pub mod arena;
pub mod edges;

use std::fmt;

pub use alphabet::{Alphabet, Bytes, Lowercase};
pub use arena::{ArenaTrie, DenseTrie, SparseTrie};
pub use edges::{DenseEdges, EdgeMap, SparseEdges};

/// Index of a pattern in insertion order, starting at zero.
pub type PatternId = usize;

/// Identifier of a trie node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node, present in every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of this node in per-node tables.
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised while building or querying a trie.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// Zero-length patterns cannot be stored.
    #[error("empty pattern")]
    EmptyPattern,

    /// A symbol has no slot in the trie's closed alphabet.
    #[error("symbol {symbol} at offset {offset} is outside the {alphabet} alphabet")]
    OutOfAlphabet {
        symbol: String,
        offset: usize,
        alphabet: &'static str,
    },

    /// No pattern was ever inserted with this index.
    #[error("unknown pattern index {index} (dictionary holds {size})")]
    UnknownPattern { index: PatternId, size: usize },
}

/// Capability contract of a prefix tree.
///
/// `next` reports a missing edge by returning its input node unchanged;
/// callers compare identities to tell "no edge" from "moved".
pub trait Trie {
    /// Alphabet symbol labelling edges.
    type Symbol: Copy + Eq + fmt::Debug;

    // Dictionary

    /// Insert a pattern and return the node where it ends.
    ///
    /// The pattern receives the next dictionary index. Inserting the same
    /// sequence twice records both indices on the same node.
    fn insert<I>(&mut self, symbols: I) -> Result<NodeId, TrieError>
    where
        I: IntoIterator<Item = Self::Symbol>;

    /// Pattern indices ending exactly at `node`, in insertion order.
    fn entries(&self, node: NodeId) -> &[PatternId];

    /// Rebuild the pattern with the given index.
    fn pattern(&self, index: PatternId) -> Result<Vec<Self::Symbol>, TrieError>;

    /// Number of patterns inserted so far.
    fn dictionary_size(&self) -> usize;

    // Tree

    /// Child of `node` along `symbol`, or `node` itself when there is no such edge.
    fn next(&self, node: NodeId, symbol: Self::Symbol) -> NodeId;

    /// Parent of `node`. The root is its own parent.
    fn parent(&self, node: NodeId) -> NodeId;

    /// Symbol on the edge into `node`; `None` for the root.
    fn incoming_symbol(&self, node: NodeId) -> Option<Self::Symbol>;

    /// Outgoing `(symbol, child)` edges of `node`.
    fn edges(&self, node: NodeId) -> impl Iterator<Item = (Self::Symbol, NodeId)> + '_;

    /// Number of nodes, including the root.
    fn tree_size(&self) -> usize;

    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    // Path

    /// Find the node spelled by `symbols`, or the root if any edge is missing.
    fn find<I>(&self, symbols: I) -> NodeId
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        self.traverse(symbols, self.root())
    }

    /// Walk `symbols` from `start`.
    ///
    /// Returns `start` unchanged as soon as an edge is missing.
    fn traverse<I>(&self, symbols: I, start: NodeId) -> NodeId
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        let mut current = start;
        for symbol in symbols {
            let next = self.next(current, symbol);
            if next == current {
                return start;
            }
            current = next;
        }
        current
    }

    /// Symbols spelled from the root down to `node`.
    fn path(&self, node: NodeId) -> Vec<Self::Symbol> {
        let mut symbols = Vec::new();
        let mut current = node;
        while let Some(symbol) = self.incoming_symbol(current) {
            symbols.push(symbol);
            current = self.parent(current);
        }
        symbols.reverse();
        symbols
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
