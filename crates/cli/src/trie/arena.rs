// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arena-backed trie, generic over edge storage.

use std::fmt;

use super::alphabet::Lowercase;
use super::edges::{DenseEdges, EdgeMap, SparseEdges};
use super::{NodeId, PatternId, Trie, TrieError};

/// Trie with ordered-map edges, suited to large or open alphabets.
pub type SparseTrie<S = u8> = ArenaTrie<SparseEdges<S>>;

/// Trie with fixed-size edge tables, suited to small closed alphabets.
pub type DenseTrie<A = Lowercase> = ArenaTrie<DenseEdges<A>>;

struct Node<E: EdgeMap> {
    parent: NodeId,
    incoming: Option<E::Symbol>,
    entries: Vec<PatternId>,
    edges: E,
}

impl<E: EdgeMap> Node<E> {
    fn new(parent: NodeId, incoming: Option<E::Symbol>) -> Self {
        Self {
            parent,
            incoming,
            entries: Vec::new(),
            edges: E::default(),
        }
    }
}

/// A trie whose nodes live in a single growable vector.
///
/// Nodes are never removed, so every [`NodeId`] stays valid for the
/// lifetime of the trie.
pub struct ArenaTrie<E: EdgeMap> {
    nodes: Vec<Node<E>>,
    /// Terminal node of each pattern, indexed by pattern id.
    terminals: Vec<NodeId>,
}

impl<E: EdgeMap> Default for ArenaTrie<E> {
    fn default() -> Self {
        Self {
            nodes: vec![Node::new(NodeId::ROOT, None)],
            terminals: Vec::new(),
        }
    }
}

impl<E: EdgeMap> fmt::Debug for ArenaTrie<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaTrie")
            .field("alphabet", &E::ALPHABET)
            .field("nodes", &self.nodes.len())
            .field("patterns", &self.terminals.len())
            .finish()
    }
}

impl<E: EdgeMap> ArenaTrie<E> {
    /// Create a trie holding only the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from patterns, assigning indices in iteration order.
    pub fn from_patterns<P, I>(patterns: P) -> Result<Self, TrieError>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = E::Symbol>,
    {
        let mut trie = Self::new();
        for pattern in patterns {
            trie.insert(pattern)?;
        }
        Ok(trie)
    }

    fn add_node(&mut self, parent: NodeId, symbol: E::Symbol) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::new(parent, Some(symbol)));
        self.nodes[parent.index()].edges.insert(symbol, id);
        id
    }
}

impl<E: EdgeMap> Trie for ArenaTrie<E> {
    type Symbol = E::Symbol;

    fn insert<I>(&mut self, symbols: I) -> Result<NodeId, TrieError>
    where
        I: IntoIterator<Item = E::Symbol>,
    {
        // Validate up front so a rejected pattern leaves no partial path.
        let symbols: Vec<E::Symbol> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(TrieError::EmptyPattern);
        }
        if let Some(offset) = symbols.iter().position(|&s| !E::admits(s)) {
            return Err(TrieError::OutOfAlphabet {
                symbol: format!("{:?}", symbols[offset]),
                offset,
                alphabet: E::ALPHABET,
            });
        }

        let mut current = NodeId::ROOT;
        for symbol in symbols {
            current = match self.nodes[current.index()].edges.get(symbol) {
                Some(child) => child,
                None => self.add_node(current, symbol),
            };
        }

        let index = self.terminals.len();
        self.nodes[current.index()].entries.push(index);
        self.terminals.push(current);
        Ok(current)
    }

    fn entries(&self, node: NodeId) -> &[PatternId] {
        &self.nodes[node.index()].entries
    }

    fn pattern(&self, index: PatternId) -> Result<Vec<E::Symbol>, TrieError> {
        let node = self
            .terminals
            .get(index)
            .copied()
            .ok_or(TrieError::UnknownPattern {
                index,
                size: self.terminals.len(),
            })?;
        Ok(self.path(node))
    }

    fn dictionary_size(&self) -> usize {
        self.terminals.len()
    }

    fn next(&self, node: NodeId, symbol: E::Symbol) -> NodeId {
        self.nodes[node.index()].edges.get(symbol).unwrap_or(node)
    }

    fn parent(&self, node: NodeId) -> NodeId {
        self.nodes[node.index()].parent
    }

    fn incoming_symbol(&self, node: NodeId) -> Option<E::Symbol> {
        self.nodes[node.index()].incoming
    }

    fn edges(&self, node: NodeId) -> impl Iterator<Item = (E::Symbol, NodeId)> + '_ {
        self.nodes[node.index()].edges.iter()
    }

    fn tree_size(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
#[path = "arena_tests.rs"]
mod tests;
