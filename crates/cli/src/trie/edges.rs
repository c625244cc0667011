// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-node edge storage.
//!
//! Two representations share one interface:
//! - [`SparseEdges`]: ordered map, any `Ord` symbol, memory proportional to edges
//! - [`DenseEdges`]: one slot per alphabet symbol, O(1) lookup

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use super::NodeId;
use super::alphabet::Alphabet;

/// Outgoing edges of a single trie node.
pub trait EdgeMap: Default {
    type Symbol: Copy + Eq + fmt::Debug;

    /// Name of the alphabet, for error messages.
    const ALPHABET: &'static str;

    /// Whether `symbol` can label an edge in this representation.
    fn admits(symbol: Self::Symbol) -> bool;

    fn get(&self, symbol: Self::Symbol) -> Option<NodeId>;

    /// Add an edge. Callers only insert admitted symbols without an existing edge.
    fn insert(&mut self, symbol: Self::Symbol, child: NodeId);

    fn iter(&self) -> impl Iterator<Item = (Self::Symbol, NodeId)> + '_;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Edges kept in a `BTreeMap`, iterated in symbol order.
#[derive(Debug, Clone)]
pub struct SparseEdges<S> {
    map: BTreeMap<S, NodeId>,
}

impl<S> Default for SparseEdges<S> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<S> EdgeMap for SparseEdges<S>
where
    S: Copy + Ord + fmt::Debug,
{
    type Symbol = S;

    const ALPHABET: &'static str = "open";

    fn admits(_symbol: S) -> bool {
        true
    }

    fn get(&self, symbol: S) -> Option<NodeId> {
        self.map.get(&symbol).copied()
    }

    fn insert(&mut self, symbol: S, child: NodeId) {
        self.map.insert(symbol, child);
    }

    fn iter(&self) -> impl Iterator<Item = (S, NodeId)> + '_ {
        self.map.iter().map(|(&symbol, &child)| (symbol, child))
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Edges kept in a fixed table with one slot per alphabet symbol.
pub struct DenseEdges<A: Alphabet> {
    slots: Box<[Option<NodeId>]>,
    len: usize,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> Default for DenseEdges<A> {
    fn default() -> Self {
        Self {
            slots: vec![None; A::SIZE].into_boxed_slice(),
            len: 0,
            _alphabet: PhantomData,
        }
    }
}

impl<A: Alphabet> fmt::Debug for DenseEdges<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<A: Alphabet> EdgeMap for DenseEdges<A> {
    type Symbol = A::Symbol;

    const ALPHABET: &'static str = A::NAME;

    fn admits(symbol: A::Symbol) -> bool {
        A::position(symbol).is_some()
    }

    fn get(&self, symbol: A::Symbol) -> Option<NodeId> {
        A::position(symbol).and_then(|pos| self.slots[pos])
    }

    fn insert(&mut self, symbol: A::Symbol, child: NodeId) {
        if let Some(pos) = A::position(symbol)
            && self.slots[pos].replace(child).is_none()
        {
            self.len += 1;
        }
    }

    fn iter(&self) -> impl Iterator<Item = (A::Symbol, NodeId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.map(|child| (A::symbol(pos), child)))
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
#[path = "edges_tests.rs"]
mod tests;
