// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suffix and terminal links.
//!
//! Computed once per frozen trie by a breadth-first pass from the root.
//! Breadth-first order guarantees that when a node is processed, every
//! node of smaller depth already has its links, which is what the
//! failure-resolved transition used for suffix links relies on.

use std::collections::VecDeque;

use crate::trie::{NodeId, Trie};

/// Per-node suffix and terminal links, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTable {
    suffix: Vec<NodeId>,
    terminal: Vec<Option<NodeId>>,
}

impl LinkTable {
    /// Compile links for every node of `trie`.
    pub fn compile<T: Trie>(trie: &T) -> Self {
        let root = trie.root();
        let size = trie.tree_size();
        let mut suffix = vec![root; size];
        let mut terminal: Vec<Option<NodeId>> = vec![None; size];

        let mut queue = VecDeque::with_capacity(size);
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            for (symbol, child) in trie.edges(node) {
                // Children of the root have only the empty proper suffix.
                let link = if node == root {
                    root
                } else {
                    transition(trie, &suffix, suffix[node.index()], symbol)
                };
                suffix[child.index()] = link;
                terminal[child.index()] = if trie.entries(link).is_empty() {
                    terminal[link.index()]
                } else {
                    Some(link)
                };
                queue.push_back(child);
            }
        }

        Self { suffix, terminal }
    }

    /// Node for the longest proper suffix of `node` that is also a trie prefix.
    pub fn suffix(&self, node: NodeId) -> NodeId {
        self.suffix[node.index()]
    }

    pub(crate) fn suffixes(&self) -> &[NodeId] {
        &self.suffix
    }

    /// Nearest proper suffix of `node` that ends a pattern, if any.
    pub fn terminal(&self, node: NodeId) -> Option<NodeId> {
        self.terminal[node.index()]
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.suffix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix.is_empty()
    }
}

/// Failure-resolved transition over a (possibly partial) suffix-link table.
///
/// Every node on the suffix chain of `node` must already have its link set.
pub(crate) fn transition<T: Trie>(
    trie: &T,
    suffix: &[NodeId],
    mut node: NodeId,
    symbol: T::Symbol,
) -> NodeId {
    let root = trie.root();
    loop {
        let next = trie.next(node, symbol);
        if next != node {
            return next;
        }
        if node == root {
            return root;
        }
        node = suffix[node.index()];
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
