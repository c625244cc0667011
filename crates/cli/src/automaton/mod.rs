// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over a frozen trie.
//!
//! The automaton borrows the trie it was compiled from, so the trie cannot
//! be modified while the automaton is alive:
//!
//! ```compile_fail
//! use strmatch::automaton::Automaton;
//! use strmatch::trie::{SparseTrie, Trie};
//!
//! let mut trie = SparseTrie::<u8>::new();
//! trie.insert("he".bytes()).unwrap();
//! let automaton = Automaton::new(&trie);
//! trie.insert("she".bytes()).unwrap();
//! automaton.process_text("she".bytes(), |_, _| {});
//! ```

pub mod links;

use std::time::Instant;

pub use links::LinkTable;

use crate::trie::{NodeId, PatternId, Trie};

/// A pattern occurrence reported by the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    /// Zero-based position of the last symbol of the occurrence.
    pub end: usize,
    /// Index of the pattern that occurs.
    pub pattern: PatternId,
}

/// Multi-pattern matcher combining a trie with its link table.
///
/// All methods take `&self`; per-scan state lives in a [`Scanner`], so one
/// automaton can serve many threads at once.
pub struct Automaton<'t, T: Trie> {
    trie: &'t T,
    links: LinkTable,
}

impl<'t, T: Trie> Automaton<'t, T> {
    /// Compile the automaton for `trie`.
    pub fn new(trie: &'t T) -> Self {
        let started = Instant::now();
        let links = LinkTable::compile(trie);
        tracing::debug!(
            nodes = trie.tree_size(),
            patterns = trie.dictionary_size(),
            elapsed = ?started.elapsed(),
            "compiled automaton links"
        );
        Self { trie, links }
    }

    /// The trie this automaton was compiled from.
    pub fn trie(&self) -> &'t T {
        self.trie
    }

    pub fn links(&self) -> &LinkTable {
        &self.links
    }

    /// Transition from `node` on `symbol`, following suffix links on a miss.
    ///
    /// Never fails: with no matching edge anywhere on the suffix chain the
    /// result is the root.
    pub fn next(&self, node: NodeId, symbol: T::Symbol) -> NodeId {
        links::transition(self.trie, self.links.suffixes(), node, symbol)
    }

    /// Scan `text`, calling `report(position, pattern)` for every occurrence.
    ///
    /// Positions are zero-based and name the last symbol of the occurrence.
    /// At one position the longest pattern is reported first.
    pub fn process_text<I, F>(&self, text: I, report: F)
    where
        I: IntoIterator<Item = T::Symbol>,
        F: FnMut(usize, PatternId),
    {
        self.scanner().feed(text, report);
    }

    /// Iterate over every occurrence in `text`, in reporting order.
    pub fn matches<I>(&self, text: I) -> Matches<'_, 't, T, I::IntoIter>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        Matches {
            scanner: self.scanner(),
            text: text.into_iter(),
            pending: None,
        }
    }

    /// Start a resumable scan at the root, position zero.
    pub fn scanner(&self) -> Scanner<'_, 't, T> {
        Scanner {
            automaton: self,
            state: self.trie.root(),
            position: 0,
        }
    }

    /// Report the entries of `node` and of every terminal link after it.
    fn report_from<F>(&self, node: NodeId, position: usize, report: &mut F)
    where
        F: FnMut(usize, PatternId),
    {
        let mut next = Some(node);
        while let Some(node) = next {
            for &pattern in self.trie.entries(node) {
                report(position, pattern);
            }
            next = self.links.terminal(node);
        }
    }
}

/// Scan state that can be fed text in pieces.
///
/// Positions continue across calls to [`Scanner::feed`], so a long or
/// unbounded text can be streamed chunk by chunk.
pub struct Scanner<'a, 't, T: Trie> {
    automaton: &'a Automaton<'t, T>,
    state: NodeId,
    position: usize,
}

impl<T: Trie> Scanner<'_, '_, T> {
    /// Feed more text, reporting occurrences that end inside it.
    pub fn feed<I, F>(&mut self, text: I, mut report: F)
    where
        I: IntoIterator<Item = T::Symbol>,
        F: FnMut(usize, PatternId),
    {
        for symbol in text {
            let node = self.step(symbol);
            self.automaton
                .report_from(node, self.position - 1, &mut report);
        }
    }

    /// Current automaton state.
    pub fn state(&self) -> NodeId {
        self.state
    }

    /// Number of symbols consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    fn step(&mut self, symbol: T::Symbol) -> NodeId {
        self.state = self.automaton.next(self.state, symbol);
        self.position += 1;
        self.state
    }
}

/// Iterator over the occurrences in a text. See [`Automaton::matches`].
pub struct Matches<'a, 't, T: Trie, I> {
    scanner: Scanner<'a, 't, T>,
    text: I,
    /// Node whose entries are being emitted, and the next entry to emit.
    pending: Option<(NodeId, usize)>,
}

impl<T, I> Iterator for Matches<'_, '_, T, I>
where
    T: Trie,
    I: Iterator<Item = T::Symbol>,
{
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let automaton = self.scanner.automaton;
        loop {
            if let Some((node, entry)) = self.pending {
                let entries = automaton.trie.entries(node);
                if let Some(&pattern) = entries.get(entry) {
                    self.pending = Some((node, entry + 1));
                    return Some(Match {
                        end: self.scanner.position - 1,
                        pattern,
                    });
                }
                self.pending = automaton.links.terminal(node).map(|link| (link, 0));
                continue;
            }

            let symbol = self.text.next()?;
            let node = self.scanner.step(symbol);
            self.pending = Some((node, 0));
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
