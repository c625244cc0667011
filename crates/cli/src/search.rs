// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Occurrence search on top of the automaton.
//!
//! A [`Dictionary`] collects patterns (the build phase); its [`Searcher`]
//! borrows the dictionary and turns the automaton's end positions into
//! start/end ranges (the frozen phase).

use serde::{Deserialize, Serialize};

use crate::automaton::{Automaton, Match};
use crate::trie::{PatternId, Trie, TrieError};

/// Trie representation used for a scan.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Lowercase when every pattern is `a`..`z`, sparse otherwise.
    #[default]
    Auto,
    /// Ordered-map edges over bytes.
    Sparse,
    /// Fixed 256-slot edge arrays over bytes.
    Dense,
    /// Fixed 26-slot edge arrays over `a`..`z`.
    Lowercase,
}

impl Backend {
    /// Pick a concrete backend for `patterns`. Never returns `Auto`.
    pub fn resolve<P: AsRef<[u8]>>(self, patterns: &[P]) -> Backend {
        match self {
            Backend::Auto => {
                let lowercase = patterns
                    .iter()
                    .all(|p| p.as_ref().iter().all(u8::is_ascii_lowercase));
                if lowercase {
                    Backend::Lowercase
                } else {
                    Backend::Sparse
                }
            }
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Sparse => "sparse",
            Backend::Dense => "dense",
            Backend::Lowercase => "lowercase",
        }
    }
}

/// One pattern occurrence as a half-open range of text positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Occurrence {
    /// Position of the first symbol.
    pub start: usize,
    /// Position one past the last symbol.
    pub end: usize,
    /// Dictionary index of the pattern.
    pub pattern: PatternId,
}

impl Occurrence {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Patterns under construction, with the length of each.
#[derive(Debug, Default)]
pub struct Dictionary<T: Trie> {
    trie: T,
    lengths: Vec<usize>,
}

impl<T: Trie + Default> Dictionary<T> {
    pub fn new() -> Self {
        Self {
            trie: T::default(),
            lengths: Vec::new(),
        }
    }

    /// Build a dictionary from `patterns`, stopping at the first rejected one.
    ///
    /// The error carries the index of the rejected pattern.
    pub fn from_patterns<P, I>(patterns: P) -> Result<Self, (PatternId, TrieError)>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T::Symbol>,
    {
        let mut dictionary = Self::new();
        for (index, pattern) in patterns.into_iter().enumerate() {
            dictionary.insert(pattern).map_err(|err| (index, err))?;
        }
        Ok(dictionary)
    }
}

impl<T: Trie> Dictionary<T> {
    /// Add a pattern and return its index.
    pub fn insert<I>(&mut self, symbols: I) -> Result<PatternId, TrieError>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        let symbols: Vec<T::Symbol> = symbols.into_iter().collect();
        let len = symbols.len();
        self.trie.insert(symbols)?;
        self.lengths.push(len);
        Ok(self.lengths.len() - 1)
    }

    pub fn trie(&self) -> &T {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Length of the pattern with index `pattern`.
    pub fn pattern_len(&self, pattern: PatternId) -> Option<usize> {
        self.lengths.get(pattern).copied()
    }

    /// Freeze the dictionary and compile its automaton.
    pub fn searcher(&self) -> Searcher<'_, T> {
        Searcher {
            automaton: Automaton::new(&self.trie),
            lengths: &self.lengths,
        }
    }
}

/// Read-only searcher over a frozen dictionary. Shareable across threads.
pub struct Searcher<'d, T: Trie> {
    automaton: Automaton<'d, T>,
    lengths: &'d [usize],
}

impl<'d, T: Trie> Searcher<'d, T> {
    pub fn automaton(&self) -> &Automaton<'d, T> {
        &self.automaton
    }

    /// Iterate over occurrences in reporting order: by end position, and
    /// longest pattern first at one position.
    pub fn find_iter<I>(&self, text: I) -> impl Iterator<Item = Occurrence>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        self.automaton
            .matches(text)
            .map(move |Match { end, pattern }| {
                let len = self.lengths[pattern];
                Occurrence {
                    start: end + 1 - len,
                    end: end + 1,
                    pattern,
                }
            })
    }

    /// Every occurrence in `text`, in reporting order.
    pub fn find_all<I>(&self, text: I) -> Vec<Occurrence>
    where
        I: IntoIterator<Item = T::Symbol>,
    {
        self.find_iter(text).collect()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
