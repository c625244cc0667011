// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel scan runner.
//!
//! Builds one dictionary for the selected backend, compiles its automaton
//! once, and scans every input against it using rayon. Results come back
//! in input order.

use std::time::Instant;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::reader::Input;
use crate::search::{Backend, Dictionary, Occurrence};
use crate::trie::{Bytes, DenseTrie, Lowercase, SparseTrie, Trie};

/// Configuration for a scan run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunnerConfig {
    /// Trie representation (`Auto` is resolved against the patterns).
    pub backend: Backend,
    /// Maximum occurrences kept per input (None = unlimited).
    pub limit: Option<usize>,
}

/// Occurrences found in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub source: String,
    pub occurrences: Vec<Occurrence>,
    /// Whether scanning stopped early at the limit.
    pub truncated: bool,
}

/// Outcome of a whole run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Patterns by dictionary index.
    pub patterns: Vec<String>,
    /// Backend actually used.
    pub backend: Backend,
    /// One result per input, in input order.
    pub results: Vec<ScanResult>,
}

impl ScanReport {
    /// Number of occurrences reported across all inputs.
    pub fn total(&self) -> usize {
        self.results.iter().map(|r| r.occurrences.len()).sum()
    }

    pub fn pattern(&self, occurrence: &Occurrence) -> &str {
        self.patterns
            .get(occurrence.pattern)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Scans inputs against a dictionary of patterns.
pub struct ScanRunner {
    config: RunnerConfig,
}

impl ScanRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Scan every input for every pattern.
    ///
    /// A pattern the backend cannot hold fails the run with
    /// [`Error::Pattern`] before any input is scanned.
    pub fn run(&self, patterns: Vec<String>, inputs: &[Input]) -> Result<ScanReport> {
        let backend = self.config.backend.resolve(&patterns);
        tracing::debug!(
            backend = backend.name(),
            patterns = patterns.len(),
            inputs = inputs.len(),
            "starting scan"
        );

        let results = match backend {
            Backend::Lowercase => self.scan_with::<DenseTrie<Lowercase>>(&patterns, inputs)?,
            Backend::Dense => self.scan_with::<DenseTrie<Bytes>>(&patterns, inputs)?,
            Backend::Sparse => self.scan_with::<SparseTrie<u8>>(&patterns, inputs)?,
            Backend::Auto => {
                return Err(Error::Internal("backend left unresolved".to_string()));
            }
        };

        Ok(ScanReport {
            patterns,
            backend,
            results,
        })
    }

    fn scan_with<T>(&self, patterns: &[String], inputs: &[Input]) -> Result<Vec<ScanResult>>
    where
        T: Trie<Symbol = u8> + Default + Sync,
    {
        let dictionary = Dictionary::<T>::from_patterns(patterns.iter().map(|p| p.bytes()))
            .map_err(|(index, source)| Error::Pattern { index, source })?;
        let searcher = dictionary.searcher();
        let limit = self.config.limit;

        let results = inputs
            .par_iter()
            .map(|input| {
                let started = Instant::now();
                let mut found = searcher.find_iter(input.bytes.iter().copied());
                let occurrences: Vec<Occurrence> = match limit {
                    Some(limit) => found.by_ref().take(limit).collect(),
                    None => found.by_ref().collect(),
                };
                let truncated = limit.is_some() && found.next().is_some();
                tracing::debug!(
                    source = %input.source,
                    bytes = input.bytes.len(),
                    occurrences = occurrences.len(),
                    elapsed = ?started.elapsed(),
                    "scanned input"
                );
                ScanResult {
                    source: input.source.clone(),
                    occurrences,
                    truncated,
                }
            })
            .collect();
        Ok(results)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
