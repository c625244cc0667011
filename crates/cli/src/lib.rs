// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-pattern exact string matching.
//!
//! Patterns go into a [`trie`]; an [`automaton`] compiled from the frozen
//! trie finds every occurrence of every pattern in one pass over a text.
//! [`prefix`] holds the single-pattern tools (prefix function, KMP,
//! Z-function) and the string reconstruction decoders.

pub mod automaton;
pub mod cli;
pub mod color;
pub mod completions;
pub mod config;
pub mod discovery;
pub mod env;
pub mod error;
pub mod output;
pub mod prefix;
pub mod reader;
pub mod runner;
pub mod search;
pub mod trie;

pub use automaton::{Automaton, LinkTable, Match, Scanner};
pub use cli::{Cli, Command, OutputFormat, ScanArgs};
pub use error::{Error, ExitCode, Result};
pub use reader::{Input, InputReader};
pub use runner::{RunnerConfig, ScanReport, ScanResult, ScanRunner};
pub use search::{Backend, Dictionary, Occurrence, Searcher};
pub use trie::{DenseTrie, NodeId, PatternId, SparseTrie, Trie, TrieError};

#[cfg(test)]
pub mod test_utils;
