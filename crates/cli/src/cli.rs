// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::search::Backend;

/// Multi-pattern exact string matching with Aho-Corasick automata
#[derive(Parser)]
#[command(name = "strmatch")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STRMATCH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find every occurrence of many patterns at once
    Scan(ScanArgs),
    /// Find one pattern with KMP and print its start offsets
    Find(FindArgs),
    /// Rebuild the smallest string with the given prefix function
    FromPrefix(DecodeArgs),
    /// Rebuild the smallest string with the given Z-function
    FromZ(DecodeArgs),
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files to scan (standard input when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Pattern to search for (repeatable)
    #[arg(short, long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// File with one pattern per line
    #[arg(short = 'f', long = "patterns-file", value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Trie representation
    #[arg(long)]
    pub backend: Option<Backend>,

    /// Maximum occurrences reported per input
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Report every occurrence, ignoring any configured limit
    #[arg(long, conflicts_with = "limit")]
    pub no_limit: bool,

    /// Largest input accepted, in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Exit with status 1 when nothing is found
    #[arg(long)]
    pub fail_on_empty: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct FindArgs {
    /// Pattern to search for
    pub pattern: String,

    /// File to search (standard input when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Function values (read from standard input when omitted)
    #[arg(value_name = "VALUE")]
    pub values: Vec<usize>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
