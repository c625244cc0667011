// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Inputs are read whole into memory. Files larger than the configured
//! maximum are rejected before reading; standard input is read up to one
//! byte past the maximum so an oversized stream is detected without
//! buffering all of it.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log a large input (1 MiB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum input size (64 MiB).
pub const DEFAULT_MAX_SIZE: u64 = 64 * 1024 * 1024;

/// Display name used for standard input.
pub const STDIN_SOURCE: &str = "<stdin>";

/// One input loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Path as given on the command line, or `<stdin>`.
    pub source: String,

    /// Raw content.
    pub bytes: Vec<u8>,
}

impl Input {
    pub fn new(source: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
            bytes: bytes.into(),
        }
    }
}

/// Size-gated reader.
#[derive(Debug, Clone, Copy)]
pub struct InputReader {
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl InputReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, checking the size limit first.
    pub fn read(&self, path: &Path) -> Result<Input> {
        let io_err = |e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }
        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "reading large input"
            );
        }

        let mut bytes = Vec::with_capacity(capacity_hint(size));
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(io_err)?;

        Ok(Input::new(path.display().to_string(), bytes))
    }

    /// Read a stream of unknown length, such as standard input.
    pub fn read_stream<R: Read>(&self, source: &str, reader: R) -> Result<Input> {
        let mut bytes = Vec::new();
        reader
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Io {
                path: PathBuf::from(source),
                source: e,
            })?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: PathBuf::from(source),
                size,
                max_size: self.max_size,
            });
        }
        Ok(Input::new(source, bytes))
    }

    pub fn read_stdin(&self) -> Result<Input> {
        self.read_stream(STDIN_SOURCE, std::io::stdin().lock())
    }

    /// Read every path, or standard input when `paths` is empty.
    pub fn read_all(&self, paths: &[PathBuf]) -> Result<Vec<Input>> {
        if paths.is_empty() {
            return Ok(vec![self.read_stdin()?]);
        }
        paths.iter().map(|path| self.read(path)).collect()
    }
}

/// Initial buffer size for a file of `size` bytes.
fn capacity_hint(size: u64) -> usize {
    usize::try_from(size).unwrap_or(0)
}

/// Split a patterns file into patterns, one per line.
///
/// Line endings (`\n` or `\r\n`) are stripped and blank lines skipped.
pub fn pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse whitespace-separated non-negative integers.
pub fn parse_values(content: &str) -> Result<Vec<usize>> {
    content
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| Error::Argument(format!("invalid value `{}`", token)))
        })
        .collect()
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
