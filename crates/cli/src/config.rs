// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles strmatch.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use crate::reader::DEFAULT_MAX_SIZE;
use crate::search::Backend;

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(default)]
    output: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Dictionary and input settings.
    pub scan: ScanConfig,

    /// Result formatting settings.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// `[scan]` section.
#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Trie representation (default: auto).
    #[serde(default)]
    pub backend: Backend,

    /// Largest input accepted, in bytes (default: 64 MiB).
    #[serde(default = "ScanConfig::default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            max_file_size: Self::default_max_file_size(),
        }
    }
}

impl ScanConfig {
    fn default_max_file_size() -> u64 {
        DEFAULT_MAX_SIZE
    }
}

/// `[output]` section.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format: text or json.
    #[serde(default)]
    pub format: OutputFormat,

    /// Maximum occurrences printed per input (default: unlimited).
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_SCAN_KEYS: &[&str] = &["backend", "max_file_size"];

const KNOWN_OUTPUT_KEYS: &[&str] = &["format", "limit"];

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if flexible.version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                flexible.version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    Ok(Config {
        version: flexible.version,
        scan: parse_section(flexible.scan, "scan", KNOWN_SCAN_KEYS, path)?,
        output: parse_section(flexible.output, "output", KNOWN_OUTPUT_KEYS, path)?,
    })
}

/// Deserialize one table, dropping (and warning about) unknown fields.
fn parse_section<T>(
    value: Option<toml::Value>,
    name: &str,
    known: &[&str],
    path: &Path,
) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };
    let toml::Value::Table(mut table) = value else {
        return Err(Error::Config {
            message: format!("`{}` must be a table", name),
            path: Some(path.to_path_buf()),
        });
    };

    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in unknown {
        warn_unknown_key(path, &format!("{}.{}", name, key));
        table.remove(&key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| Error::Config {
            message: format!("[{}] {}", name, e),
            path: Some(path.to_path_buf()),
        })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "strmatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
