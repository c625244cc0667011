// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::runner::{ScanReport, ScanResult};
use crate::search::Backend;

/// Complete JSON document for a scan.
#[derive(Debug, Serialize)]
pub struct ScanOutput<'a> {
    pub backend: Backend,
    pub patterns: &'a [String],
    pub inputs: Vec<InputOutput<'a>>,
    pub total: usize,
}

/// Occurrences for one input.
#[derive(Debug, Serialize)]
pub struct InputOutput<'a> {
    pub source: &'a str,
    pub occurrences: Vec<OccurrenceOutput<'a>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

/// One occurrence with its pattern text.
#[derive(Debug, Serialize)]
pub struct OccurrenceOutput<'a> {
    pub start: usize,
    pub end: usize,
    pub pattern: usize,
    pub text: &'a str,
}

impl<'a> ScanOutput<'a> {
    pub fn new(report: &'a ScanReport) -> Self {
        Self {
            backend: report.backend,
            patterns: &report.patterns,
            inputs: report
                .results
                .iter()
                .map(|result| InputOutput::new(report, result))
                .collect(),
            total: report.total(),
        }
    }
}

impl<'a> InputOutput<'a> {
    fn new(report: &'a ScanReport, result: &'a ScanResult) -> Self {
        Self {
            source: &result.source,
            occurrences: result
                .occurrences
                .iter()
                .map(|o| OccurrenceOutput {
                    start: o.start,
                    end: o.end,
                    pattern: o.pattern,
                    text: report.pattern(o),
                })
                .collect(),
            truncated: result.truncated,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &ScanReport) -> std::io::Result<()> {
        let output = ScanOutput::new(report);
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
