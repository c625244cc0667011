// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per occurrence:
//! ```text
//! <start> <pattern>
//! <source>:<start> <pattern>    (when scanning several inputs)
//! ```

use std::io::Write;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::runner::{ScanReport, ScanResult};
use crate::search::Occurrence;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
    show_source: bool,
    written: usize,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a formatter; `show_source` prefixes each line with its input.
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
            written: 0,
        }
    }

    /// Write every result of `report`, in input order.
    pub fn write_report(&mut self, report: &ScanReport) -> std::io::Result<()> {
        for result in &report.results {
            self.write_result(report, result)?;
        }
        self.writer.flush()
    }

    /// Write the occurrences of one input.
    pub fn write_result(&mut self, report: &ScanReport, result: &ScanResult) -> std::io::Result<()> {
        for occurrence in &result.occurrences {
            self.write_occurrence(&result.source, occurrence, report.pattern(occurrence))?;
        }
        Ok(())
    }

    fn write_occurrence(
        &mut self,
        source: &str,
        occurrence: &Occurrence,
        pattern: &str,
    ) -> std::io::Result<()> {
        if self.show_source {
            self.writer.set_color(&scheme::source())?;
            write!(self.writer, "{}", source)?;
            self.writer.reset()?;
            write!(self.writer, ":")?;
        }

        self.writer.set_color(&scheme::offset())?;
        write!(self.writer, "{}", occurrence.start)?;
        self.writer.reset()?;
        write!(self.writer, " ")?;

        self.writer.set_color(&scheme::pattern())?;
        write!(self.writer, "{}", pattern)?;
        self.writer.reset()?;
        writeln!(self.writer)?;

        self.written += 1;
        Ok(())
    }

    /// Number of occurrence lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
