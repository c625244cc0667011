// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Find command implementation.

use strmatch::cli::FindArgs;
use strmatch::error::ExitCode;
use strmatch::prefix::Kmp;
use strmatch::reader::InputReader;

/// Run the find command: print every start offset on one line.
pub fn run(args: &FindArgs) -> anyhow::Result<ExitCode> {
    let reader = InputReader::new();
    let input = match &args.path {
        Some(path) => reader.read(path)?,
        None => reader.read_stdin()?,
    };

    let kmp = Kmp::new(args.pattern.as_bytes());
    let starts: Vec<String> = kmp
        .find_starts(&input.bytes)
        .map(|start| start.to_string())
        .collect();
    tracing::debug!(occurrences = starts.len(), "kmp search finished");

    println!("{}", starts.join(" "));
    Ok(ExitCode::Success)
}
