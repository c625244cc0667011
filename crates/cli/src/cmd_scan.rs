// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use termcolor::{ColorChoice, StandardStream};

use strmatch::cli::{Cli, OutputFormat, ScanArgs};
use strmatch::color::resolve_color;
use strmatch::config::{self, Config};
use strmatch::discovery;
use strmatch::error::{Error, ExitCode};
use strmatch::output::{JsonFormatter, TextFormatter};
use strmatch::reader::{InputReader, pattern_lines};
use strmatch::runner::{RunnerConfig, ScanRunner};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => Config::default(),
    };

    let patterns = collect_patterns(args)?;

    // CLI flags override config values.
    let max_size = args.max_file_size.unwrap_or(config.scan.max_file_size);
    let limit = if args.no_limit {
        None
    } else {
        args.limit.or(config.output.limit)
    };
    let format = args.output.unwrap_or(config.output.format);

    let inputs = InputReader::with_max_size(max_size).read_all(&args.paths)?;
    let runner = ScanRunner::new(RunnerConfig {
        backend: args.backend.unwrap_or(config.scan.backend),
        limit,
    });
    let report = runner.run(patterns, &inputs)?;

    match format {
        OutputFormat::Text => {
            let color = if args.no_color {
                ColorChoice::Never
            } else if args.color {
                ColorChoice::Always
            } else {
                resolve_color()
            };
            let mut formatter =
                TextFormatter::new(StandardStream::stdout(color), args.paths.len() > 1);
            formatter.write_report(&report)?;

            if let Some(limit) = limit
                && report.results.iter().any(|r| r.truncated)
            {
                eprintln!(
                    "strmatch: output limited to {} occurrences per input (use --no-limit to see all)",
                    limit
                );
            }
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
        }
    }

    if args.fail_on_empty && report.total() == 0 {
        return Ok(ExitCode::NoMatch);
    }
    Ok(ExitCode::Success)
}

/// Patterns from `-p` flags, then from the patterns file.
fn collect_patterns(args: &ScanArgs) -> Result<Vec<String>, Error> {
    let mut patterns = args.patterns.clone();
    match &args.patterns_file {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            patterns.extend(pattern_lines(&content));
        }
        None if patterns.is_empty() => {
            return Err(Error::Argument(
                "no patterns given (use -p PATTERN or -f FILE)".to_string(),
            ));
        }
        None => {}
    }
    Ok(patterns)
}
