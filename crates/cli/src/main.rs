// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strmatch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use strmatch::cli::{Cli, Command};
use strmatch::completions::write_completions;
use strmatch::env::names;
use strmatch::error::ExitCode;

mod cmd_decode;
mod cmd_find;
mod cmd_scan;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::STRMATCH_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("strmatch: {}", e);
            match e.downcast_ref::<strmatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Find(args)) => cmd_find::run(args),
        Some(Command::FromPrefix(args)) => cmd_decode::from_prefix(args),
        Some(Command::FromZ(args)) => cmd_decode::from_z(args),
        Some(Command::Completions(args)) => {
            write_completions(args.shell, &mut std::io::stdout());
            Ok(ExitCode::Success)
        }
    }
}
