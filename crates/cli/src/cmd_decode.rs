// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `from-prefix` and `from-z` command implementations.

use strmatch::cli::DecodeArgs;
use strmatch::error::{Error, ExitCode};
use strmatch::prefix::{PrefixFunctionDecoder, z_function_to_string};
use strmatch::reader::{InputReader, parse_values};

/// Values from the command line, or from standard input when none are given.
fn values(args: &DecodeArgs) -> Result<Vec<usize>, Error> {
    if !args.values.is_empty() {
        return Ok(args.values.clone());
    }
    let input = InputReader::new().read_stdin()?;
    let text = String::from_utf8(input.bytes)
        .map_err(|_| Error::Argument("standard input is not valid UTF-8".to_string()))?;
    parse_values(&text)
}

pub fn from_prefix(args: &DecodeArgs) -> anyhow::Result<ExitCode> {
    let values = values(args)?;
    let mut decoder = PrefixFunctionDecoder::new();
    decoder.extend(values).map_err(Error::from)?;
    println!("{}", decoder.as_str());
    Ok(ExitCode::Success)
}

pub fn from_z(args: &DecodeArgs) -> anyhow::Result<ExitCode> {
    let values = values(args)?;
    let text = z_function_to_string(&values).map_err(Error::from)?;
    println!("{}", text);
    Ok(ExitCode::Success)
}
