// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch from-prefix` and `strmatch from-z` specs.

use crate::prelude::*;

fn decode(args: &[&str], stdin: &str) -> Command {
    let mut cmd = strmatch_cmd();
    cmd.args(args).write_stdin(stdin);
    cmd
}

#[test]
fn from_prefix_with_arguments() {
    run_exits(decode(&["from-prefix", "0", "0", "1", "0", "1", "2", "3"], ""), 0)
        .stdout_eq("abacaba\n");
}

#[test]
fn from_prefix_reads_stdin() {
    run_exits(decode(&["from-prefix"], "0 1\n2 3\n"), 0).stdout_eq("aaaa\n");
}

#[test]
fn from_prefix_rejects_inconsistent_values() {
    run_exits(decode(&["from-prefix", "0", "0", "2"], ""), 2).stderr_has("position 2");
}

#[test]
fn from_prefix_rejects_garbage_on_stdin() {
    run_exits(decode(&["from-prefix"], "0 one"), 2).stderr_has("invalid value `one`");
}

#[test]
fn from_z_with_arguments() {
    run_exits(decode(&["from-z", "7", "1", "0", "0", "3", "1", "0"], ""), 0)
        .stdout_eq("aabbaab\n");
}

#[test]
fn from_z_reads_stdin() {
    run_exits(decode(&["from-z"], "5 4 3 2 1"), 0).stdout_eq("aaaaa\n");
}

#[test]
fn from_z_rejects_out_of_range_value() {
    run_exits(decode(&["from-z", "3", "5", "0"], ""), 2).stderr_has("out of range");
}

#[test]
fn empty_input_prints_empty_string() {
    run_exits(decode(&["from-z"], ""), 0).stdout_eq("\n");
}
