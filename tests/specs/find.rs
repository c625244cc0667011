// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch find` specs.

use crate::prelude::*;

fn find(project: &Project, args: &[&str], stdin: &str) -> Command {
    let mut cmd = strmatch_cmd();
    cmd.arg("find")
        .args(args)
        .current_dir(project.path())
        .write_stdin(stdin);
    cmd
}

#[test]
fn prints_overlapping_starts() {
    let project = Project::empty();
    run_exits(find(&project, &["aba"], "abababa"), 0).stdout_eq("0 2 4\n");
}

#[test]
fn reads_from_file() {
    let project = Project::empty();
    project.file("text.txt", "xxabxab");
    run_exits(find(&project, &["ab", "text.txt"], ""), 0).stdout_eq("2 5\n");
}

#[test]
fn no_occurrence_prints_empty_line() {
    let project = Project::empty();
    run_exits(find(&project, &["zz"], "abc"), 0).stdout_eq("\n");
}

#[test]
fn missing_file_fails() {
    let project = Project::empty();
    run_exits(find(&project, &["a", "missing.txt"], ""), 3).stderr_has("missing.txt");
}
