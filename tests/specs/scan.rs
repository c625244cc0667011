// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strmatch scan` specs.

use crate::prelude::*;

fn classic(project: &Project) -> ScanBuilder<Text> {
    scan(project)
        .pattern("he")
        .pattern("she")
        .pattern("his")
        .pattern("hers")
}

#[test]
fn reports_every_occurrence_from_stdin() {
    let project = Project::empty();
    classic(&project)
        .stdin("ahishers")
        .passes()
        .stdout_eq("1 his\n3 she\n4 he\n4 hers\n");
}

#[test]
fn nested_patterns_are_all_reported() {
    let project = Project::empty();
    scan(&project)
        .pattern("a")
        .pattern("ab")
        .pattern("abab")
        .stdin("abab")
        .passes()
        .stdout_eq("0 a\n0 ab\n2 a\n0 abab\n2 ab\n");
}

#[test]
fn single_file_has_no_prefix() {
    let project = Project::empty();
    project.file("text.txt", "ushers");
    classic(&project)
        .args(&["text.txt"])
        .passes()
        .stdout_eq("1 she\n2 he\n2 hers\n");
}

#[test]
fn several_files_are_prefixed_in_argument_order() {
    let project = Project::empty();
    project.file("b.txt", "he");
    project.file("a.txt", "she");
    scan(&project)
        .pattern("he")
        .args(&["b.txt", "a.txt"])
        .passes()
        .stdout_eq("b.txt:0 he\na.txt:1 he\n");
}

#[test]
fn patterns_file_adds_patterns() {
    let project = Project::empty();
    project.file("words.txt", "his\n\nhers\r\n");
    scan(&project)
        .pattern("she")
        .args(&["-f", "words.txt"])
        .stdin("ahishers")
        .passes()
        .stdout_eq("1 his\n3 she\n4 hers\n");
}

#[test]
fn json_output_has_inputs_and_total() {
    let project = Project::empty();
    let json = classic(&project).stdin("ahishers").json().passes();

    assert_eq!(json["total"], 4);
    assert_eq!(json["backend"], "lowercase");
    let input = &json["inputs"][0];
    assert_eq!(input["source"], "<stdin>");
    assert_eq!(
        input["occurrences"][0],
        serde_json::json!({"start": 1, "end": 4, "pattern": 2, "text": "his"})
    );
}

#[test]
fn mixed_case_patterns_use_sparse_backend() {
    let project = Project::empty();
    let json = scan(&project)
        .pattern("He")
        .stdin("He said")
        .json()
        .passes();
    assert_eq!(json["backend"], "sparse");
    assert_eq!(json["total"], 1);
}

#[test]
fn limit_truncates_output() {
    let project = Project::empty();
    scan(&project)
        .pattern("a")
        .args(&["--limit", "2"])
        .stdin("aaaa")
        .passes()
        .stdout_eq("0 a\n1 a\n")
        .stderr_has("output limited to 2");
}

#[test]
fn no_match_succeeds_by_default() {
    let project = Project::empty();
    scan(&project).pattern("zzz").stdin("abc").passes().stdout_eq("");
}

#[test]
fn fail_on_empty_exits_one() {
    let project = Project::empty();
    scan(&project)
        .pattern("zzz")
        .args(&["--fail-on-empty"])
        .stdin("abc")
        .exits(1);
}

#[test]
fn missing_patterns_is_an_argument_error() {
    let project = Project::empty();
    scan(&project)
        .stdin("abc")
        .exits(2)
        .stderr_has("no patterns given");
}

#[test]
fn empty_pattern_is_rejected() {
    let project = Project::empty();
    scan(&project)
        .pattern("ok")
        .pattern("")
        .stdin("abc")
        .exits(2)
        .stderr_has("pattern 1: empty pattern");
}

#[test]
fn lowercase_backend_rejects_other_symbols() {
    let project = Project::empty();
    scan(&project)
        .pattern("Abc")
        .args(&["--backend", "lowercase"])
        .stdin("Abc")
        .exits(2)
        .stderr_has("outside the lowercase alphabet");
}

#[test]
fn dense_backend_matches_bytes() {
    let project = Project::empty();
    scan(&project)
        .pattern("A-1")
        .args(&["--backend", "dense"])
        .stdin("xA-1A-1")
        .passes()
        .stdout_eq("1 A-1\n4 A-1\n");
}

#[test]
fn missing_input_is_an_io_error() {
    let project = Project::empty();
    scan(&project)
        .pattern("a")
        .args(&["missing.txt"])
        .exits(3)
        .stderr_has("missing.txt");
}

#[test]
fn oversized_input_is_rejected() {
    let project = Project::empty();
    project.file("big.txt", "x".repeat(100));
    scan(&project)
        .pattern("x")
        .args(&["--max-file-size", "10", "big.txt"])
        .exits(3)
        .stderr_has("input too large");
}

#[test]
fn color_flag_forces_ansi_output() {
    let project = Project::empty();
    let mut cmd = strmatch_cmd();
    cmd.args(["scan", "-p", "a", "--color"])
        .current_dir(project.path())
        .write_stdin("a");
    run_exits(cmd, 0).stdout_has("\x1b[");
}

#[test]
fn no_color_env_disables_color() {
    let project = Project::empty();
    let mut cmd = strmatch_cmd();
    cmd.args(["scan", "-p", "a"])
        .env("NO_COLOR", "1")
        .current_dir(project.path())
        .write_stdin("a");
    run_exits(cmd, 0).stdout_eq("0 a\n");
}
