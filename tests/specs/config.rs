// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery and precedence specs.

use crate::prelude::*;

#[test]
fn config_sets_output_format() {
    let project = Project::with_config("version = 1\n[output]\nformat = \"json\"\n");
    scan(&project)
        .pattern("a")
        .stdin("a")
        .passes()
        .stdout_has("\"total\": 1");
}

#[test]
fn cli_flag_overrides_config() {
    let project = Project::with_config("version = 1\n[output]\nformat = \"json\"\n");
    scan(&project)
        .pattern("a")
        .args(&["-o", "text"])
        .stdin("a")
        .passes()
        .stdout_eq("0 a\n");
}

#[test]
fn config_limit_applies_until_no_limit() {
    let project = Project::with_config("version = 1\n[output]\nlimit = 1\n");
    scan(&project)
        .pattern("a")
        .stdin("aaa")
        .passes()
        .stdout_eq("0 a\n");
    scan(&project)
        .pattern("a")
        .args(&["--no-limit"])
        .stdin("aaa")
        .passes()
        .stdout_eq("0 a\n1 a\n2 a\n");
}

#[test]
fn config_selects_backend() {
    let project = Project::with_config("version = 1\n[scan]\nbackend = \"dense\"\n");
    let json = scan(&project).pattern("ab").stdin("ab").json().passes();
    assert_eq!(json["backend"], "dense");
}

#[test]
fn config_is_found_from_subdirectory() {
    let project = Project::with_config("version = 1\n[output]\nformat = \"json\"\n");
    project.file("sub/text.txt", "a");
    let mut cmd = strmatch_cmd();
    cmd.args(["scan", "-p", "a", "text.txt"])
        .current_dir(project.path().join("sub"))
        .write_stdin("");
    run_exits(cmd, 0).stdout_has("\"total\": 1");
}

#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    project.file("custom.toml", "version = 1\n[output]\nformat = \"json\"\n");
    scan(&project)
        .pattern("a")
        .args(&["-C", "custom.toml"])
        .stdin("a")
        .passes()
        .stdout_has("\"total\": 1");
}

#[test]
fn config_env_var() {
    let project = Project::empty();
    let path = project.file("custom.toml", "version = 1\n[output]\nlimit = 1\n");
    let mut cmd = strmatch_cmd();
    cmd.args(["scan", "-p", "a", "--no-color"])
        .env("STRMATCH_CONFIG", path)
        .current_dir(project.path())
        .write_stdin("aa");
    run_exits(cmd, 0).stdout_eq("0 a\n");
}

#[test]
fn missing_explicit_config_fails() {
    let project = Project::empty();
    scan(&project)
        .pattern("a")
        .args(&["-C", "nope.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_fails() {
    let project = Project::with_config("version = 9\n");
    scan(&project)
        .pattern("a")
        .stdin("a")
        .exits(2)
        .stderr_has("unsupported config version 9");
}

#[test]
fn unknown_keys_warn_but_succeed() {
    let project = Project::with_config("version = 1\nmystery = true\n[scan]\nspeed = 3\n");
    scan(&project)
        .pattern("a")
        .stdin("a")
        .passes()
        .stdout_eq("0 a\n")
        .stderr_has("unrecognized field `mystery`")
        .stderr_has("unrecognized field `scan.speed`");
}

#[test]
fn log_env_var_enables_tracing() {
    let project = Project::empty();
    let mut cmd = strmatch_cmd();
    cmd.args(["scan", "-p", "a"])
        .env("STRMATCH_LOG", "debug")
        .current_dir(project.path())
        .write_stdin("a");
    run_exits(cmd, 0).stderr_has("compiled automaton links");
}
