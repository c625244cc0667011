// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the strmatch binary inside a scratch
//! project and asserting on its output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::Command;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the strmatch binary, isolated from
/// the caller's environment.
pub fn strmatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("strmatch"));
    for var in ["STRMATCH_CONFIG", "STRMATCH_LOG", "NO_COLOR", "COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Scratch directory marked as a git root so config discovery stays inside.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with a strmatch.toml.
    pub fn with_config(config: &str) -> Self {
        let project = Self::empty();
        project.file("strmatch.toml", config);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// Create a scan command builder running in `project`.
pub fn scan(project: &Project) -> ScanBuilder<Text> {
    ScanBuilder {
        dir: project.path().to_path_buf(),
        args: Vec::new(),
        stdin: None,
        _mode: PhantomData,
    }
}

/// Fluent builder for `strmatch scan`
pub struct ScanBuilder<Mode = Text> {
    dir: PathBuf,
    args: Vec<String>,
    stdin: Option<Vec<u8>>,
    _mode: PhantomData<Mode>,
}

impl<Mode> ScanBuilder<Mode> {
    /// Add a `-p` pattern.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.args.extend(["-p".to_string(), pattern.to_string()]);
        self
    }

    /// Add raw arguments.
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Feed standard input.
    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    fn command(self, extra: &[&str]) -> Command {
        let mut cmd = strmatch_cmd();
        cmd.arg("scan").args(extra).args(&self.args).current_dir(&self.dir);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }
}

impl ScanBuilder<Text> {
    pub fn json(self) -> ScanBuilder<Json> {
        ScanBuilder {
            dir: self.dir,
            args: self.args,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(&["--no-color"]), 0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(&["--no-color"]), code)
    }
}

impl ScanBuilder<Json> {
    pub fn passes(self) -> serde_json::Value {
        let run = run_exits(self.command(&["-o", "json"]), 0);
        serde_json::from_str(&run.stdout()).expect("stdout should be JSON")
    }
}

/// Run `cmd` and require exit status `code`.
pub fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}
