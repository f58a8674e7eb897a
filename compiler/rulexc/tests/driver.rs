//! End-to-end tests for the `rulex` binary and [`rulexc::run`].

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use rulexc::{run, DriverError, DriverOptions, Summary};
use rulex_lexer_core::{LoadError, MatchPolicy};

fn rule_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

fn rulex(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rulex"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// === Library entry point ===

#[test]
fn run_lists_tokens_and_summary() {
    let file = rule_file(b"a, b");
    let options = DriverOptions {
        path: file.path().to_path_buf(),
        ..DriverOptions::default()
    };
    let mut out = Vec::new();
    let summary = run(&options, &mut out).unwrap();
    assert_eq!(summary, Summary { tokens: 3, invalid: 2 });

    let name = file.path().display().to_string();
    let want = format!(
        "{name}:1:1: INVALID a\n\
         {name}:1:2: PUNCT , #1\n\
         {name}:1:4: INVALID b\n\
         {name}:1:5: END\n\
         3 tokens, 2 invalid\n"
    );
    assert_eq!(String::from_utf8(out).unwrap(), want);
}

#[test]
fn run_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = DriverOptions {
        path: dir.path().join("absent.lex"),
        ..DriverOptions::default()
    };
    let mut out = Vec::new();
    let err = run(&options, &mut out).unwrap_err();
    assert!(matches!(err, DriverError::Load(LoadError::Open { .. })));
    assert!(err.to_string().starts_with("could not read file "));
    assert!(out.is_empty());
}

#[test]
fn run_with_longest_policy() {
    let file = rule_file(b"(|)");
    let options = DriverOptions {
        path: file.path().to_path_buf(),
        policy: MatchPolicy::Longest,
        ..DriverOptions::default()
    };
    let mut out = Vec::new();
    let summary = run(&options, &mut out).unwrap();
    assert_eq!(summary, Summary { tokens: 3, invalid: 0 });
}

// === Binary ===

#[test]
fn binary_defaults_to_rules_lex() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rules.lex"), "r(a);\n").unwrap();

    let output = rulex(&[], dir.path());
    assert!(output.status.success());
    let want = "\
rules.lex:1:1: INVALID r
rules.lex:1:2: PUNCT ( #2
rules.lex:1:3: INVALID a
rules.lex:1:4: PUNCT ) #3
rules.lex:1:5: PUNCT ; #4
rules.lex:2:1: END
5 tokens, 2 invalid
";
    assert_eq!(stdout(&output), want);
}

#[test]
fn binary_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = rulex(&["nope.lex"], dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with("could not read file nope.lex: "));
}

#[test]
fn binary_unknown_flag_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = rulex(&["--frobnicate"], dir.path());
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("error: unknown option '--frobnicate'"));
    assert!(err.contains("Usage: rulex"));
}

#[test]
fn binary_help_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = rulex(&["--help"], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Usage: rulex"));
}
