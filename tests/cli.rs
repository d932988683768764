//! End-to-end tests for the `deck` binary.

#![cfg(feature = "cli")]

use std::process::{Command, Output};

use assert_cmd::prelude::*;
use card52::cli::HEADER;
use card52::standard_deck;
use predicates::prelude::*;

fn run_deck(args: &[&str]) -> Output {
    let mut cmd = Command::cargo_bin("deck").expect("binary exists");
    cmd.args(args).env_remove("RUST_LOG");
    cmd.output().expect("deck runs")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn prints_all_cards_and_exits_cleanly() {
    let output = run_deck(&[]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    let expected: Vec<String> = standard_deck().iter().map(ToString::to_string).collect();
    assert_eq!(lines, expected);
    assert_eq!(lines.first().map(String::as_str), Some("[A S]"));
    assert_eq!(lines.last().map(String::as_str), Some("[K C]"));
}

#[test]
fn header_flag_prints_banner_first() {
    let output = run_deck(&["--header"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 53);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "[A S]");
}

#[test]
fn glyphs_flag_uses_suit_symbols() {
    let output = run_deck(&["--glyphs"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 52);
    assert_eq!(lines[0], "[A ♠]");
    assert_eq!(lines[22], "[10 ♥]");
    assert_eq!(lines[51], "[K ♣]");
}

#[test]
fn logs_stay_off_stdout() {
    Command::cargo_bin("deck")
        .expect("binary exists")
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[A S]\n"))
        .stdout(predicate::str::contains("printed").not());
}

#[test]
fn unknown_flag_fails() {
    Command::cargo_bin("deck")
        .expect("binary exists")
        .arg("--shuffle")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
