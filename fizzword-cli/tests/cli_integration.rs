//! Integration tests for the fizzword CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_demo() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("demo");

    cmd.assert()
        .success()
        .stdout("output string: \n1 2 &*! Fizz 4 %%% Buzz Fizz\ncount: 3\n");
}

#[test]
fn test_process_literal_text() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-t")
        .arg("one    two  three    four     five");

    cmd.assert()
        .success()
        .stdout("one    two  Fizz    four     Buzz\ncount: 2\n");
}

#[test]
fn test_process_file() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").arg("-i").arg(fixture_path("mary.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Mary had Fizz little Buzz Fizz lamb, little Fizz Buzz had Fizz little lamb FizzBuzz fleece was Fizz as Buzz",
        ))
        .stdout(predicate::str::contains("count: 9"));
}

#[test]
fn test_process_lines() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("scenarios.txt"))
        .arg("--lines");

    let digits = "1 2 &*! Fizz 4 %%% Buzz Fizz\ncount: 3";
    let spacing = "one    two  Fizz    four     Buzz\ncount: 2";
    let symbols = "One! Two@ Fizz# Four$ Buzz% Fizz^ Seven&\ncount: 3";

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(digits))
        .stdout(predicate::str::contains(spacing))
        .stdout(predicate::str::contains(symbols));
}

#[test]
fn test_process_stdin() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").write_stdin("a b c d e f g\n");

    cmd.assert()
        .success()
        .stdout("a b Fizz d Buzz Fizz g\ncount: 3\n");
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-t")
        .arg("1 2 &*! 3 4 %%% 5 6")
        .arg("-f")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"<text>\""))
        .stdout(predicate::str::contains("\"output\": \"1 2 &*! Fizz 4 %%% Buzz Fizz\""))
        .stdout(predicate::str::contains("\"count\": 3"))
        .stdout(predicate::str::contains("\"words\": 6"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("mary.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout("");

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("lamb FizzBuzz fleece"));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("--lines");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("count: 9"))
        .stdout(predicate::str::contains("1 2 &*! Fizz 4 %%% Buzz Fizz"));
}

#[test]
fn test_too_short_input_fails() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").arg("-t").arg("Short");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<text>"))
        .stderr(predicate::str::contains("between 7 and 100 characters"));
}

#[test]
fn test_too_long_input_fails() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").arg("-t").arg("a".repeat(101));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("got 101"));
}

#[test]
fn test_blank_stdin_fails() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").write_stdin("        \n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("whitespace-only"));
}

#[test]
fn test_blank_stdin_fails_in_line_mode() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").arg("--lines").write_stdin("        \n   \n");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("<stdin>"))
        .stderr(predicate::str::contains("whitespace-only"));
}

#[test]
fn test_keep_going_skips_bad_input() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-t")
        .arg("tiny")
        .arg("-t")
        .arg("one two three")
        .arg("--keep-going");

    cmd.assert()
        .success()
        .stdout("one two Fizz\ncount: 1\n");
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("fizzword.toml");
    fs::write(
        &config_file,
        "[limits]\nmin = 1\n\n[output]\ndefault_format = \"json\"\npretty_json = false\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process")
        .arg("-t")
        .arg("a b c")
        .arg("-c")
        .arg(&config_file);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"output\":\"a b Fizz\""));
}

#[test]
fn test_invalid_file() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("fizzword").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("every third word with Fizz"));
}
