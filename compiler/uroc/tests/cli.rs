//! CLI integration tests: invoke the `uroc` binary end to end.
//!
//! None of these need the relay's toolchains; `verify` is exercised through
//! the library in `src/verify/tests.rs`.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn uroc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uroc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute uroc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn generate_prints_origin_to_stdout() {
    let output = uroc(&["generate", "--langs=python,bf"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let origin = stdout(&output);
    assert!(origin.starts_with("eval$s=%q(eval((%w(\n"));
    assert!(origin.ends_with("))\n"));
}

#[test]
fn generate_writes_origin_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("QR.rb");
    let output = uroc(&["generate", "-o", path.to_str().unwrap(), "--width=40"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let origin = fs::read_to_string(&path).unwrap();
    let standard = uro_compose::compose_standard().unwrap();
    assert_ne!(origin.as_bytes(), standard.origin().as_bytes(), "width should change the layout");
    assert!(origin.lines().skip(1).all(|line| line.chars().count() <= 40 || line.contains(".gsub")));
}

#[test]
fn generate_all_writes_every_stage() {
    let dir = TempDir::new().unwrap();
    let flag = format!("--dir={}", dir.path().display());
    let output = uroc(&["generate", &flag, "--langs=python,c,bf"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let mut files: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(files, ["QR.bf", "QR.c", "QR.py", "QR.rb"]);

    let python = fs::read_to_string(dir.path().join("QR.py")).unwrap();
    assert!(python.starts_with("print(\""));
}

#[test]
fn unknown_language_fails() {
    let output = uroc(&["generate", "--langs=python,cobol"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown language `cobol`"), "{stderr}");
}

#[test]
fn unknown_option_fails() {
    let output = uroc(&["generate", "--bogus"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn langs_lists_standard_relay() {
    let output = uroc(&["langs"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("Ruby"));
    assert!(listing.contains("QR.hs"));
    assert!(listing.contains("Brainfuck"));
}

#[test]
fn readme_without_probe() {
    let output = uroc(&["readme", "--no-probe", "--langs=python,bf"]);
    assert!(output.status.success());
    let readme = stdout(&output);
    assert!(readme.starts_with("# Uroboros\n"));
    assert!(readme.contains("This is a Ruby program that generates\nPython program that generates\n"));
    assert!(readme.contains("    $ ruby QR.rb > QR.py\n"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = uroc(&[]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Uroboros quine relay generator"));
}

#[test]
fn unknown_command_fails() {
    let output = uroc(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
}
