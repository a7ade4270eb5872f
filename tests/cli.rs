//! CLI integration tests for base-n
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base_n() -> Command {
    Command::cargo_bin("base-n").unwrap()
}

#[test]
fn test_help() {
    base_n()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("configurable base-N alphabets"));
}

#[test]
fn test_list_variants() {
    base_n()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base64"))
        .stdout(predicate::str::contains("base32"))
        .stdout(predicate::str::contains("base16"));
}

#[test]
fn test_encode_default_variant() {
    base_n()
        .write_stdin("Man")
        .assert()
        .success()
        .stdout(predicate::eq("TWFu\n"));
}

#[test]
fn test_encode_with_padding() {
    base_n()
        .write_stdin("Ma")
        .assert()
        .success()
        .stdout(predicate::eq("TWE=\n"));
}

#[test]
fn test_encode_no_pad() {
    base_n()
        .arg("--no-pad")
        .write_stdin("Ma")
        .assert()
        .success()
        .stdout(predicate::eq("TWE\n"));
}

#[test]
fn test_decode() {
    base_n()
        .arg("--decode")
        .write_stdin("TWFu")
        .assert()
        .success()
        .stdout(predicate::eq("Man"));
}

#[test]
fn test_decode_invalid_input_fails() {
    base_n()
        .arg("--decode")
        .write_stdin("TW!u")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid byte"));
}

#[test]
fn test_base32_variant() {
    base_n()
        .args(["--variant", "base32"])
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout(predicate::eq("MZXW6YTBOI======\n"));
}

#[test]
fn test_base16_variant_round_trip() {
    base_n()
        .args(["--variant", "base16"])
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout(predicate::eq("666F6F626172\n"));

    base_n()
        .args(["--variant", "base16", "--decode"])
        .write_stdin("666F6F626172")
        .assert()
        .success()
        .stdout(predicate::eq("foobar"));
}

#[test]
fn test_unknown_variant_fails() {
    base_n()
        .args(["--variant", "base999"])
        .write_stdin("Man")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_encode_wraps_long_output() {
    let data = "x".repeat(120);
    base_n()
        .write_stdin(data)
        .assert()
        .success()
        .stdout(predicate::str::contains("\r\n"));
}

#[test]
fn test_no_wrap_suppresses_line_breaks() {
    let data = "x".repeat(120);
    base_n()
        .arg("--no-wrap")
        .write_stdin(data)
        .assert()
        .success()
        .stdout(predicate::str::contains("\r\n").not());
}
