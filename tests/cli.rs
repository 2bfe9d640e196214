//! Integration tests for the command-line interface.
//!
//! Runs the built binary and checks stdout, stderr and exit status for
//! each subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn caesarcrypt() -> Command {
    Command::cargo_bin("caesarcrypt").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// encode / decode
// ═══════════════════════════════════════════════════════════════════════

/// Text given as an argument is encoded and printed.
#[test]
fn encode_argument() {
    caesarcrypt()
        .args(["encode", "--shift", "3", "HELLO"])
        .assert()
        .success()
        .stdout("KHOOR\n");
}

/// Decoding restores mixed case and punctuation.
#[test]
fn decode_argument() {
    caesarcrypt()
        .args(["decode", "-s", "5", "Fyyfhp fy Ifbs!"])
        .assert()
        .success()
        .stdout("Attack at Dawn!\n");
}

/// With no TEXT argument the input comes from stdin, minus the trailing
/// newline a pipe adds.
#[test]
fn encode_reads_stdin_when_text_omitted() {
    caesarcrypt()
        .args(["encode", "-s", "3"])
        .write_stdin("HELLO\n")
        .assert()
        .success()
        .stdout("KHOOR\n");
}

/// `-` as TEXT also reads stdin, and a CRLF ending is stripped whole.
#[test]
fn decode_reads_stdin_for_dash() {
    caesarcrypt()
        .args(["decode", "-s", "3", "-"])
        .write_stdin("KHOOR\r\n")
        .assert()
        .success()
        .stdout("HELLO\n");
}

/// Only one trailing newline is dropped; inner newlines survive.
#[test]
fn stdin_keeps_inner_newlines() {
    caesarcrypt()
        .args(["encode", "-s", "1", "-"])
        .write_stdin("ab\ncd\n\n")
        .assert()
        .success()
        .stdout("bc\nde\n\n");
}

/// An out-of-range shift is a validation failure with exit status 1.
#[test]
fn encode_rejects_out_of_range_shift() {
    caesarcrypt()
        .args(["encode", "-s", "26", "HELLO"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Shift value must be between 1 and 25",
        ));
}

/// A non-numeric shift reports the parse error, not the range error.
#[test]
fn decode_rejects_non_numeric_shift() {
    caesarcrypt()
        .args(["decode", "-s", "three", "HELLO"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Invalid shift value. Must be a number between 1 and 25.",
        ));
}

/// Empty stdin is empty text and is rejected.
#[test]
fn encode_rejects_empty_stdin() {
    caesarcrypt()
        .args(["encode", "-s", "3"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: No text provided"));
}

/// A failure is reported once on stderr, not echoed again by the logger.
#[test]
fn failure_printed_once() {
    caesarcrypt()
        .args(["encode", "-s", "0", "HELLO"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Fatal error").not());
}

// ═══════════════════════════════════════════════════════════════════════
// alphabet
// ═══════════════════════════════════════════════════════════════════════

/// Prints the identity row then the shifted row.
#[test]
fn alphabet_rows() {
    caesarcrypt()
        .args(["alphabet", "--shift", "1"])
        .assert()
        .success()
        .stdout("ABCDEFGHIJKLMNOPQRSTUVWXYZ\nBCDEFGHIJKLMNOPQRSTUVWXYZA\n");
}

/// An out-of-range shift goes through the same validation as encode and
/// exits 1, not with clap's usage error.
#[test]
fn alphabet_rejects_out_of_range_shift() {
    caesarcrypt()
        .args(["alphabet", "--shift", "26"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Shift value must be between 1 and 25",
        ));
}

/// A non-numeric alphabet shift is a parse error with exit status 1.
#[test]
fn alphabet_rejects_non_numeric_shift() {
    caesarcrypt()
        .args(["alphabet", "-s", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid shift value"));
}

/// A missing required argument is still clap's usage error.
#[test]
fn missing_shift_is_usage_error() {
    caesarcrypt()
        .args(["encode", "HELLO"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--shift"));
}
