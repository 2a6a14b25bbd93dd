//! Tests for directive validation and CLI flags.

use crate::support::*;

#[test]
fn test_help_flag() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    assert_stdout_contains(&output, "--createkeys");
    assert_stdout_contains(&output, "--encrypt-method");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "eyaml");
}

#[test]
fn test_nothing_to_do() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to do");
    assert_stderr_contains(&output, "eyaml --help");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_action_without_source() {
    let t = Test::new();

    let output = t.run(&["--decrypt"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to do");
}

#[test]
fn test_source_without_action() {
    let t = Test::new();

    let output = t.run(&["--string", "hello"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to do");
}

#[test]
fn test_two_actions() {
    let t = Test::new();

    let output = t.run(&["--encrypt", "--decrypt", "--string", "x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "you can only specify one of (decrypt, encrypt)");
}

#[test]
fn test_two_sources() {
    let t = Test::new();

    let output = t.run(&["--encrypt", "--string", "x", "--file", "y"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "you can only specify one of (string, file)");
}

#[test]
fn test_two_sources_read_nothing() {
    let t = Test::new();

    // --password would block on stdin if any source were loaded.
    let output = t
        .cmd()
        .args(["--decrypt", "--password", "--eyaml", "missing.yaml"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "you can only specify one of (eyaml, password)");
}

#[test]
fn test_invalid_output_format() {
    let t = Test::new();

    let output = t.run(&["-e", "-s", "x", "-o", "json"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unexpected_argument() {
    let t = Test::new();

    let output = t.run(&["--bogus"]);
    assert_failure(&output);
}
