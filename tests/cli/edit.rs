//! Tests for `eyaml --edit`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_edit_noop_editor_keeps_values() {
    let t = Test::with_keys();

    let output = t.encrypt_string("unchanged");
    assert_success(&output);
    let tag = stdout(&output).trim().to_string();
    t.write("secrets.yaml", &format!("key: {}\nplain: value\n", tag));

    let output = t.edit("secrets.yaml", "true");
    assert_success(&output);
    assert!(stdout(&output).is_empty());

    let edited = t.read("secrets.yaml");
    assert!(edited.contains("plain: value"));
    assert!(edited.contains("key: ENC[age,"));
    assert!(!edited.contains("unchanged"));

    let output = t.decrypt_eyaml("secrets.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "key: DEC::age[unchanged]!");
}

#[cfg(target_os = "linux")]
#[test]
fn test_edit_changes_value() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.edit("secrets.yaml", "sed -i s/hunter2/swordfish/");
    assert_success(&output);

    let edited = t.read("secrets.yaml");
    assert!(!edited.contains("swordfish"), "value must be stored encrypted");

    let output = t.run(&["--decrypt", "--file", "secrets.yaml"]);
    assert_success(&output);
    assert_stdout_contains(&output, "password: swordfish");
    assert_stdout_contains(&output, "token: sk-test-12345");
}

#[cfg(target_os = "linux")]
#[test]
fn test_edit_new_marker_uses_requested_method() {
    let t = Test::new();
    t.write("secrets.yaml", "a: 1\n");

    let output = t
        .cmd()
        .env("EDITOR", "sed -i s/1/DEC::[added]!/")
        .args(["--edit", "secrets.yaml", "--encrypt-method", "plaintext"])
        .output()
        .unwrap();
    assert_success(&output);

    // base64("added")
    assert_eq!(t.read("secrets.yaml"), "a: ENC[plaintext,YWRkZWQ=]\n");
}

#[cfg(unix)]
#[test]
fn test_edit_failing_editor_leaves_file() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.edit("secrets.yaml", "false");
    assert_failure(&output);
    assert_stderr_contains(&output, "editor failed");
    assert_eq!(t.read("secrets.yaml"), PLAINTEXT_EYAML);
}

#[test]
fn test_edit_missing_editor() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.edit("secrets.yaml", "definitely-not-an-editor-xyz");
    assert_failure(&output);
    assert_stderr_contains(&output, "definitely-not-an-editor-xyz");
    assert_eq!(t.read("secrets.yaml"), PLAINTEXT_EYAML);
}

#[test]
fn test_edit_with_other_source_ambiguous() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.run(&["--edit", "secrets.yaml", "--string", "x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "you can only specify one of (edit, string)");
}

#[cfg(unix)]
#[test]
fn test_edit_keeps_secret_with_delimiters() {
    let t = Test::new();
    let original = format!("k: {}\nplain: value\n", DELIMITER_TAG);
    t.write("secrets.yaml", &original);

    let output = t.edit("secrets.yaml", "true");
    assert_success(&output);

    let edited = t.read("secrets.yaml");
    assert_eq!(edited, original);
    assert!(!edited.contains("b]!"), "secret leaked: {}", edited);
}

#[cfg(unix)]
#[test]
fn test_edit_preserves_permissions_and_leaves_no_temp_files() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let path = t.write("secrets.yaml", PLAINTEXT_EYAML);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

    let output = t.edit("secrets.yaml", "true");
    assert_success(&output);

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
    assert_eq!(t.read("secrets.yaml"), PLAINTEXT_EYAML);

    let entries: Vec<_> = std::fs::read_dir(t.dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("secrets.yaml")]);
}
