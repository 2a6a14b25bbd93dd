//! Tests for `eyaml --decrypt`.

use crate::support::*;

#[test]
fn test_decrypt_string_tag() {
    let t = Test::new();

    let output = t.decrypt_string(PLAINTEXT_TAG);
    assert_success(&output);
    assert_eq!(stdout(&output), "hunter2\n");
}

#[test]
fn test_decrypt_eyaml_to_markers() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.decrypt_eyaml("secrets.yaml");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), PLAINTEXT_EYAML_DECRYPTED.trim_end());
}

#[test]
fn test_decrypt_file_to_plaintext() {
    let t = Test::new();
    t.write("secrets.yaml", PLAINTEXT_EYAML);

    let output = t.run(&["--decrypt", "--file", "secrets.yaml"]);
    assert_success(&output);
    assert_stdout_contains(&output, "password: hunter2\n");
    assert_stdout_contains(&output, "token: sk-test-12345\n");
    assert_stdout_excludes(&output, "DEC::");
}

#[test]
fn test_decrypt_mixed_methods() {
    let t = Test::with_keys();

    let output = t.encrypt_string("age-secret");
    assert_success(&output);
    let age_tag = stdout(&output).trim().to_string();

    t.write(
        "mixed.yaml",
        &format!("a: {}\nb: {}\n", age_tag, PLAINTEXT_TAG),
    );

    let output = t.decrypt_eyaml("mixed.yaml");
    assert_success(&output);
    assert_stdout_contains(&output, "a: DEC::age[age-secret]!");
    assert_stdout_contains(&output, "b: DEC::plaintext[hunter2]!");
}

#[test]
fn test_decrypt_tag_without_method_uses_default() {
    let t = Test::with_keys();

    let output = t.encrypt_string("implicit");
    assert_success(&output);
    let tag = stdout(&output).trim().replacen("ENC[age,", "ENC[", 1);

    let output = t.decrypt_string(&tag);
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "implicit");
}

#[test]
fn test_decrypt_block_formatted_tag() {
    let t = Test::with_keys();

    let output = t.run(&["-e", "-s", "a long enough value to wrap", "-o", "block"]);
    assert_success(&output);
    t.write("block.yaml", &format!("key: {}\n", stdout(&output).trim_end()));

    let output = t.run(&["--decrypt", "--file", "block.yaml"]);
    assert_success(&output);
    assert_stdout_contains(&output, "a long enough value to wrap");
}

#[test]
fn test_decrypt_unknown_method_in_file() {
    let t = Test::new();
    t.write("secrets.yaml", "a: ENC[pkcs7,MIIB]\n");

    let output = t.decrypt_eyaml("secrets.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown encryption method: pkcs7");
    assert!(stdout(&output).is_empty(), "no partial output");
}

#[test]
fn test_decrypt_text_without_tags_unchanged() {
    let t = Test::new();
    t.write("plain.yaml", "a: 1\nb: ENC[not closed\n");

    let output = t.decrypt_eyaml("plain.yaml");
    assert_success(&output);
    assert_eq!(stdout(&output), "a: 1\nb: ENC[not closed\n\n");
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    let t = Test::with_keys();
    let output = t.encrypt_string("secret");
    let tag = stdout(&output).trim().to_string();

    let other = Test::with_keys();
    let output = other.decrypt_string(&tag);
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_decrypt_missing_file() {
    let t = Test::new();

    let output = t.decrypt_eyaml("missing.yaml");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read missing.yaml");
}
