//! Test fixtures and constants.

/// A value tagged with the plaintext method: base64 of `hunter2`.
pub const PLAINTEXT_TAG: &str = "ENC[plaintext,aHVudGVyMg==]";

/// Eyaml document whose values use the plaintext method only.
pub const PLAINTEXT_EYAML: &str = "\
database:
  user: admin
  password: ENC[plaintext,aHVudGVyMg==]
api:
  token: ENC[plaintext,c2stdGVzdC0xMjM0NQ==]
";

/// The same document after `--decrypt --eyaml`.
pub const PLAINTEXT_EYAML_DECRYPTED: &str = "\
database:
  user: admin
  password: DEC::plaintext[hunter2]!
api:
  token: DEC::plaintext[sk-test-12345]!
";

/// Secrets exercised across multiple tests.
pub const STANDARD_SECRETS: &[&str] = &[
    "postgres://localhost/mydb",
    "sk-test-12345",
    "super secret with spaces",
    "p@ssw0rd!#$%",
    "multi\nline",
];

/// A secret containing the marker closing sequence.
pub const DELIMITER_SECRET: &str = "a]!b";

/// `DELIMITER_SECRET` tagged with the plaintext method.
pub const DELIMITER_TAG: &str = "ENC[plaintext,YV0hYg==]";
