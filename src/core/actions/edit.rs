//! `--edit`: decrypt an eyaml file, open it in `$EDITOR`, encrypt it back.
//!
//! The decrypted text only ever lives in memory and in a private temporary
//! file that is removed when the edit finishes. The original file is
//! rewritten only after the editor exits successfully and every marker
//! encrypted.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};
use zeroize::Zeroizing;

use super::decrypt::decrypt_to_markers;
use super::encrypt::encrypt_markers;
use crate::core::constants::DEFAULT_EDITOR;
use crate::core::dispatch::ActionHandler;
use crate::core::resolve::{ResolvedConfiguration, Source};
use crate::error::{Error, Result};

pub struct Edit;

impl ActionHandler for Edit {
    fn execute(&self, config: &ResolvedConfiguration<'_>) -> Result<String> {
        let Source::EyamlFile(path) = &config.source else {
            return Err(Error::Editor(format!(
                "cannot edit a {} source",
                config.source.name()
            )));
        };

        let editable = Zeroizing::new(decrypt_to_markers(config, config.input())?);

        // Keep the extension so the editor picks the right syntax.
        let suffix = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let mut temp = tempfile::Builder::new()
            .prefix("eyaml_edit_")
            .suffix(&suffix)
            .tempfile()?;
        temp.write_all(editable.as_bytes())?;
        temp.flush()?;

        run_editor(temp.path())?;

        let edited = Zeroizing::new(fs::read_to_string(temp.path())?);
        let encrypted = encrypt_markers(config, &edited)?;
        replace_file(path, encrypted.as_bytes())?;

        info!(path = %path.display(), "file re-encrypted");
        Ok(String::new())
    }
}

/// Run `$EDITOR` (or `vi`) on `path` and wait for it.
///
/// `$EDITOR` may carry arguments, e.g. `code --wait`.
fn run_editor(path: &Path) -> Result<()> {
    let editor = std::env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| Error::Editor("empty editor command".to_string()))?;
    let executable =
        which::which(program).map_err(|e| Error::Editor(format!("{}: {}", program, e)))?;

    debug!(editor = %executable.display(), "launching editor");
    let status = Command::new(&executable).args(parts).arg(path).status()?;
    if !status.success() {
        return Err(Error::Editor(format!("{} exited with {}", program, status)));
    }
    Ok(())
}

/// Write `contents` to a sibling temp file and rename it over `path`.
///
/// The file keeps its permissions; a failed write leaves it untouched.
fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();

    let mut out = tempfile::NamedTempFile::new_in(dir)?;
    out.write_all(contents)?;
    out.as_file().sync_all()?;
    fs::set_permissions(out.path(), permissions)?;
    out.persist(path).map_err(|e| e.error)?;
    Ok(())
}
