//! Option resolution.
//!
//! Turns the raw, possibly contradictory set of command-line directives into
//! exactly one action, exactly one input source, the loaded input text, and
//! the encryptors every method involved needs.
//!
//! Validation runs before any input is read: an ambiguous or empty request
//! fails without touching files or prompting.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::cipher::{Encryptor, KeyPaths, Registry};
use crate::core::format::OutputFormat;
use crate::core::prompt::SecretPrompt;
use crate::core::tag;
use crate::error::{Error, ResolveError, Result};

/// Raw directives as given on the command line.
///
/// Any combination can be expressed here; [`resolve`] decides whether it
/// makes sense.
#[derive(Debug, Clone, Default)]
pub struct Directives {
    pub createkeys: bool,
    pub decrypt: bool,
    pub encrypt: bool,
    /// `--edit <path>`: an action that also names its eyaml source.
    pub edit: Option<PathBuf>,
    pub eyaml: Option<PathBuf>,
    pub password: bool,
    pub string: Option<String>,
    pub file: Option<PathBuf>,
    pub keys: KeyPaths,
    /// Method for new encryptions; `None` means the registry default.
    pub encrypt_method: Option<String>,
    pub output: OutputFormat,
}

/// Top-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    CreateKeys,
    Decrypt,
    Encrypt,
    Edit,
}

impl Action {
    /// Directive name of the action.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateKeys => "createkeys",
            Self::Decrypt => "decrypt",
            Self::Encrypt => "encrypt",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Typed at a hidden prompt.
    Password,
    /// Given inline with `--string`.
    StringLiteral(String),
    /// A plain file whose whole content is one value.
    File(PathBuf),
    /// A configuration file containing `ENC[...]` tags.
    EyamlFile(PathBuf),
    /// Creating keys reads no input.
    NotApplicable,
}

impl Source {
    /// Directive name of the source.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::StringLiteral(_) => "string",
            Self::File(_) => "file",
            Self::EyamlFile(_) => "eyaml",
            Self::NotApplicable => "not_applicable",
        }
    }

    /// Whether the input is a single raw value rather than tagged text.
    pub fn is_raw_value(&self) -> bool {
        matches!(self, Self::Password | Self::StringLiteral(_) | Self::File(_))
    }

    /// Path of the file backing this source, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) | Self::EyamlFile(path) => Some(path),
            _ => None,
        }
    }
}

/// A fully resolved request, ready for dispatch.
///
/// Borrows the registry it was resolved against; every method in
/// `active_methods` has an entry in `encryptors`.
pub struct ResolvedConfiguration<'r> {
    pub action: Action,
    pub source: Source,
    /// Loaded input text; `None` only for `createkeys`.
    pub input: Option<String>,
    /// Method used for new encryptions.
    pub encrypt_method: String,
    pub active_methods: BTreeSet<String>,
    pub encryptors: BTreeMap<String, &'r dyn Encryptor>,
    pub keys: KeyPaths,
    pub output: OutputFormat,
    registry: &'r Registry,
}

impl<'r> ResolvedConfiguration<'r> {
    /// Input text, empty when none was loaded.
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    /// Encryptor for `method`.
    ///
    /// Active methods come from the resolved table. Methods that only appear
    /// later (for example in `DEC::method[...]!` markers written during an
    /// edit) are looked up in the registry.
    pub fn encryptor(&self, method: &str) -> Result<&'r dyn Encryptor> {
        match self.encryptors.get(method) {
            Some(encryptor) => Ok(*encryptor),
            None => self.registry.resolve(method),
        }
    }
}

impl fmt::Debug for ResolvedConfiguration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfiguration")
            .field("action", &self.action)
            .field("source", &self.source.name())
            .field("path", &self.source.path())
            .field("input_len", &self.input.as_ref().map(String::len))
            .field("encrypt_method", &self.encrypt_method)
            .field("active_methods", &self.active_methods)
            .field("keys", &self.keys)
            .field("output", &self.output)
            .finish()
    }
}

/// A source directive as given, before the edit rule is applied.
enum SourceDirective<'a> {
    Edit(&'a Path),
    Eyaml(&'a Path),
    Password,
    String(&'a str),
    File(&'a Path),
}

impl SourceDirective<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Edit(_) => "edit",
            Self::Eyaml(_) => "eyaml",
            Self::Password => "password",
            Self::String(_) => "string",
            Self::File(_) => "file",
        }
    }

    fn into_source(self) -> Source {
        match self {
            // Editing works on an eyaml file: the path given to --edit is that file.
            Self::Edit(path) | Self::Eyaml(path) => Source::EyamlFile(path.to_path_buf()),
            Self::Password => Source::Password,
            Self::String(value) => Source::StringLiteral(value.to_string()),
            Self::File(path) => Source::File(path.to_path_buf()),
        }
    }
}

impl Directives {
    fn actions(&self) -> Vec<Action> {
        [
            (self.createkeys, Action::CreateKeys),
            (self.decrypt, Action::Decrypt),
            (self.encrypt, Action::Encrypt),
            (self.edit.is_some(), Action::Edit),
        ]
        .into_iter()
        .filter_map(|(present, action)| present.then_some(action))
        .collect()
    }

    fn sources(&self) -> Vec<SourceDirective<'_>> {
        let mut sources = Vec::new();
        if let Some(path) = &self.edit {
            sources.push(SourceDirective::Edit(path));
        }
        if let Some(path) = &self.eyaml {
            sources.push(SourceDirective::Eyaml(path));
        }
        if self.password {
            sources.push(SourceDirective::Password);
        }
        if let Some(value) = &self.string {
            sources.push(SourceDirective::String(value));
        }
        if let Some(path) = &self.file {
            sources.push(SourceDirective::File(path));
        }
        sources
    }
}

/// Pick the single action and source, without reading anything.
///
/// # Errors
///
/// - `AmbiguousAction` if more than one action is given
/// - `AmbiguousSource` if more than one source is given
/// - `InvalidCombination` if `createkeys` is given a source
/// - `MissingOperation` if the action or the source is missing
pub fn select(directives: &Directives) -> Result<(Action, Source)> {
    let actions = directives.actions();
    if actions.len() > 1 {
        return Err(ResolveError::AmbiguousAction(actions.iter().map(|a| a.name()).collect()).into());
    }

    let mut sources = directives.sources();
    if sources.len() > 1 {
        return Err(ResolveError::AmbiguousSource(sources.iter().map(|s| s.name()).collect()).into());
    }

    let action = actions.first().copied();
    if action == Some(Action::CreateKeys) {
        if !sources.is_empty() {
            return Err(ResolveError::InvalidCombination.into());
        }
        return Ok((Action::CreateKeys, Source::NotApplicable));
    }

    match (action, sources.pop()) {
        (Some(action), Some(source)) => Ok((action, source.into_source())),
        _ => Err(ResolveError::MissingOperation.into()),
    }
}

/// Read the input text for a source.
pub fn load_input(source: &Source, prompt: &dyn SecretPrompt) -> Result<Option<String>> {
    let input = match source {
        Source::Password => prompt.read_secret()?,
        Source::StringLiteral(value) => value.clone(),
        Source::File(path) | Source::EyamlFile(path) => {
            debug!(path = %path.display(), "reading input");
            std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
                path: path.display().to_string(),
                source,
            })?
        }
        Source::NotApplicable => return Ok(None),
    };
    Ok(Some(input))
}

/// Methods whose encryptors the operation needs.
///
/// Raw values being encrypted and new keys use exactly the requested method;
/// their text is never scanned, so a literal that happens to contain
/// `ENC[...]` is just data. Everything else uses the methods its tags name.
pub fn active_methods(
    action: Action,
    source: &Source,
    input: Option<&str>,
    requested: &str,
) -> BTreeSet<String> {
    let single = || BTreeSet::from([requested.to_string()]);
    match action {
        Action::Encrypt if source.is_raw_value() => single(),
        Action::CreateKeys => single(),
        _ => input.map(tag::scan).unwrap_or_default(),
    }
}

/// Resolve raw directives into a configuration ready for dispatch.
///
/// # Errors
///
/// Returns `ResolveError` for invalid directive combinations, I/O errors
/// from loading the source, and `CipherError::UnknownMethod` for methods
/// missing from the registry.
pub fn resolve<'r>(
    directives: Directives,
    registry: &'r Registry,
    prompt: &dyn SecretPrompt,
) -> Result<ResolvedConfiguration<'r>> {
    let (action, source) = select(&directives)?;
    debug!(%action, source = source.name(), "selected operation");

    let input = load_input(&source, prompt)?;

    let encrypt_method = directives
        .encrypt_method
        .unwrap_or_else(|| registry.default_method().to_string());
    let active_methods = active_methods(action, &source, input.as_deref(), &encrypt_method);
    debug!(methods = ?active_methods, "active encryption methods");

    let encryptors = active_methods
        .iter()
        .map(|method| Ok((method.clone(), registry.resolve(method)?)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(ResolvedConfiguration {
        action,
        source,
        input,
        encrypt_method,
        active_methods,
        encryptors,
        keys: directives.keys,
        output: directives.output,
        registry,
    })
}
