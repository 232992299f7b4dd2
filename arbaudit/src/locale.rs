//! Locale resource files (`.arb`) and their top-level key sets.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::{Map, Value};
use unic_langid::LanguageIdentifier;

use crate::{defaults::ARB_EXTENSION, error::Error, text::read_text};

/// Prefix of ARB metadata keys such as `@@locale` or `@greeting`.
pub const METADATA_PREFIX: char = '@';

const LOCALE_KEY: &str = "@@locale";

/// One parsed locale resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// File name as shown in reports (e.g. `app_de.arb`).
    pub name: String,
    /// Path the file was read from, for diagnostics.
    pub path: PathBuf,
    /// BCP 47 tag from `@@locale` or the file name, when one is recognizable.
    pub language: Option<String>,
    /// Top-level keys, metadata keys included.
    pub keys: BTreeSet<String>,
}

impl LocaleFile {
    /// Reads and parses a locale file from disk.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = read_text(path)?;
        let object = parse_object(&content).map_err(|e| match e {
            Error::Parse(source) => Error::parse_error(path, source),
            Error::InvalidResource(msg) => {
                Error::InvalidResource(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let language = declared_language(&object).or_else(|| infer_language_from_file_name(&name));
        let keys: BTreeSet<String> = object.into_iter().map(|(key, _)| key).collect();

        tracing::debug!(
            file = %name,
            keys = keys.len(),
            language = ?language,
            "loaded locale file"
        );
        Ok(LocaleFile {
            name,
            path: path.to_path_buf(),
            language,
            keys,
        })
    }

    /// Key set used for diffing, optionally without ARB metadata keys.
    pub fn key_set(&self, ignore_metadata: bool) -> BTreeSet<&str> {
        self.keys
            .iter()
            .map(String::as_str)
            .filter(|key| !(ignore_metadata && is_metadata_key(key)))
            .collect()
    }
}

/// Whether a key is ARB metadata rather than a translatable message.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_PREFIX)
}

/// Extracts the top-level key set of a JSON object document.
///
/// ```rust
/// let keys = arbaudit::locale::key_set_from_str(r#"{"b": "B", "a": "A"}"#)?;
/// assert_eq!(keys.into_iter().collect::<Vec<_>>(), ["a", "b"]);
/// # Ok::<(), arbaudit::Error>(())
/// ```
pub fn key_set_from_str(content: &str) -> Result<BTreeSet<String>, Error> {
    Ok(parse_object(content)?.into_iter().map(|(key, _)| key).collect())
}

fn parse_object(content: &str) -> Result<Map<String, Value>, Error> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidResource(format!(
            "top-level value is {}, expected an object",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn normalize_lang(candidate: &str) -> Option<String> {
    let canonical = candidate.trim().replace('_', "-");
    LanguageIdentifier::from_str(&canonical).ok()?;
    Some(canonical)
}

fn declared_language(object: &Map<String, Value>) -> Option<String> {
    object.get(LOCALE_KEY)?.as_str().and_then(normalize_lang)
}

/// Infers the language tag from an ARB file name.
///
/// Flutter names files `<prefix>_<locale>.arb`, where the locale itself may
/// contain underscores (`app_pt_BR.arb`). The longest suffix that is a
/// canonically cased language identifier wins, so `my_app_de.arb` yields `de`
/// rather than `app-DE`.
///
/// ```rust
/// use arbaudit::locale::infer_language_from_file_name;
///
/// assert_eq!(infer_language_from_file_name("app_de.arb"), Some("de".to_string()));
/// assert_eq!(infer_language_from_file_name("app_pt_BR.arb"), Some("pt-BR".to_string()));
/// assert_eq!(infer_language_from_file_name("messages.json"), None);
/// ```
pub fn infer_language_from_file_name(name: &str) -> Option<String> {
    let stem = name.strip_suffix(&format!(".{}", ARB_EXTENSION))?;
    let parts: Vec<&str> = stem.split('_').collect();
    // Keep at least one prefix segment; `app.arb` has no locale.
    (1..parts.len())
        .map(|start| parts[start..].join("_"))
        .find_map(|candidate| canonical_lang(&candidate))
}

fn canonical_lang(candidate: &str) -> Option<String> {
    let hyphenated = candidate.replace('_', "-");
    let parsed = LanguageIdentifier::from_str(&hyphenated).ok()?;
    (parsed.to_string() == hyphenated).then_some(hyphenated)
}
