//! Loading locale JSON files and enumerating candidate locales.

use std::{
    collections::BTreeSet,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde_json::{Map, Value};

use crate::error::AuditError;

/// Default file name pattern for locale documents.
pub const LOCALE_FILE_PATTERN: &str = "*.json";

/// Set of translation keys, iterated in lexicographic order.
pub type KeySet = BTreeSet<String>;

/// How keys are read out of a locale document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMode {
    /// Only the keys of the root object.
    #[default]
    TopLevel,
    /// Nested objects are flattened into dot-joined leaf keys (`Common.save`).
    Nested,
}

/// Read a locale document and return its keys.
///
/// Fails with [`AuditError::NotFound`] if the file is absent, and with
/// [`AuditError::Parse`] or [`AuditError::NotAnObject`] if it is not a JSON object.
pub fn load_keys(path: &Path, mode: KeyMode) -> Result<KeySet, AuditError> {
    let content = fs::read(path).map_err(|e| AuditError::from_io(path, e))?;

    // Invalid UTF-8 surfaces here as a parse error, not an I/O error.
    let json: Value = serde_json::from_slice(&content).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(map) = json else {
        return Err(AuditError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let mut keys = KeySet::new();
    match mode {
        KeyMode::TopLevel => keys.extend(map.into_iter().map(|(key, _)| key)),
        KeyMode::Nested => flatten_keys(&map, "", &mut keys),
    }
    Ok(keys)
}

fn flatten_keys(map: &Map<String, Value>, prefix: &str, keys: &mut KeySet) {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => flatten_keys(inner, &full_key, keys),
            _ => {
                keys.insert(full_key);
            }
        }
    }
}

/// Extracts locale from filename. Non UTF-8 names are converted lossily.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/locales/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
}

/// File name of the reference document for `primary_locale`.
pub fn reference_file_name(primary_locale: &str) -> String {
    format!("{}.json", primary_locale)
}

/// List candidate locale files in `locales_dir`, sorted by file name.
///
/// Every regular file whose name matches `pattern` is returned except the
/// reference document itself, which is matched on its exact file name.
pub fn scan_candidates(
    locales_dir: &Path,
    pattern: &Pattern,
    primary_locale: &str,
) -> Result<Vec<PathBuf>, AuditError> {
    if !locales_dir.exists() {
        return Err(AuditError::NotFound {
            path: locales_dir.to_path_buf(),
        });
    }

    let reference = reference_file_name(primary_locale);
    let entries = fs::read_dir(locales_dir).map_err(|e| AuditError::from_io(locales_dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AuditError::from_io(locales_dir, e))?;
        let path = entry.path();

        let file_name = entry.file_name();
        let is_reference = file_name == OsStr::new(&reference);

        if path.is_file() && !is_reference && pattern.matches(&file_name.to_string_lossy()) {
            candidates.push(path);
        }
    }

    candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(candidates)
}
