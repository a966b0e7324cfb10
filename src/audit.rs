//! Comparing candidate locales against the reference locale.
//!
//! Missing keys exist in the reference but not in a candidate; additional
//! keys exist in a candidate but not in the reference. Only missing keys make
//! an audit incomplete.

use std::path::{Path, PathBuf};

use glob::Pattern;
use serde::Serialize;

use crate::{
    error::AuditError,
    locales::{KeyMode, KeySet, extract_locale, load_keys, reference_file_name, scan_candidates},
};

/// A set of keys together with its size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    /// Keys in lexicographic order.
    pub keys: Vec<String>,
    pub count: usize,
}

impl KeyReport {
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        let mut keys: Vec<String> = keys.into_iter().collect();
        keys.sort();
        keys.dedup();
        let count = keys.len();
        Self { keys, count }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Audit outcome for a single candidate locale file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleRecord {
    #[serde(rename = "lang")]
    pub locale: String,
    pub file: String,
    pub missing: KeyReport,
    pub additional: KeyReport,
}

impl LocaleRecord {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Outcome of auditing every candidate against the reference locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub reference_locale: String,
    pub reference_key_count: usize,
    pub records: Vec<LocaleRecord>,
}

impl AuditReport {
    /// True when no candidate is missing any reference key.
    pub fn is_complete(&self) -> bool {
        self.records.iter().all(LocaleRecord::is_complete)
    }
}

/// Where to find locale files and how to read them.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub locales_dir: PathBuf,
    pub primary_locale: String,
    pub file_pattern: Pattern,
    pub key_mode: KeyMode,
}

/// Build the record for one candidate from its key set.
pub fn compare_keys(
    locale: impl Into<String>,
    file: impl Into<String>,
    reference: &KeySet,
    candidate: &KeySet,
) -> LocaleRecord {
    LocaleRecord {
        locale: locale.into(),
        file: file.into(),
        missing: KeyReport::new(reference.difference(candidate).cloned()),
        additional: KeyReport::new(candidate.difference(reference).cloned()),
    }
}

/// Load a candidate locale file and compare it with the reference keys.
pub fn audit_file(
    path: &Path,
    reference: &KeySet,
    mode: KeyMode,
) -> Result<LocaleRecord, AuditError> {
    let candidate = load_keys(path, mode)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let locale = extract_locale(path).unwrap_or_else(|| file.clone());
    Ok(compare_keys(locale, file, reference, &candidate))
}

/// Audit every candidate locale in `options.locales_dir`.
///
/// Any missing or malformed file aborts the run.
pub fn run_audit(options: &AuditOptions) -> Result<AuditReport, AuditError> {
    let reference_path = options
        .locales_dir
        .join(reference_file_name(&options.primary_locale));
    let reference = load_keys(&reference_path, options.key_mode)?;

    let candidates = scan_candidates(
        &options.locales_dir,
        &options.file_pattern,
        &options.primary_locale,
    )?;

    let records = candidates
        .iter()
        .map(|path| audit_file(path, &reference, options.key_mode))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AuditReport {
        reference_locale: options.primary_locale.clone(),
        reference_key_count: reference.len(),
        records,
    })
}
