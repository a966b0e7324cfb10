use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::Deserialize;

use crate::locales::LOCALE_FILE_PATTERN;

pub const CONFIG_FILE_NAME: &str = ".localeauditrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    #[serde(default = "default_report_path")]
    pub report_path: String,
    #[serde(default = "default_locale_file_pattern")]
    pub locale_file_pattern: String,
    #[serde(default)]
    pub flatten_nested: bool,
}

fn default_locales_dir() -> String {
    "frontend/i18n/locales".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

fn default_report_path() -> String {
    "translation-report.md".to_string()
}

fn default_locale_file_pattern() -> String {
    LOCALE_FILE_PATTERN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_dir: default_locales_dir(),
            primary_locale: default_primary_locale(),
            report_path: default_report_path(),
            locale_file_pattern: default_locale_file_pattern(),
            flatten_nested: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the primary locale is not a bare file stem or the
    /// locale file pattern is not a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.primary_locale.trim().is_empty() {
            bail!("'primaryLocale' must not be empty");
        }
        if self.primary_locale.contains(['/', '\\']) {
            bail!(
                "'primaryLocale' must be a locale name, not a path: \"{}\"",
                self.primary_locale
            );
        }

        self.file_pattern()?;
        Ok(())
    }

    /// Compiled glob for `localeFilePattern`.
    pub fn file_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.locale_file_pattern).with_context(|| {
            format!(
                "Invalid glob pattern in 'localeFilePattern': \"{}\"",
                self.locale_file_pattern
            )
        })
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` if using defaults.
    pub path: Option<PathBuf>,
    /// Directory that relative config paths resolve against.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
