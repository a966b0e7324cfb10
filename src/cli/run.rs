use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use super::{args::Arguments, report::print_note};
use crate::{
    audit::{AuditOptions, AuditReport, run_audit},
    config::{Config, load_config},
    locales::{KeyMode, reference_file_name},
    markdown::{render_markdown, write_markdown},
};

/// Settings after merging CLI arguments over the config file.
#[derive(Debug)]
pub struct ResolvedSettings {
    pub options: AuditOptions,
    pub report_path: PathBuf,
}

/// Load config, audit every locale and write the markdown report.
///
/// # Returns
/// - `Ok(AuditReport)` with the audit result
/// - `Err` if config loading, any locale file, or the report write fails
pub fn run(args: &Arguments) -> Result<AuditReport> {
    let settings = resolve_settings(args)?;

    let report = run_audit(&settings.options)?;
    note_audit(args.verbose, &settings.options, &report);

    let markdown = render_markdown(&report, Utc::now());
    write_markdown(&settings.report_path, &markdown)?;
    print_note(
        args.verbose,
        &format!("Wrote markdown report to {}", settings.report_path.display()),
    );

    Ok(report)
}

fn note_audit(verbose: bool, options: &AuditOptions, report: &AuditReport) {
    let reference_path = options
        .locales_dir
        .join(reference_file_name(&report.reference_locale));
    print_note(
        verbose,
        &format!(
            "Loaded {} reference keys from {}",
            report.reference_key_count,
            reference_path.display()
        ),
    );
    for record in &report.records {
        print_note(
            verbose,
            &format!(
                "Checked {}: {} missing, {} additional",
                record.file, record.missing.count, record.additional.count
            ),
        );
    }
}

/// Merge CLI arguments, config file and defaults (CLI wins).
///
/// Paths from the config file resolve against the config file's directory;
/// paths given on the command line are used as-is.
pub fn resolve_settings(args: &Arguments) -> Result<ResolvedSettings> {
    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("Cannot access root directory: {}", args.root.display()))?;
    let loaded = load_config(&root)?;
    match &loaded.path {
        Some(path) => print_note(args.verbose, &format!("Using config file {}", path.display())),
        None => print_note(args.verbose, "No config file found, using defaults"),
    }

    let mut config: Config = loaded.config;
    if let Some(locale) = &args.primary_locale {
        config.primary_locale = locale.clone();
        config
            .validate()
            .context("Invalid value for --primary-locale")?;
    }

    let locales_dir = args
        .locales_dir
        .clone()
        .unwrap_or_else(|| resolve_path(&loaded.base_dir, &config.locales_dir));
    let report_path = args
        .report
        .clone()
        .unwrap_or_else(|| resolve_path(&loaded.base_dir, &config.report_path));

    let key_mode = if args.flatten_nested || config.flatten_nested {
        KeyMode::Nested
    } else {
        KeyMode::TopLevel
    };

    Ok(ResolvedSettings {
        options: AuditOptions {
            locales_dir,
            primary_locale: config.primary_locale.clone(),
            file_pattern: config.file_pattern()?,
            key_mode,
        },
        report_path,
    })
}

fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
