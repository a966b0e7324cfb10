//! Markdown report written to disk after every run.
//!
//! Unlike the console report, the markdown report lists every missing and
//! additional key without elision.

use std::{fmt::Write as _, fs, path::Path};

use chrono::{DateTime, Utc};
use unicode_width::UnicodeWidthStr;

use crate::{
    audit::{AuditReport, LocaleRecord},
    error::AuditError,
};

pub const REPORT_TITLE: &str = "Translation Report";

/// Status cell for a complete locale.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Status cell for a locale with missing keys.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const SUMMARY_HEADERS: [&str; 5] = ["Locale", "File", "Missing", "Additional", "Status"];

/// Render the full markdown report.
pub fn render_markdown(report: &AuditReport, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# {}", REPORT_TITLE);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Reference locale ({}): {} keys",
        report.reference_locale, report.reference_key_count
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out);
    write_summary_table(&mut out, &report.records);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Details");
    if report.records.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No candidate locale files found.");
    }
    for record in &report.records {
        let _ = writeln!(out);
        write_details(&mut out, record);
    }

    out
}

/// Overwrite `path` with `contents`, creating parent directories as needed.
pub fn write_markdown(path: &Path, contents: &str) -> Result<(), AuditError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| AuditError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_summary_table(out: &mut String, records: &[LocaleRecord]) {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|record| {
            [
                escape_cell(&record.locale),
                escape_cell(&record.file),
                record.missing.count.to_string(),
                record.additional.count.to_string(),
                status_mark(record).to_string(),
            ]
        })
        .collect();

    let mut widths = SUMMARY_HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header = SUMMARY_HEADERS.map(String::from);
    write_row(out, &header, &widths);
    let separator = widths.map(|w| "-".repeat(w));
    write_row(out, &separator, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.width());
        let _ = write!(out, " {}{} |", cell, " ".repeat(padding));
    }
    out.push('\n');
}

fn write_details(out: &mut String, record: &LocaleRecord) {
    let _ = writeln!(out, "### {} ({})", record.locale, record.file);
    let _ = writeln!(out);

    let _ = writeln!(out, "Missing translations: {}", record.missing.count);
    write_key_list(out, &record.missing.keys);
    let _ = writeln!(out);

    let _ = writeln!(out, "Additional translations: {}", record.additional.count);
    write_key_list(out, &record.additional.keys);
}

fn write_key_list(out: &mut String, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(out);
    for key in keys {
        let _ = writeln!(out, "- {}", code_span(key));
    }
}

fn status_mark(record: &LocaleRecord) -> &'static str {
    if record.is_complete() {
        SUCCESS_MARK
    } else {
        FAILURE_MARK
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Inline code for a key. The fence is one backtick longer than the longest
/// backtick run inside, and line breaks are shown escaped.
fn code_span(text: &str) -> String {
    if text.is_empty() {
        return "*(empty key)*".to_string();
    }

    let text = text.replace('\r', "\\r").replace('\n', "\\n");
    let longest_run = text.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);

    // CommonMark strips one space from each side when both ends are spaces.
    let pad = text.starts_with('`')
        || text.ends_with('`')
        || (text.starts_with(' ') && text.ends_with(' ') && !text.trim().is_empty());
    if pad {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}
