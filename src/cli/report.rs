//! Console report formatting and printing.
//!
//! Long key lists are elided here; the markdown report carries the full lists.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::audit::{AuditReport, KeyReport, LocaleRecord};

/// Maximum number of missing keys to display per locale.
const MAX_MISSING_DISPLAY: usize = 10;

/// Maximum number of additional keys to display per locale.
const MAX_ADDITIONAL_DISPLAY: usize = 5;

const RULE_WIDTH: usize = 50;

/// Print the audit report to stdout.
pub fn print_report(report: &AuditReport) {
    print_report_to(report, &mut io::stdout().lock());
}

/// Print the audit report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_report_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Translation Check Results".bold());
    let _ = writeln!(writer, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(
        writer,
        "Reference locale ({}): {} keys",
        report.reference_locale, report.reference_key_count
    );
    let _ = writeln!(writer);

    for record in &report.records {
        print_record(record, writer);
        let _ = writeln!(writer);
    }

    if report.is_complete() {
        let _ = writeln!(writer, "{}", "All translations are complete!".green());
    } else {
        let _ = writeln!(writer, "{}", "Some translations are missing!".red());
    }
}

/// Print the audit report as pretty JSON to stdout.
pub fn print_json(report: &AuditReport) -> Result<()> {
    print_json_to(report, &mut io::stdout().lock())
}

/// Print the audit report as pretty JSON to a custom writer.
pub fn print_json_to<W: Write>(report: &AuditReport, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize audit report")?;
    writeln!(writer, "{}", json).context("Failed to write audit report")?;
    Ok(())
}

/// Print a verbose-mode note to stderr.
pub fn print_note(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", "note:".bold().cyan(), message);
    }
}

fn print_record<W: Write>(record: &LocaleRecord, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Locale: {} ({})",
        record.locale.bold(),
        record.file
    );

    print_key_report(
        writer,
        "Missing translations",
        &record.missing,
        MAX_MISSING_DISPLAY,
        |count| count.red().bold(),
    );
    print_key_report(
        writer,
        "Additional translations",
        &record.additional,
        MAX_ADDITIONAL_DISPLAY,
        |count| count.yellow(),
    );
}

fn print_key_report<W: Write>(
    writer: &mut W,
    label: &str,
    report: &KeyReport,
    max_display: usize,
    highlight: impl Fn(&str) -> colored::ColoredString,
) {
    if report.is_empty() {
        let _ = writeln!(writer, "  {}: 0", label);
        return;
    }

    let _ = writeln!(
        writer,
        "  {}: {}",
        label,
        highlight(&report.count.to_string())
    );
    for key in report.keys.iter().take(max_display) {
        let _ = writeln!(writer, "    - {}", key);
    }

    let remaining = report.count.saturating_sub(max_display);
    if remaining > 0 {
        let _ = writeln!(
            writer,
            "    {}",
            format!("... and {} more", remaining).dimmed()
        );
    }
}
