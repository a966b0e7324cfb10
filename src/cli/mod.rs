//! Command-line interface layer.

use anyhow::Result;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use run::{ResolvedSettings, resolve_settings, run};

/// Run the auditor and print its report.
///
/// Errors are returned to the caller, which maps them to [`ExitStatus::Error`].
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let report = run(&args)?;

    match args.format {
        OutputFormat::Text => report::print_report(&report),
        OutputFormat::Json => report::print_json(&report)?,
    }

    Ok(ExitStatus::from_report(&report))
}
