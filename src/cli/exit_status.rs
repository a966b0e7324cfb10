use std::process::ExitCode;

use crate::audit::AuditReport;

/// Exit status for the auditor, following common conventions for linter tools.
///
/// - `Success` (0): every locale has all reference keys
/// - `Failure` (1): at least one locale is missing keys
/// - `Error` (2): the run aborted (missing file, parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every locale has all reference keys.
    Success,
    /// At least one locale is missing keys.
    Failure,
    /// The run aborted before producing a result.
    Error,
}

impl ExitStatus {
    /// Additional keys never affect the status, only missing ones do.
    pub fn from_report(report: &AuditReport) -> Self {
        if report.is_complete() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
