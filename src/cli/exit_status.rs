use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, declarations are current
/// - `Failure` (1): `check` found missing or stale declarations
/// - `Error` (2): Command failed (parse error, I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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
