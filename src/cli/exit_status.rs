use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Every locale table was written
/// - `Failure` (1): The run finished but failed (missing translations in strict mode, write errors)
/// - `Error` (2): The run could not start (config error, unreadable messages, etc.)
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
