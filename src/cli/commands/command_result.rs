use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{MissingTranslation, WriteFailure};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct ExtractSummary {
    /// Assets loaded from the build output directory.
    pub assets_loaded: usize,
    /// Files under the build output directory that could not be read as text.
    pub assets_skipped: usize,
    /// Assets that passed the filter and referenced at least one key.
    pub assets_scanned: usize,
    /// Distinct message keys referenced across all logical files.
    pub key_count: usize,
    pub written: Vec<(String, PathBuf)>,
    pub write_failures: Vec<WriteFailure>,
    /// Non-empty only when strict mode stopped the run.
    pub missing: Vec<MissingTranslation>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub verbose: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(summary) => {
                if summary.missing.is_empty() && summary.write_failures.is_empty() {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                }
            }
            CommandSummary::Init(summary) => {
                if summary.created {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                }
            }
        }
    }
}
