pub mod check;
pub mod emit;
pub mod generate;
pub mod helper;
pub mod init;

use std::path::PathBuf;

use crate::declaration::{DeclarationStatus, WriteOutcome};

use super::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Generate(BatchSummary),
    Check(BatchSummary),
    Emit(EmitSummary),
    Init(InitSummary),
}

/// Per-file result of a batch command.
#[derive(Debug)]
pub struct FileReport {
    pub compiled: PathBuf,
    pub declaration: PathBuf,
    /// Number of class names extracted; None if the module failed.
    pub name_count: Option<usize>,
    pub status: FileStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Written(WriteOutcome),
    Checked(DeclarationStatus),
    /// The module could not be processed; holds the error chain.
    Failed(String),
}

impl FileReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }

    /// True if `check` found the declaration missing or different.
    pub fn is_out_of_date(&self) -> bool {
        matches!(
            self.status,
            FileStatus::Checked(DeclarationStatus::Missing | DeclarationStatus::Stale)
        )
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Sorted by compiled path.
    pub files: Vec<FileReport>,
    /// Directory entries that could not be read while scanning.
    pub skipped_count: usize,
}

impl BatchSummary {
    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }

    pub fn out_of_date_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_out_of_date()).count()
    }

    pub fn written_count(&self, outcome: WriteOutcome) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Written(outcome))
            .count()
    }
}

#[derive(Debug)]
pub struct EmitSummary {
    pub declaration: PathBuf,
    pub name_count: usize,
    pub outcome: WriteOutcome,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running cssdts commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
