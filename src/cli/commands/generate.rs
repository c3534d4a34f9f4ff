use anyhow::Result;

use super::{
    BatchSummary, CommandResult, CommandSummary,
    helper::{ReconcileMode, prepare_batch, prepare_modules, reconcile_modules},
};
use crate::cli::{ExitStatus, args::GenerateCommand};

/// Write declarations for every compiled module under the source root.
///
/// A module that fails does not stop the others; the command exits with
/// `Error` if any failed.
pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let batch = prepare_batch(&cmd.common)?;
    let prepared = prepare_modules(&batch.loader, batch.scan.modules);
    let files = reconcile_modules(prepared, ReconcileMode::Write)?;

    let summary = BatchSummary {
        files,
        skipped_count: batch.scan.skipped_count,
    };
    let exit_status = if summary.failed_count() > 0 {
        ExitStatus::Error
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Generate(summary),
        exit_status,
    })
}
