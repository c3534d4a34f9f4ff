use anyhow::Result;

use super::{
    BatchSummary, CommandResult, CommandSummary,
    helper::{ReconcileMode, prepare_batch, prepare_modules, reconcile_modules},
};
use crate::cli::{ExitStatus, args::CheckCommand};

/// Compare every declaration with what `generate` would write, without
/// touching the disk.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let batch = prepare_batch(&cmd.common)?;
    let prepared = prepare_modules(&batch.loader, batch.scan.modules);
    let files = reconcile_modules(prepared, ReconcileMode::Inspect)?;

    let summary = BatchSummary {
        files,
        skipped_count: batch.scan.skipped_count,
    };
    let exit_status = if summary.failed_count() > 0 {
        ExitStatus::Error
    } else if summary.out_of_date_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Check(summary),
        exit_status,
    })
}
