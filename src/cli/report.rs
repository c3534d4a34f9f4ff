//! Report formatting and printing utilities.
//!
//! Separate from command logic so the library can be used without any
//! terminal output.

use std::{
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    BatchSummary, CommandResult, CommandSummary, EmitSummary, FileReport, FileStatus, InitSummary,
};
use crate::declaration::{DeclarationStatus, WriteOutcome};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the status column in per-file lines.
const LABEL_WIDTH: usize = 9;

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match &result.summary {
        CommandSummary::Generate(summary) => {
            print_generate_to(summary, verbose, &mut stdout, &mut stderr)
        }
        CommandSummary::Check(summary) => {
            print_check_to(summary, verbose, &mut stdout, &mut stderr)
        }
        // stdout carries the module source; keep it clean.
        CommandSummary::Emit(summary) => {
            if verbose {
                print_emit_to(summary, &mut stderr)
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

pub fn print_generate_to<W: Write, E: Write>(
    summary: &BatchSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_failures(summary, err);
    print_skipped_warning(summary.skipped_count, verbose, err);

    if summary.files.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "No compiled CSS modules found".green()
        );
        return;
    }

    if verbose {
        print_file_table(summary, out, |_| true);
    }

    let failed = summary.failed_count();
    let counts = format!(
        "{} created, {} updated, {} unchanged",
        summary.written_count(WriteOutcome::Created),
        summary.written_count(WriteOutcome::Updated),
        summary.written_count(WriteOutcome::Unchanged),
    );
    let total = summary.files.len();

    if failed == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Processed {} ({})", plural(total, "module"), counts).green()
        );
    } else {
        let _ = writeln!(
            out,
            "{} Processed {} ({}, {} failed)",
            FAILURE_MARK.red(),
            plural(total, "module"),
            counts,
            failed.to_string().red()
        );
    }
}

pub fn print_check_to<W: Write, E: Write>(
    summary: &BatchSummary,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_failures(summary, err);
    print_skipped_warning(summary.skipped_count, verbose, err);

    if summary.files.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "No compiled CSS modules found".green()
        );
        return;
    }

    print_file_table(summary, out, |file| verbose || file.is_out_of_date());

    let total = summary.files.len();
    let out_of_date = summary.out_of_date_count();
    let failed = summary.failed_count();

    if out_of_date == 0 && failed == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} - all up to date", plural(total, "declaration")).green()
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} {} of {} out of date, {} failed (run {} to update)",
            FAILURE_MARK.red(),
            out_of_date,
            plural(total, "declaration"),
            failed,
            "cssdts generate".cyan()
        );
    }
}

pub fn print_emit_to<W: Write>(summary: &EmitSummary, writer: &mut W) {
    let (label, _) = outcome_label(summary.outcome);
    let _ = writeln!(
        writer,
        "{} {} ({})",
        label,
        display_path(&summary.declaration),
        plural(summary.name_count, "class name")
    );
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

// ============================================================
// Internal Functions
// ============================================================

/// Print one aligned line per selected file: status, declaration, name count.
fn print_file_table<W: Write>(
    summary: &BatchSummary,
    writer: &mut W,
    select: impl Fn(&FileReport) -> bool,
) {
    let rows: Vec<(&FileReport, String)> = summary
        .files
        .iter()
        .filter(|file| !file.is_failed() && select(file))
        .map(|file| (file, display_path(&file.declaration)))
        .collect();

    let path_width = rows
        .iter()
        .map(|(_, path)| UnicodeWidthStr::width(path.as_str()))
        .max()
        .unwrap_or(0);

    for (file, path) in &rows {
        let (label, colored_label) = match &file.status {
            FileStatus::Written(outcome) => outcome_label(*outcome),
            FileStatus::Checked(status) => status_label(*status),
            FileStatus::Failed(_) => continue,
        };
        let padding = LABEL_WIDTH.saturating_sub(label.len());
        let path_padding = path_width.saturating_sub(UnicodeWidthStr::width(path.as_str()));

        let count = file
            .name_count
            .map(|n| plural(n, "class name"))
            .unwrap_or_default();

        let _ = writeln!(
            writer,
            "{:>padding$}{} {}{:>path_padding$}  {}",
            "",
            colored_label,
            path,
            "",
            count.dimmed(),
            padding = padding,
            path_padding = path_padding
        );
    }
}

fn print_failures<E: Write>(summary: &BatchSummary, writer: &mut E) {
    for file in &summary.files {
        if let FileStatus::Failed(message) = &file.status {
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), message);
            let _ = writeln!(
                writer,
                "  {} {}",
                "-->".blue(),
                display_path(&file.compiled)
            );
        }
    }
}

fn print_skipped_warning<E: Write>(count: usize, verbose: bool, writer: &mut E) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn outcome_label(outcome: WriteOutcome) -> (&'static str, colored::ColoredString) {
    match outcome {
        WriteOutcome::Created => ("created", "created".green()),
        WriteOutcome::Updated => ("updated", "updated".cyan()),
        WriteOutcome::Unchanged => ("unchanged", "unchanged".dimmed()),
    }
}

fn status_label(status: DeclarationStatus) -> (&'static str, colored::ColoredString) {
    match status {
        DeclarationStatus::Missing => ("missing", "missing".bold().yellow()),
        DeclarationStatus::Stale => ("stale", "stale".bold().yellow()),
        DeclarationStatus::UpToDate => ("ok", "ok".green()),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Path relative to the working directory when possible, without a leading `./`.
fn display_path(path: &Path) -> String {
    let cwd = env::current_dir().ok();
    let path = cwd
        .as_deref()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
        .unwrap_or(path);
    let path = path.strip_prefix(".").unwrap_or(path);
    path.display().to_string()
}
