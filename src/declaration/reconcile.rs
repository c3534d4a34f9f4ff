use std::{io, path::Path};

use anyhow::{Context, Result, bail};
use tokio::fs;

/// What [`reconcile`] did to the declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// The file existed with different content and was overwritten.
    Updated,
    /// The file already had the expected content; nothing was written.
    Unchanged,
}

/// State of a declaration file compared to its expected content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationStatus {
    Missing,
    Stale,
    UpToDate,
}

/// Compare the file at `path` with `expected` without writing anything.
///
/// A path that exists but is not a regular file (a directory, for example)
/// is an error rather than something to overwrite.
pub async fn inspect(path: &Path, expected: &str) -> Result<DeclarationStatus> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(DeclarationStatus::Missing);
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("Failed to stat declaration file: {}", path.display())
            });
        }
    };

    if !metadata.is_file() {
        bail!(
            "Declaration path exists but is not a regular file: {}",
            path.display()
        );
    }

    let current = fs::read(path)
        .await
        .with_context(|| format!("Failed to read declaration file: {}", path.display()))?;

    if current == expected.as_bytes() {
        Ok(DeclarationStatus::UpToDate)
    } else {
        Ok(DeclarationStatus::Stale)
    }
}

/// Make the file at `path` contain exactly `expected`, writing only when the
/// current content differs or the file is absent.
pub async fn reconcile(path: &Path, expected: &str) -> Result<WriteOutcome> {
    let outcome = match inspect(path, expected).await? {
        DeclarationStatus::UpToDate => return Ok(WriteOutcome::Unchanged),
        DeclarationStatus::Missing => WriteOutcome::Created,
        DeclarationStatus::Stale => WriteOutcome::Updated,
    };

    fs::write(path, expected)
        .await
        .with_context(|| format!("Failed to write declaration file: {}", path.display()))?;

    Ok(outcome)
}
