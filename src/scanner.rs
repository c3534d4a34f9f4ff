//! Discovery of compiled CSS-module files for batch runs.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// A compiled module and the resource it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompiledModule {
    /// The compiled JavaScript file, e.g. `button.module.css.js`.
    pub compiled: PathBuf,
    /// The stylesheet it was compiled from, e.g. `button.module.css`.
    pub resource: PathBuf,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Sorted by compiled path.
    pub modules: Vec<CompiledModule>,
    pub skipped_count: usize,
}

pub fn scan_compiled_modules(
    base_dir: &Path,
    suffixes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut modules = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file()
            && let Some(resource) = resource_for(path, suffixes)
        {
            modules.push(CompiledModule {
                compiled: path.to_path_buf(),
                resource,
            });
        }
    }

    modules.sort();

    ScanResult {
        modules,
        skipped_count,
    }
}

/// Resource path of a compiled module: the path without its trailing `.js`,
/// if the file name ends with one of `suffixes` and keeps a non-empty stem.
pub fn resource_for(path: &Path, suffixes: &[String]) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    let matched = suffixes
        .iter()
        .any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix.as_str()));
    if !matched {
        return None;
    }

    let resource_name = file_name.strip_suffix(".js")?;
    Some(path.with_file_name(resource_name))
}
