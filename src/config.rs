use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    declaration::LineEnding,
    extraction::{DEFAULT_EXPORT_SENTINEL, identifier::is_identifier_name},
};

pub const CONFIG_FILE_NAME: &str = ".cssdtsrc.json";

/// Compiled-module suffixes recognized when scanning. The resource path is
/// the file path without its trailing `.js`.
pub const DEFAULT_COMPILED_SUFFIXES: &[&str] = &[".css.js", ".scss.js", ".sass.js", ".less.js"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_sentinel")]
    pub sentinel: String,
    #[serde(default)]
    pub line_ending: LineEnding,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_compiled_suffixes")]
    pub compiled_suffixes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
}

fn default_sentinel() -> String {
    DEFAULT_EXPORT_SENTINEL.to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_compiled_suffixes() -> Vec<String> {
    DEFAULT_COMPILED_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            line_ending: LineEnding::default(),
            source_root: default_source_root(),
            compiled_suffixes: default_compiled_suffixes(),
            ignores: default_ignores(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier_name(&self.sentinel) {
            bail!(
                "Invalid 'sentinel': \"{}\" is not a JavaScript identifier",
                self.sentinel
            );
        }

        if self.compiled_suffixes.is_empty() {
            bail!("'compiledSuffixes' must not be empty");
        }

        for suffix in &self.compiled_suffixes {
            // Anything shorter would leave an empty resource file name.
            if !suffix.ends_with(".js") || suffix.len() <= ".js".len() {
                bail!(
                    "Invalid suffix in 'compiledSuffixes': \"{}\" (expected e.g. \".css.js\")",
                    suffix
                );
            }
        }

        // Patterns without wildcards are literal paths and need no validation.
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Read the nearest config file without validating it; callers validate
/// after applying command-line overrides.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
