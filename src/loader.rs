//! The loader step: one invocation per compiled CSS module.
//!
//! A build tool hands the loader the compiled module source, an optional
//! source map, and a [`LoaderContext`] describing the resource. The loader
//! writes the sibling declaration file and hands the source and map back
//! untouched.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::{
    config::Config,
    declaration::{
        DeclarationStatus, LineEnding, WriteOutcome, declaration_path, inspect, reconcile,
        render_declaration,
    },
    extraction::{DEFAULT_EXPORT_SENTINEL, ExportNames, extract_exports},
};

/// Capabilities the host build tool provides to a loader invocation.
pub trait LoaderContext {
    /// Path of the module being processed.
    fn resource_path(&self) -> &Path;

    /// Register `path` as a dependency of the current module, so the build
    /// tool re-runs the loader when it changes.
    fn add_dependency(&mut self, path: &Path);
}

/// A [`LoaderContext`] for a single resource that records its dependencies.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    resource: PathBuf,
    dependencies: Vec<PathBuf>,
}

impl ResourceContext {
    pub fn new(resource: impl Into<PathBuf>) -> Self {
        Self {
            resource: resource.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn dependencies(&self) -> &[PathBuf] {
        &self.dependencies
    }
}

impl LoaderContext for ResourceContext {
    fn resource_path(&self) -> &Path {
        &self.resource
    }

    fn add_dependency(&mut self, path: &Path) {
        if !self.dependencies.iter().any(|dep| dep == path) {
            self.dependencies.push(path.to_path_buf());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Identifier whose `.locals` property holds the class-name map.
    pub sentinel: String,
    pub line_ending: LineEnding,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_EXPORT_SENTINEL.to_string(),
            line_ending: LineEnding::default(),
        }
    }
}

impl From<&Config> for LoaderOptions {
    fn from(config: &Config) -> Self {
        Self {
            sentinel: config.sentinel.clone(),
            line_ending: config.line_ending,
        }
    }
}

/// Declaration rendered for one resource, not yet reconciled with the disk.
#[derive(Debug, Clone)]
pub struct PreparedDeclaration {
    pub path: PathBuf,
    pub names: ExportNames,
    pub text: String,
}

impl PreparedDeclaration {
    /// Write the declaration if it is missing or differs.
    pub async fn reconcile(&self) -> Result<WriteOutcome> {
        reconcile(&self.path, &self.text).await
    }

    /// Compare the declaration with the disk without writing.
    pub async fn inspect(&self) -> Result<DeclarationStatus> {
        inspect(&self.path, &self.text).await
    }
}

/// Completion value of a loader invocation.
#[derive(Debug, Clone)]
pub struct LoaderOutput {
    /// The input source, unchanged.
    pub source: String,
    /// The input source map, unchanged.
    pub map: Option<String>,
    pub declaration_path: PathBuf,
    pub names: ExportNames,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct Loader {
    options: LoaderOptions,
}

impl Loader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Synchronous half of an invocation: derive the declaration path,
    /// register it as a dependency, extract names and render the text.
    ///
    /// The dependency is registered before parsing, so it is recorded even
    /// when the source fails to parse.
    pub fn prepare<C>(&self, ctx: &mut C, source: &str) -> Result<PreparedDeclaration>
    where
        C: LoaderContext + ?Sized,
    {
        let resource = ctx.resource_path().to_path_buf();
        let path = declaration_path(&resource)?;
        ctx.add_dependency(&path);

        let names = extract_exports(source, &resource.to_string_lossy(), &self.options.sentinel)?;
        let text = render_declaration(&names, self.options.line_ending);

        Ok(PreparedDeclaration { path, names, text })
    }

    /// Run a full invocation and return the source and map unchanged.
    pub async fn run<C>(
        &self,
        ctx: &mut C,
        source: String,
        map: Option<String>,
    ) -> Result<LoaderOutput>
    where
        C: LoaderContext + ?Sized,
    {
        let prepared = self.prepare(ctx, &source)?;
        let outcome = prepared.reconcile().await?;

        Ok(LoaderOutput {
            source,
            map,
            declaration_path: prepared.path,
            names: prepared.names,
            outcome,
        })
    }
}
