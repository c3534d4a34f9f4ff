use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tokio::{runtime::Runtime, task::JoinSet};

use super::{FileReport, FileStatus};
use crate::{
    cli::args::{CommonArgs, LoaderArgs},
    config::{Config, load_config},
    declaration::declaration_path,
    loader::{Loader, PreparedDeclaration, ResourceContext},
    scanner::{CompiledModule, ScanResult, scan_compiled_modules},
};

/// Load the config file (if any) from the working directory and apply
/// command-line overrides.
pub fn load_effective_config(loader_args: &LoaderArgs) -> Result<Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let mut config = load_config(&cwd)?.config;

    if let Some(sentinel) = &loader_args.sentinel {
        config.sentinel = sentinel.clone();
    }
    if let Some(line_ending) = loader_args.line_ending {
        config.line_ending = line_ending;
    }

    config.validate()?;
    Ok(config)
}

/// Everything a batch command needs: the loader and the modules to process.
pub struct BatchInput {
    pub loader: Loader,
    pub scan: ScanResult,
}

pub fn prepare_batch(common: &CommonArgs) -> Result<BatchInput> {
    let mut config = load_effective_config(&common.loader)?;
    if let Some(source_root) = &common.source_root {
        config.source_root = source_root.to_string_lossy().into_owned();
    }

    let source_root = PathBuf::from(&config.source_root);
    if !source_root.is_dir() {
        anyhow::bail!("Source root is not a directory: {}", source_root.display());
    }

    let scan = scan_compiled_modules(
        &source_root,
        &config.compiled_suffixes,
        &config.ignores,
        common.verbose,
    );

    Ok(BatchInput {
        loader: Loader::new((&config).into()),
        scan,
    })
}

/// A module after the parallel extraction phase.
pub struct PreparedModule {
    pub module: CompiledModule,
    pub declaration: Result<PreparedDeclaration>,
}

/// Read, parse and render every module on the rayon pool.
pub fn prepare_modules(loader: &Loader, modules: Vec<CompiledModule>) -> Vec<PreparedModule> {
    modules
        .into_par_iter()
        .map(|module| {
            let declaration = prepare_module(loader, &module);
            PreparedModule {
                module,
                declaration,
            }
        })
        .collect()
}

fn prepare_module(loader: &Loader, module: &CompiledModule) -> Result<PreparedDeclaration> {
    let source = fs::read_to_string(&module.compiled)
        .with_context(|| format!("Failed to read compiled module: {}", module.compiled.display()))?;
    let mut ctx = ResourceContext::new(&module.resource);
    loader.prepare(&mut ctx, &source)
}

/// Whether the async phase writes declarations or only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileMode {
    Write,
    Inspect,
}

/// Reconcile every prepared module concurrently. Reports keep input order.
pub fn reconcile_modules(
    prepared: Vec<PreparedModule>,
    mode: ReconcileMode,
) -> Result<Vec<FileReport>> {
    runtime()?.block_on(async move {
        let total = prepared.len();
        let mut tasks = JoinSet::new();

        for (index, item) in prepared.into_iter().enumerate() {
            tasks.spawn(async move { (index, reconcile_module(item, mode).await) });
        }

        let mut reports: Vec<Option<FileReport>> = (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            let (index, report) = joined.context("Declaration task panicked")?;
            reports[index] = Some(report);
        }

        Ok(reports.into_iter().flatten().collect())
    })
}

async fn reconcile_module(item: PreparedModule, mode: ReconcileMode) -> FileReport {
    let PreparedModule {
        module,
        declaration,
    } = item;

    let (declaration_file, name_count, status) = match declaration {
        Ok(prepared) => {
            let status = match mode {
                ReconcileMode::Write => prepared.reconcile().await.map(FileStatus::Written),
                ReconcileMode::Inspect => prepared.inspect().await.map(FileStatus::Checked),
            };
            let status = status.unwrap_or_else(|err| FileStatus::Failed(format!("{:#}", err)));
            (prepared.path, Some(prepared.names.len()), status)
        }
        Err(err) => (
            fallback_declaration_path(&module.resource),
            None,
            FileStatus::Failed(format!("{:#}", err)),
        ),
    };

    FileReport {
        compiled: module.compiled,
        declaration: declaration_file,
        name_count,
        status,
    }
}

fn fallback_declaration_path(resource: &Path) -> PathBuf {
    declaration_path(resource).unwrap_or_else(|_| resource.to_path_buf())
}

/// Runtime for the async declaration I/O.
pub fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
