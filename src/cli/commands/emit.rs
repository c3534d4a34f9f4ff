use anyhow::{Context, Result};
use tokio::{
    fs,
    io::{self, AsyncReadExt, AsyncWriteExt},
};

use super::{CommandResult, CommandSummary, EmitSummary, helper::runtime};
use crate::{
    cli::{ExitStatus, args::EmitCommand, commands::helper::load_effective_config},
    loader::{Loader, ResourceContext},
};

/// Run the loader once, as a build tool would: the declaration is written
/// next to `--resource` and the source is echoed to stdout unchanged.
///
/// A `--map` is handed to the loader with the source and comes back
/// untouched; it is written to `--map-out` if given, otherwise dropped.
pub fn emit(cmd: EmitCommand) -> Result<CommandResult> {
    let config = load_effective_config(&cmd.loader)?;
    let loader = Loader::new((&config).into());

    runtime()?.block_on(async move {
        let source = match &cmd.input {
            Some(path) => fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input: {}", path.display()))?,
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .await
                    .context("Failed to read source from stdin")?;
                source
            }
        };

        let map = match &cmd.map {
            Some(path) => Some(
                fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read source map: {}", path.display()))?,
            ),
            None => None,
        };

        let mut ctx = ResourceContext::new(&cmd.resource);
        let output = loader.run(&mut ctx, source, map).await?;

        if let (Some(path), Some(map)) = (&cmd.map_out, &output.map) {
            fs::write(path, map)
                .await
                .with_context(|| format!("Failed to write source map: {}", path.display()))?;
        }

        let mut stdout = io::stdout();
        stdout
            .write_all(output.source.as_bytes())
            .await
            .context("Failed to write source to stdout")?;
        stdout.flush().await?;

        Ok(CommandResult {
            summary: CommandSummary::Emit(EmitSummary {
                declaration: output.declaration_path,
                name_count: output.names.len(),
                outcome: output.outcome,
            }),
            exit_status: ExitStatus::Success,
        })
    })
}
