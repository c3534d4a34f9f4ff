//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write declarations for every compiled CSS module under the source root
//! - `check`: Report missing or stale declarations without writing
//! - `emit`: Run the loader once on a single compiled module
//! - `init`: Initialize cssdts configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::declaration::LineEnding;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Emit(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Loader settings that can override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct LoaderArgs {
    /// Identifier whose `.locals` holds the class-name map (overrides config file)
    #[arg(long)]
    pub sentinel: Option<String>,

    /// Line ending of generated declarations (overrides config file)
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEnding>,
}

/// Common arguments shared by batch commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory scanned for compiled modules (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct EmitCommand {
    /// Stylesheet the module was compiled from; the declaration is written next to it
    #[arg(long)]
    pub resource: PathBuf,

    /// Source map of the compiled module, passed through unchanged
    #[arg(long)]
    pub map: Option<PathBuf>,

    /// Where to write the passed-through source map (dropped when omitted)
    #[arg(long, requires = "map")]
    pub map_out: Option<PathBuf>,

    /// Compiled module source file (reads stdin when omitted)
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub loader: LoaderArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write .d.ts files for all compiled CSS modules under the source root
    Generate(GenerateCommand),
    /// Check that .d.ts files are present and up to date, without writing
    Check(CheckCommand),
    /// Write the .d.ts for one compiled module and echo its source to stdout
    Emit(EmitCommand),
    /// Initialize a new .cssdtsrc.json configuration file
    Init,
}
