//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan a build output directory and write `<locale>.text.json` tables
//! - `init`: Write a default `.i18nrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

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

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Build mode of the artifacts being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Unhashed file names; `devPath` is used as output root when configured.
    Development,
    /// File names carry a content hash before the extension.
    #[default]
    Production,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Build mode
    #[arg(long, value_enum, env = "I18N_EXTRACT_MODE", default_value_t = Mode::Production)]
    pub mode: Mode,

    /// Build output directory to scan (overrides config file)
    #[arg(long)]
    pub dist_root: Option<PathBuf>,

    /// Directory of `<locale>.json` message files (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Directory receiving the locale tables (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail when a key has no text in the locale nor the default locale
    #[arg(long)]
    pub fail_on_missing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract per-locale text tables from built assets
    Extract(ExtractCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
