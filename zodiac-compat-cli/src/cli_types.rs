//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use zodiac_compat_lib::SettingsOverrides;

#[derive(Parser)]
#[command(name = "zodiac-compat")]
#[command(
    about = "Extract Chinese zodiac compatibility blurbs and generate the TypeScript lookup module",
    long_about = None
)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Path overrides shared by every command.
#[derive(Args, Clone, Default)]
pub(crate) struct PathArgs {
    /// Settings file (default: ./zodiac-compat.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing one folder per sign (e.g., app/astrology/guide/next)
    #[arg(long, global = true)]
    pub source_root: Option<PathBuf>,

    /// Page file name inside each sign folder (e.g., page.tsx)
    #[arg(long, global = true)]
    pub document: Option<String>,

    /// Intermediate JSON artifact path
    #[arg(long, global = true)]
    pub artifact: Option<PathBuf>,

    /// Generated TypeScript module path
    #[arg(long, global = true)]
    pub module: Option<PathBuf>,
}

impl From<PathArgs> for SettingsOverrides {
    fn from(args: PathArgs) -> Self {
        Self {
            config: args.config,
            source_root: args.source_root,
            document_name: args.document,
            artifact_path: args.artifact,
            module_path: args.module,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scrape every sign's page and write the JSON artifact
    Extract,

    /// Generate the TypeScript module from the JSON artifact
    Generate,

    /// Extract, then generate
    Run,

    /// List the zodiac signs and the page each one is read from
    Signs,

    /// Print the effective settings as TOML
    Config,
}
