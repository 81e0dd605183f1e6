//! zodiac-compat CLI
//!
//! Scrapes Chinese zodiac compatibility blurbs from the guide pages and
//! regenerates the TypeScript lookup module the web app imports.

mod cli_types;
mod commands;
mod error;
mod logging;

pub(crate) use error::CliError;

use clap::Parser;

use cli_types::{Cli, Commands};
use zodiac_compat_lib::{SettingsOverrides, resolve_settings};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = SettingsOverrides::from(cli.paths);
    let working_dir = std::env::current_dir()?;
    let settings = resolve_settings(&overrides, &working_dir)?;

    match cli.command {
        Commands::Extract => commands::extract::run_extract(&settings),
        Commands::Generate => commands::generate::run_generate(&settings),
        Commands::Run => {
            commands::extract::run_extract(&settings)?;
            log::info!("");
            commands::generate::run_generate(&settings)
        }
        Commands::Signs => {
            commands::signs::run_signs(&settings);
            Ok(())
        }
        Commands::Config => commands::config::run_config_show(&settings),
    }
}
