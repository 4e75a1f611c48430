//! jsxmark - render JSX-style element trees to markup.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use jsxmark::{log, logger};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // --verbose applies before the config is read so config loading is traced
    logger::set_verbose(cli.verbose);
    let config = cli::load_config(cli)?;
    logger::set_verbose(cli.verbose || config.log.verbose);

    match &cli.command {
        Commands::Render { args } => cli::render::run_render(args, &config),
        Commands::Kebab { names } => {
            cli::kebab::run_kebab(names, &mut std::io::stdout().lock())?;
            Ok(())
        }
    }
}
