//! soundgen CLI - render procedural waveforms to WAV files
//!
//! This binary renders JSON recipes and single-shape tones.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

use cli_args::{Cli, Commands};
use soundgen_cli::commands;

/// Installs the stderr log subscriber. `verbose` lowers the threshold from
/// WARN to DEBUG.
fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Render {
            recipe,
            output,
            seed,
        } => commands::render::run(recipe, output, *seed),
        Commands::Tone { args, output } => commands::tone::run(args, output),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_INPUT_ERROR)
        }
    }
}
